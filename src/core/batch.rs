use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct BatchRunner<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> BatchRunner<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("🔮 Starting batch reading...");

        let requests = self.pipeline.extract().await?;
        tracing::info!("📥 Collected {} reading requests", requests.len());

        let readings = self.pipeline.transform(requests).await?;
        let answered = readings.iter().filter(|r| r.result.is_some()).count();
        tracing::info!(
            "✨ Composed {} readings ({} without result)",
            answered,
            readings.len() - answered
        );

        let output_path = self.pipeline.load(readings).await?;
        tracing::info!("📁 Report saved to: {}", output_path);

        Ok(output_path)
    }
}
