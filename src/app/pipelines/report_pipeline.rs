use crate::app::report::{readings_to_csv, readings_to_json};
use crate::config::toml_config::TomlConfig;
use crate::core::engine::FortuneEngine;
use crate::core::{MonthSource, Pipeline, Reading, ReadingRequest, Storage};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// TOML のプロフィール一覧を占って CSV / JSON に書き出す
pub struct ReportPipeline<S: Storage, M: MonthSource> {
    storage: S,
    config: TomlConfig,
    engine: FortuneEngine<M>,
}

impl<S: Storage, M: MonthSource> ReportPipeline<S, M> {
    pub fn new(storage: S, config: TomlConfig, months: M) -> Self {
        Self {
            storage,
            config,
            engine: FortuneEngine::new(months),
        }
    }
}

#[async_trait]
impl<S: Storage, M: MonthSource> Pipeline for ReportPipeline<S, M> {
    async fn extract(&self) -> Result<Vec<ReadingRequest>> {
        let requests = self.config.reading_requests();
        tracing::debug!(
            "Expanded {} profiles into {} requests",
            self.config.profiles.len(),
            requests.len()
        );
        Ok(requests)
    }

    async fn transform(&self, requests: Vec<ReadingRequest>) -> Result<Vec<Reading>> {
        let readings = requests
            .into_iter()
            .map(|request| {
                let result =
                    self.engine
                        .compute(&request.name, &request.birth_date, request.period);
                if result.is_none() {
                    tracing::warn!(
                        name = %request.name,
                        birth_date = %request.birth_date,
                        "⚠️ No reading for profile (missing name or invalid birth date)"
                    );
                }
                Reading { request, result }
            })
            .collect();
        Ok(readings)
    }

    async fn load(&self, readings: Vec<Reading>) -> Result<String> {
        let mut written = Vec::new();

        if self.config.wants_format("csv") {
            let csv = readings_to_csv(&readings)?;
            self.storage
                .write_file(self.config.csv_filename(), csv.as_bytes())
                .await?;
            written.push(self.config.csv_filename());
        }

        if self.config.wants_format("json") {
            let json = readings_to_json(&readings)?;
            self.storage
                .write_file(self.config.json_filename(), json.as_bytes())
                .await?;
            written.push(self.config.json_filename());
        }

        tracing::debug!("Wrote report files: {}", written.join(", "));

        let output_path = Path::new(&self.config.report.output_path);
        Ok(output_path.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::FixedMonth;
    use crate::adapters::storage::LocalStorage;
    use tempfile::TempDir;

    fn config_for(output_path: &str, formats: &str) -> TomlConfig {
        TomlConfig::from_toml_str(&format!(
            r#"
[report]
name = "test"
output_path = "{}"
output_formats = {}

[[profiles]]
name = "山田 花子"
birth_date = "1990-05-01"
periods = ["thisYear"]

[[profiles]]
name = ""
birth_date = "1990-05-01"
periods = ["today"]
"#,
            output_path.replace('\\', "/"),
            formats
        ))
        .unwrap()
    }

    #[tokio::test]
    async fn test_transform_keeps_unanswered_requests() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().to_str().unwrap().to_string();
        let pipeline = ReportPipeline::new(
            LocalStorage::new(path.clone()),
            config_for(&path, r#"["csv"]"#),
            FixedMonth(2),
        );

        let requests = pipeline.extract().await.unwrap();
        let readings = pipeline.transform(requests).await.unwrap();

        assert_eq!(readings.len(), 2);
        assert_eq!(
            readings[0].result.as_ref().unwrap().level.label(),
            "中吉"
        );
        assert!(readings[1].result.is_none());
    }

    #[tokio::test]
    async fn test_load_writes_requested_formats_only() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().to_str().unwrap().to_string();
        let pipeline = ReportPipeline::new(
            LocalStorage::new(path.clone()),
            config_for(&path, r#"["json"]"#),
            FixedMonth(9),
        );

        let requests = pipeline.extract().await.unwrap();
        let readings = pipeline.transform(requests).await.unwrap();
        pipeline.load(readings).await.unwrap();

        assert!(temp_dir.path().join("readings.json").exists());
        assert!(!temp_dir.path().join("readings.csv").exists());
    }
}
