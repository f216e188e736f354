use clap::Parser;
use seiza_fortune::app::inputs::SavedInputs;
use seiza_fortune::app::render;
use seiza_fortune::utils::error::{ErrorSeverity, FortuneError};
use seiza_fortune::utils::{logger, validation::Validate};
use seiza_fortune::{
    CliConfig, Clock, FortuneEngine, JsonFileInputStore, LocalStorage, OutputFormat,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // ログの初期化
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting seiza-fortune CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if config.list_periods {
        println!("{}", render::render_period_options());
        return Ok(());
    }

    // 設定の検証
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let store = JsonFileInputStore::new(
        LocalStorage::new(config.state_dir()),
        config.state_file_name(),
    );

    // 前回の入力を復元してからフラグで上書きする
    let mut inputs = match SavedInputs::restore(&store).await {
        Ok(inputs) => inputs,
        Err(e) => {
            tracing::warn!("⚠️ Could not restore saved inputs: {}", e);
            SavedInputs::default()
        }
    };
    config.merge_into(&mut inputs);
    let birth_date = config.resolve_birth_date(&inputs);

    if !config.no_save {
        // 保存の失敗は警告だけにして占いは続ける
        if let Err(e) = inputs.persist(&store).await {
            tracing::warn!(
                "⚠️ Could not save inputs: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::warn!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        }
    }

    let engine = FortuneEngine::new(Clock::from_override(config.month));
    let fortune = engine.compute(&inputs.name, &birth_date, inputs.period);

    match (fortune, config.format) {
        (Some(fortune), OutputFormat::Text) => {
            println!("{}", render::render_card(inputs.name.trim(), &fortune));
        }
        (Some(fortune), OutputFormat::Json) => match render::render_json(&fortune) {
            Ok(json) => println!("{}", json),
            Err(e) => exit_with(&e),
        },
        (None, OutputFormat::Text) => println!("{}", render::render_placeholder()),
        (None, OutputFormat::Json) => println!("null"),
    }

    Ok(())
}

fn exit_with(e: &FortuneError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
