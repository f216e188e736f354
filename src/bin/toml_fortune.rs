use clap::Parser;
use seiza_fortune::app::pipelines::report_pipeline::ReportPipeline;
use seiza_fortune::config::toml_config::{ClockConfig, TomlConfig};
use seiza_fortune::core::ConfigProvider;
use seiza_fortune::utils::error::ErrorSeverity;
use seiza_fortune::utils::{logger, validation::Validate};
use seiza_fortune::{BatchRunner, Clock, LocalStorage, Period};

#[derive(Parser)]
#[command(name = "toml-fortune")]
#[command(about = "TOML に並べたプロフィールをまとめて占い、CSV / JSON に書き出す")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "fortune-report.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    /// Override the month used for the thisYear adjustment
    #[arg(long)]
    month: Option<u32>,

    /// Dry run - show what would be computed without writing files
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // ログの初期化
    if args.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting TOML-based fortune report");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // コマンドラインの指定で上書き
    if let Some(month) = args.month {
        config.clock = Some(ClockConfig { month: Some(month) });
        tracing::info!("🔧 Month overridden to: {}", month);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");
    display_config_summary(&config, &args);

    if args.dry_run {
        perform_dry_run(&config);
        return Ok(());
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let months = Clock::from_override(config.fixed_month());
    let pipeline = ReportPipeline::new(storage, config, months);
    let runner = BatchRunner::new(pipeline);

    match runner.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Fortune report completed successfully!");
            println!("✅ Fortune report completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Fortune report failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!("  Report: {}", config.report.name);
    if let Some(description) = &config.report.description {
        println!("  Description: {}", description);
    }
    println!("  Output: {}", config.output_path());
    println!("  Formats: {}", config.report.output_formats.join(", "));
    println!("  Profiles: {}", config.profiles.len());
    match config.fixed_month() {
        Some(month) => println!("  Month: {} (fixed)", month),
        None => println!("  Month: system clock"),
    }

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(config: &TomlConfig) {
    println!("🔍 Dry Run Analysis:");
    println!();

    for profile in &config.profiles {
        let periods = profile
            .periods
            .clone()
            .unwrap_or_else(|| Period::ALL.to_vec());
        let labels: Vec<&str> = periods.iter().map(|p| p.label()).collect();
        println!(
            "  👤 {} ({}) -> {}",
            profile.name,
            profile.birth_date,
            labels.join("・")
        );
    }

    println!();
    println!("  📊 Expected readings: {}", config.reading_requests().len());
    if config.wants_format("csv") {
        println!("  💾 {}", config.csv_filename());
    }
    if config.wants_format("json") {
        println!("  💾 {}", config.json_filename());
    }

    println!();
    println!("✅ Dry run analysis complete.");
}
