use anyhow::Result;
use seiza_fortune::app::pipelines::report_pipeline::ReportPipeline;
use seiza_fortune::config::toml_config::TomlConfig;
use seiza_fortune::core::ConfigProvider;
use seiza_fortune::utils::validation::Validate;
use seiza_fortune::{BatchRunner, Clock, LocalStorage};
use tempfile::TempDir;

fn write_config(temp_dir: &TempDir, body: &str) -> Result<String> {
    let output_path = temp_dir.path().join("out");
    let normalized = output_path.to_str().unwrap().replace('\\', "/");
    let content = format!(
        r#"
[report]
name = "integration"
output_path = "{}"
output_formats = ["csv", "json"]

[clock]
month = 4
{}
"#,
        normalized, body
    );
    let config_path = temp_dir.path().join("fortune-report.toml");
    std::fs::write(&config_path, content)?;
    Ok(config_path.to_str().unwrap().to_string())
}

#[tokio::test]
async fn test_end_to_end_report_from_toml_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = write_config(
        &temp_dir,
        r#"
[[profiles]]
name = "山田 花子"
birth_date = "1990-05-01"
periods = ["today", "thisYear"]

[[profiles]]
name = "Broken"
birth_date = "1990-02-30"
periods = ["today"]
"#,
    )?;

    let config = TomlConfig::from_file(&config_path)?;
    config.validate()?;

    let storage = LocalStorage::new(config.output_path().to_string());
    let months = Clock::from_override(config.fixed_month());
    let runner = BatchRunner::new(ReportPipeline::new(storage, config, months));
    let output_path = runner.run().await?;

    let out_dir = temp_dir.path().join("out");
    assert!(output_path.ends_with("out"));

    let csv = std::fs::read_to_string(out_dir.join("readings.csv"))?;
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("山田 花子,1990-05-01,today,吉,"));
    // 4月の「今年」は大吉が中吉に下がる
    assert!(lines[2].starts_with("山田 花子,1990-05-01,thisYear,中吉,"));
    assert!(lines[3].starts_with("Broken,1990-02-30,today,,"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out_dir.join("readings.json"))?)?;
    let readings = json.as_array().unwrap();
    assert_eq!(readings.len(), 3);
    assert_eq!(readings[0]["result"]["zodiac"], "牡牛座");
    assert_eq!(readings[0]["result"]["lifePathNumber"], 7);
    assert!(readings[2]["result"].is_null());
    Ok(())
}

#[tokio::test]
async fn test_profile_without_periods_gets_all_four() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = write_config(
        &temp_dir,
        r#"
[[profiles]]
name = "Hanako"
birth_date = "1990-05-01"
"#,
    )?;

    let config = TomlConfig::from_file(&config_path)?;
    assert_eq!(config.reading_requests().len(), 4);

    let storage = LocalStorage::new(config.output_path().to_string());
    let runner = BatchRunner::new(ReportPipeline::new(storage, config, Clock::Fixed(9)));
    runner.run().await?;

    let csv = std::fs::read_to_string(temp_dir.path().join("out").join("readings.csv"))?;
    for period in ["today", "tomorrow", "thisYear", "nextYear"] {
        assert!(csv.contains(&format!("Hanako,1990-05-01,{},", period)));
    }
    Ok(())
}

#[test]
fn test_invalid_config_is_rejected_before_running() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = write_config(
        &temp_dir,
        r#"
[[profiles]]
name = "   "
birth_date = "1990-05-01"
"#,
    )?;

    let config = TomlConfig::from_file(&config_path)?;
    assert!(config.validate().is_err());
    Ok(())
}
