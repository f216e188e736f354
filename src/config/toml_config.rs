use crate::core::ConfigProvider;
use crate::domain::model::{Period, ReadingRequest};
use crate::utils::error::{FortuneError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const VALID_OUTPUT_FORMATS: [&str; 2] = ["csv", "json"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub report: ReportConfig,
    pub clock: Option<ClockConfig>,
    #[serde(default)]
    pub profiles: Vec<ProfileConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub name: String,
    pub description: Option<String>,
    pub output_path: String,
    pub output_formats: Vec<String>,
    pub filenames: Option<FilenameConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilenameConfig {
    pub csv: Option<String>,
    pub json: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockConfig {
    /// 「今年」補正に使う月を固定する
    pub month: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub name: String,
    pub birth_date: String,
    pub periods: Option<Vec<Period>>,
}

impl TomlConfig {
    /// TOML ファイルから設定を読み込む
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(&path).map_err(|e| FortuneError::ConfigError {
                message: format!("cannot read {}: {}", path.as_ref().display(), e),
            })?;
        Self::from_toml_str(&content)
    }

    /// TOML 文字列から設定を読み込む
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| FortuneError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// `${VAR_NAME}` を環境変数で置き換える。未定義ならそのまま残す
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("report.name", &self.report.name)?;
        validation::validate_path("report.output_path", &self.report.output_path)?;

        if self.report.output_formats.is_empty() {
            return Err(FortuneError::MissingConfigError {
                field: "report.output_formats".to_string(),
            });
        }
        for format in &self.report.output_formats {
            validation::validate_one_of("report.output_formats", format, &VALID_OUTPUT_FORMATS)?;
        }

        if let Some(month) = self.fixed_month() {
            validation::validate_range("clock.month", month, 1, 12)?;
        }

        if self.profiles.is_empty() {
            return Err(FortuneError::MissingConfigError {
                field: "profiles".to_string(),
            });
        }
        for (i, profile) in self.profiles.iter().enumerate() {
            validation::validate_non_empty_string(&format!("profiles[{}].name", i), &profile.name)?;
            if let Some(periods) = &profile.periods {
                if periods.is_empty() {
                    return Err(FortuneError::InvalidConfigValueError {
                        field: format!("profiles[{}].periods", i),
                        value: "[]".to_string(),
                        reason: "At least one period is required when periods is set"
                            .to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    pub fn wants_format(&self, format: &str) -> bool {
        self.report.output_formats.iter().any(|f| f == format)
    }

    pub fn csv_filename(&self) -> &str {
        self.report
            .filenames
            .as_ref()
            .and_then(|f| f.csv.as_deref())
            .unwrap_or("readings.csv")
    }

    pub fn json_filename(&self) -> &str {
        self.report
            .filenames
            .as_ref()
            .and_then(|f| f.json.as_deref())
            .unwrap_or("readings.json")
    }

    /// プロフィール × 期間の組み合わせを展開する。期間の指定がなければ4つすべて
    pub fn reading_requests(&self) -> Vec<ReadingRequest> {
        self.profiles
            .iter()
            .flat_map(|profile| {
                let periods = profile
                    .periods
                    .clone()
                    .unwrap_or_else(|| Period::ALL.to_vec());
                periods.into_iter().map(move |period| ReadingRequest {
                    name: profile.name.clone(),
                    birth_date: profile.birth_date.clone(),
                    period,
                })
            })
            .collect()
    }
}

impl ConfigProvider for TomlConfig {
    fn output_path(&self) -> &str {
        &self.report.output_path
    }

    fn fixed_month(&self) -> Option<u32> {
        self.clock.as_ref().and_then(|c| c.month)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASIC: &str = r#"
[report]
name = "family"
output_path = "./fortune-output"
output_formats = ["csv", "json"]

[clock]
month = 3

[[profiles]]
name = "山田 花子"
birth_date = "1990-05-01"
periods = ["today", "thisYear"]

[[profiles]]
name = "山田 太郎"
birth_date = "1988-12-24"
"#;

    #[test]
    fn test_parse_basic_toml_config() {
        let config = TomlConfig::from_toml_str(BASIC).unwrap();

        assert_eq!(config.report.name, "family");
        assert_eq!(config.output_path(), "./fortune-output");
        assert_eq!(config.fixed_month(), Some(3));
        assert_eq!(config.profiles.len(), 2);
        assert_eq!(
            config.profiles[0].periods,
            Some(vec![Period::Today, Period::ThisYear])
        );
        assert!(config.validate().is_ok());
        assert_eq!(config.csv_filename(), "readings.csv");
        assert_eq!(config.json_filename(), "readings.json");
    }

    #[test]
    fn test_reading_requests_expand_periods() {
        let config = TomlConfig::from_toml_str(BASIC).unwrap();
        let requests = config.reading_requests();

        // 2 + 4
        assert_eq!(requests.len(), 6);
        assert_eq!(requests[1].period, Period::ThisYear);
        assert_eq!(requests[2].name, "山田 太郎");
        assert_eq!(requests[5].period, Period::NextYear);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SEIZA_TEST_OUTPUT_DIR", "/tmp/seiza-test");

        let toml_content = r#"
[report]
name = "env"
output_path = "${SEIZA_TEST_OUTPUT_DIR}"
output_formats = ["csv"]

[[profiles]]
name = "Hanako"
birth_date = "1990-05-01"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output_path(), "/tmp/seiza-test");

        std::env::remove_var("SEIZA_TEST_OUTPUT_DIR");
    }

    #[test]
    fn test_unknown_period_is_parse_error() {
        let toml_content = r#"
[report]
name = "bad"
output_path = "./out"
output_formats = ["csv"]

[[profiles]]
name = "Hanako"
birth_date = "1990-05-01"
periods = ["someday"]
"#;
        assert!(TomlConfig::from_toml_str(toml_content).is_err());
    }

    #[test]
    fn test_config_validation() {
        let bad_format = BASIC.replace(r#"["csv", "json"]"#, r#"["tsv"]"#);
        let config = TomlConfig::from_toml_str(&bad_format).unwrap();
        assert!(config.validate().is_err());

        let bad_month = BASIC.replace("month = 3", "month = 13");
        let config = TomlConfig::from_toml_str(&bad_month).unwrap();
        assert!(config.validate().is_err());

        let no_profiles = r#"
[report]
name = "empty"
output_path = "./out"
output_formats = ["json"]
"#;
        let config = TomlConfig::from_toml_str(no_profiles).unwrap();
        assert!(matches!(
            config.validate(),
            Err(FortuneError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(BASIC.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.report.name, "family");
    }
}
