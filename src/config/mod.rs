pub mod toml_config;

#[cfg(feature = "cli")]
use crate::app::inputs::SavedInputs;
#[cfg(feature = "cli")]
use crate::domain::model::Period;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "seiza-fortune")]
#[command(about = "星座・数秘・名前から、毎回同じ結果になる運勢を占う")]
pub struct CliConfig {
    /// お名前（省略時は前回の入力）
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub birth_year: Option<String>,

    #[arg(long)]
    pub birth_month: Option<String>,

    #[arg(long)]
    pub birth_day: Option<String>,

    /// YYYY-MM-DD 形式でまとめて指定する（年・月・日より優先）
    #[arg(long)]
    pub birth_date: Option<String>,

    /// today, tomorrow, thisYear, nextYear
    #[arg(long)]
    pub period: Option<Period>,

    /// 「今年」補正に使う月を固定する
    #[arg(long)]
    pub month: Option<u32>,

    #[arg(long, default_value = "./.seiza-fortune.json")]
    pub state_file: String,

    /// 入力内容を保存しない
    #[arg(long)]
    pub no_save: bool,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// 期間の一覧を表示して終了する
    #[arg(long)]
    pub list_periods: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 指定されたフラグだけを前回の入力に上書きする
    pub fn merge_into(&self, inputs: &mut SavedInputs) {
        if let Some(name) = &self.name {
            inputs.name = name.clone();
        }
        if let Some(birth_date) = &self.birth_date {
            let parts: Vec<&str> = birth_date.split('-').collect();
            if let [year, month, day] = parts.as_slice() {
                inputs.birth_year = year.to_string();
                inputs.birth_month = month.to_string();
                inputs.birth_day = day.to_string();
            }
        } else {
            if let Some(year) = &self.birth_year {
                inputs.birth_year = year.clone();
            }
            if let Some(month) = &self.birth_month {
                inputs.birth_month = month.clone();
            }
            if let Some(day) = &self.birth_day {
                inputs.birth_day = day.clone();
            }
        }
        if let Some(period) = self.period {
            inputs.period = period;
        }
        inputs.touched = true;
    }

    /// 占いに渡す生年月日。`--birth-date` はそのまま使う
    pub fn resolve_birth_date(&self, inputs: &SavedInputs) -> String {
        match &self.birth_date {
            Some(birth_date) => birth_date.clone(),
            None => inputs.birth_date(),
        }
    }

    pub fn state_dir(&self) -> String {
        std::path::Path::new(&self.state_file)
            .parent()
            .map(|p| p.to_string_lossy().into_owned())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| ".".to_string())
    }

    pub fn state_file_name(&self) -> String {
        std::path::Path::new(&self.state_file)
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_else(|| ".seiza-fortune.json".to_string())
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("state_file", &self.state_file)?;
        if let Some(month) = self.month {
            validation::validate_range("month", month, 1, 12)?;
        }
        if let Some(year) = &self.birth_year {
            validation::validate_date_part("birth_year", year, 1, 9999)?;
        }
        if let Some(month) = &self.birth_month {
            validation::validate_date_part("birth_month", month, 1, 12)?;
        }
        if let Some(day) = &self.birth_day {
            validation::validate_date_part("birth_day", day, 1, 31)?;
        }
        Ok(())
    }
}
