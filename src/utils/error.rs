use thiserror::Error;

#[derive(Error, Debug)]
pub enum FortuneError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Input store error: {message}")]
    StoreError { message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Storage,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FortuneError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FortuneError::ConfigError { .. }
            | FortuneError::ConfigValidationError { .. }
            | FortuneError::InvalidConfigValueError { .. }
            | FortuneError::MissingConfigError { .. } => ErrorCategory::Configuration,
            FortuneError::IoError(_) | FortuneError::StoreError { .. } => ErrorCategory::Storage,
            FortuneError::SerializationError(_)
            | FortuneError::CsvError(_)
            | FortuneError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 保存失敗でも占い結果そのものは出せる
            FortuneError::StoreError { .. } => ErrorSeverity::Low,
            FortuneError::SerializationError(_) | FortuneError::CsvError(_) => {
                ErrorSeverity::Medium
            }
            FortuneError::ConfigError { .. }
            | FortuneError::ConfigValidationError { .. }
            | FortuneError::InvalidConfigValueError { .. }
            | FortuneError::MissingConfigError { .. }
            | FortuneError::ProcessingError { .. } => ErrorSeverity::High,
            FortuneError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FortuneError::IoError(e) => format!("ファイルの読み書きに失敗しました: {}", e),
            FortuneError::SerializationError(e) => {
                format!("データの変換に失敗しました: {}", e)
            }
            FortuneError::CsvError(e) => format!("CSV の出力に失敗しました: {}", e),
            FortuneError::ConfigError { message } => format!("設定エラー: {}", message),
            FortuneError::ConfigValidationError { field, message } => {
                format!("設定 '{}' が正しくありません: {}", field, message)
            }
            FortuneError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' の値 '{}' は使えません: {}", field, value, reason),
            FortuneError::MissingConfigError { field } => {
                format!("'{}' が指定されていません", field)
            }
            FortuneError::StoreError { message } => {
                format!("入力内容の保存に失敗しました: {}", message)
            }
            FortuneError::ProcessingError { message } => format!("処理エラー: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the command line flags or the TOML configuration file"
            }
            ErrorCategory::Storage => {
                "Check that the state/output path exists and is writable"
            }
            ErrorCategory::Processing => "Re-run with --verbose to see which step failed",
        }
    }
}

pub type Result<T> = std::result::Result<T, FortuneError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_and_severity() {
        let err = FortuneError::InvalidConfigValueError {
            field: "birth_month".to_string(),
            value: "13".to_string(),
            reason: "out of range".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);

        let err = FortuneError::StoreError {
            message: "locked".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Storage);
        assert_eq!(err.severity(), ErrorSeverity::Low);
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: FortuneError = io.into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.user_friendly_message().contains("missing"));
    }
}
