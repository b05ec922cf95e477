use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Pattern compilation failed: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Fetch failed for {url}: {message}")]
    FetchError { url: String, message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Output,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TrackerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TrackerError::HttpError(_) | TrackerError::FetchError { .. } => ErrorCategory::Network,
            TrackerError::ConfigValidationError { .. }
            | TrackerError::InvalidConfigValueError { .. }
            | TrackerError::MissingConfigError { .. }
            | TrackerError::PatternError(_) => ErrorCategory::Configuration,
            TrackerError::ZipError(_)
            | TrackerError::CsvError(_)
            | TrackerError::IoError(_) => ErrorCategory::Output,
            TrackerError::SerializationError(_) => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 單一艦艇抓取失敗不影響其他艦艇
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::High,
            ErrorCategory::Internal => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TrackerError::HttpError(_) | TrackerError::FetchError { .. } => {
                "Check network connectivity and the source URL, then retry"
            }
            TrackerError::ConfigValidationError { .. }
            | TrackerError::InvalidConfigValueError { .. } => {
                "Fix the reported field in the TOML configuration file"
            }
            TrackerError::MissingConfigError { .. } => {
                "Add the missing field to the configuration file"
            }
            TrackerError::PatternError(_) => "Check the year window settings in [status]",
            TrackerError::ZipError(_) | TrackerError::CsvError(_) | TrackerError::IoError(_) => {
                "Make sure the output path exists and is writable"
            }
            TrackerError::SerializationError(_) => "Report this as a bug",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not fetch source data: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Output => format!("Could not write output: {}", self),
            ErrorCategory::Internal => format!("Internal error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_is_network_medium() {
        let err = TrackerError::FetchError {
            url: "http://example.com".to_string(),
            message: "status 500".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("status 500"));
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = TrackerError::MissingConfigError {
            field: "tracker.category".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }
}
