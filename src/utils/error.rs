use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Roster parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Storage,
    Data,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RosterError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) => ErrorCategory::Storage,
            Self::ParseError(_) => ErrorCategory::Data,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::ValidationError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ValidationError { .. } => ErrorSeverity::Low,
            Self::ParseError(_) => ErrorSeverity::Medium,
            Self::IoError(_) => ErrorSeverity::High,
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::IoError(e) => match e.kind() {
                std::io::ErrorKind::NotFound => {
                    "Check that the file and its directory exist".to_string()
                }
                std::io::ErrorKind::PermissionDenied => {
                    "Check file permissions for the data directory".to_string()
                }
                _ => "Check the data directory and available disk space".to_string(),
            },
            Self::ParseError(_) => {
                "Make sure the file is a JSON array of student objects".to_string()
            }
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags".to_string()
            }
            Self::ValidationError { .. } => "Type \"help\" for a list of commands".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not access file: {}", e),
            Self::ParseError(e) => format!("File is not a valid roster: {}", e),
            Self::ValidationError { message } => message.clone(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_is_storage_category() {
        let err = RosterError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.category(), ErrorCategory::Storage);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.recovery_suggestion().contains("exist"));
    }

    #[test]
    fn test_parse_error_converts_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: RosterError = serde_err.into();
        assert!(matches!(err, RosterError::ParseError(_)));
        assert!(err.user_friendly_message().starts_with("File is not a valid roster"));
    }

    #[test]
    fn test_validation_message_is_passed_through() {
        let err = RosterError::validation("usage: find <email>");
        assert_eq!(err.user_friendly_message(), "usage: find <email>");
        assert_eq!(err.severity(), ErrorSeverity::Low);
    }
}
