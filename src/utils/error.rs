use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl ExportError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ExportError::IoError(_) => {
                "Check that the export directory exists or can be created and is writable"
            }
            ExportError::SerializationError(_) => "Make sure the input is valid JSON",
            ExportError::ConfigError { .. } | ExportError::InvalidConfigValueError { .. } => {
                "Review the [export] table of the configuration file and the CLI flags"
            }
            ExportError::ValidationError { .. } => {
                "Fill in the required student fields or disable require_fields"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ExportError::IoError(e) => format!("File operation failed: {}", e),
            ExportError::SerializationError(e) => format!("Could not read student data: {}", e),
            ExportError::ConfigError { message } => format!("Configuration problem: {}", message),
            ExportError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            ExportError::ValidationError { message } => message.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts_and_formats() {
        let err: ExportError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(err.to_string().starts_with("IO error:"));
        assert!(err.user_friendly_message().contains("denied"));
        assert!(err.recovery_suggestion().contains("writable"));
    }

    #[test]
    fn test_invalid_config_value_message() {
        let err = ExportError::InvalidConfigValueError {
            field: "export.output_path".to_string(),
            value: "".to_string(),
            reason: "Path cannot be empty".to_string(),
        };
        assert_eq!(
            err.user_friendly_message(),
            "Setting 'export.output_path' is invalid: Path cannot be empty"
        );
    }
}
