use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Invalid data: {message}")]
    InvalidData { message: String },

    #[error("Model is frozen, cannot write '{key}'")]
    FrozenModel { key: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned status {status}: {body}")]
    ApiStatusError { status: u16, body: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("URL error: {0}")]
    UrlError(#[from] url::ParseError),

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
}

/// 錯誤分類，主要用於日誌
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Data,
    Transport,
    Api,
    Configuration,
}

impl SdkError {
    pub fn invalid_data(message: impl Into<String>) -> Self {
        SdkError::InvalidData {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SdkError::InvalidData { .. }
            | SdkError::FrozenModel { .. }
            | SdkError::SerializationError(_) => ErrorCategory::Data,
            SdkError::ApiError(_) | SdkError::IoError(_) => ErrorCategory::Transport,
            SdkError::ApiStatusError { .. } => ErrorCategory::Api,
            SdkError::UrlError(_)
            | SdkError::ConfigError { .. }
            | SdkError::ConfigValidationError { .. }
            | SdkError::InvalidConfigValueError { .. }
            | SdkError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    /// Prefix an [`SdkError::InvalidData`] message with the field it came from.
    /// Other errors pass through unchanged.
    pub fn in_field(self, key: &str) -> Self {
        match self {
            SdkError::InvalidData { message } => SdkError::InvalidData {
                message: format!("{}: {}", key, message),
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, SdkError>;
