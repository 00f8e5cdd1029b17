use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuestError {
    #[error("invalid email \"{value}\": missing '@' separator")]
    InvalidEmail { value: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Bad input data or configuration; the caller can fix and retry.
    Medium,
    /// Environment failure (filesystem, encoding).
    High,
}

impl GuestError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GuestError::InvalidEmail { .. }
            | GuestError::ConfigError { .. }
            | GuestError::ValidationError { .. } => ErrorSeverity::Medium,
            GuestError::CsvError(_)
            | GuestError::IoError(_)
            | GuestError::SerializationError(_) => ErrorSeverity::High,
        }
    }
}

pub type Result<T> = std::result::Result<T, GuestError>;
