//! Domain-specific error types for pitchscan

use thiserror::Error;

/// Main error type for the pitchscan pipeline
#[derive(Error, Debug)]
pub enum PitchScanError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("I/O error: {message}")]
    Io { message: String },

    #[error("CSV error: {message}")]
    Csv { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<anyhow::Error> for PitchScanError {
    fn from(err: anyhow::Error) -> Self {
        PitchScanError::Internal {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for PitchScanError {
    fn from(err: std::io::Error) -> Self {
        PitchScanError::Io {
            message: err.to_string(),
        }
    }
}

impl From<csv::Error> for PitchScanError {
    fn from(err: csv::Error) -> Self {
        PitchScanError::Csv {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PitchScanError {
    fn from(err: serde_json::Error) -> Self {
        PitchScanError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Result type alias for pitchscan operations
pub type Result<T> = std::result::Result<T, PitchScanError>;
