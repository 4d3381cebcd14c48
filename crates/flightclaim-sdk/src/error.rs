//! SDK error types

use flightclaim_core::ClaimError;
use flightclaim_llm::LLMError;
use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Pipeline error (not found, upstream failure, bad input)
    #[error(transparent)]
    Claim(#[from] ClaimError),

    /// Reasoning-engine error
    #[error("Reasoning engine error: {0}")]
    Llm(#[from] LLMError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_error_is_transparent() {
        let error: SdkError = ClaimError::NotFound("No flight data found.".to_string()).into();
        assert_eq!(error.to_string(), "Not found: No flight data found.");
    }

    #[test]
    fn test_llm_error_conversion() {
        let error: SdkError = LLMError::StreamInterrupted("reset".to_string()).into();
        assert!(error.to_string().contains("Reasoning engine error"));
        assert!(matches!(error, SdkError::Llm(_)));
    }

    #[test]
    fn test_config_error() {
        let error = SdkError::ConfigError("Invalid timeout".to_string());
        assert!(error.to_string().contains("Configuration error"));
        assert!(error.to_string().contains("Invalid timeout"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let sdk_error: SdkError = io_error.into();
        assert!(sdk_error.to_string().contains("I/O error"));
        assert!(sdk_error.to_string().contains("File not found"));
    }
}
