//! Error types for the reasoning-engine client

use flightclaim_core::ClaimError;
use thiserror::Error;

/// Result type alias for reasoning-engine operations
pub type Result<T> = std::result::Result<T, LLMError>;

/// Service label used when these errors surface as [`ClaimError::Upstream`]
pub const REASONING_SERVICE: &str = "reasoning-engine";

/// Reasoning-engine errors
#[derive(Debug, Error)]
pub enum LLMError {
    /// The engine could not be reached
    #[error("External API call failed: {0}")]
    ApiCallFailed(String),

    /// The engine answered with a non-success status
    #[error("API error ({status}): {body}")]
    ApiStatus { status: u16, body: String },

    /// The token stream broke after it had started
    #[error("Stream interrupted: {0}")]
    StreamInterrupted(String),
}

impl From<LLMError> for ClaimError {
    fn from(err: LLMError) -> Self {
        match err {
            LLMError::ApiStatus { status, body } => {
                ClaimError::upstream(REASONING_SERVICE, Some(status), body)
            }
            other => ClaimError::upstream(REASONING_SERVICE, None, other.to_string()),
        }
    }
}
