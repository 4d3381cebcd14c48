//! Core error types

use thiserror::Error;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, ClaimError>;

/// Errors surfaced to callers of the claim pipeline.
///
/// Malformed timestamps and missing record fields never appear here: they are
/// recovered where they are read and become `"Unknown"` or `None`.
#[derive(Error, Debug)]
pub enum ClaimError {
    /// No flight record matched the query
    #[error("Not found: {0}")]
    NotFound(String),

    /// An external collaborator answered with a non-success status or could not be reached
    #[error("{service} error{}: {body}", fmt_status(.status))]
    Upstream {
        service: String,
        status: Option<u16>,
        body: String,
    },

    /// Caller supplied an unusable flight number or date
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn fmt_status(status: &Option<u16>) -> String {
    status.map(|s| format!(" ({})", s)).unwrap_or_default()
}

impl ClaimError {
    /// Build an upstream error for a collaborator
    pub fn upstream(service: impl Into<String>, status: Option<u16>, body: impl Into<String>) -> Self {
        ClaimError::Upstream {
            service: service.into(),
            status,
            body: body.into(),
        }
    }

    /// Upstream status code, if the collaborator produced one
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            ClaimError::Upstream { status, .. } => *status,
            _ => None,
        }
    }
}
