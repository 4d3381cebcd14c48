//! REST API implementation
//!
//! Provides HTTP endpoints for:
//! - Health checks
//! - Compensation eligibility (streamed or batched)
//! - Cancellation-reason inference
//! - Historical delay statistics
//! - Flight-detail lookups

mod extractors;
mod handlers;
mod relay;
mod router;
mod types;


pub use router::create_router;
pub use types::{
    AppState, CancellationReasonResponse, CompensationParams, FlightParams, HealthResponse,
};
