//! FlightClaim HTTP Server Library
//!
//! Provides the REST API components for testing and reuse.

pub mod api;
pub mod assistant;
pub mod config;
pub mod error;
