//! Domain types shared across the claim pipeline

pub mod flight;
pub mod policy;
pub mod stats;

pub use flight::{FlightDetail, UNKNOWN};
pub use policy::{PolicyRecord, PolicyType};
pub use stats::{DelayClassification, DelayEntry, DelayStatus, StatsSummary};
