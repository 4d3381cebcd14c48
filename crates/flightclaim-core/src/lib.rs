//! FlightClaim Core - data shaping for flight compensation checks
//!
//! This crate holds everything between the raw flight-status payload and the
//! prompt handed to the reasoning engine:
//! - Decoding and normalizing provider flight records
//! - Delay/cancellation classification
//! - Airline policy matching
//! - Deterministic prompt rendering
//! - Historical delay aggregation
//! - Caller query validation
//!
//! It performs no I/O. Fetching flights, searching the web and calling the
//! reasoning engine live in `flightclaim-sdk` and `flightclaim-llm`.

pub mod aggregator;
pub mod classifier;
pub mod error;
pub mod normalizer;
pub mod policy;
pub mod prompt;
pub mod query;
pub mod raw;
pub mod types;

// Re-export commonly used types
pub use aggregator::aggregate;
pub use classifier::{classify, is_cancelled_status, parse_wire_timestamp, DELAY_THRESHOLD_MINUTES};
pub use error::{ClaimError, Result};
pub use normalizer::{
    detail_from_record, normalize_first, reason_search_query, should_infer_reason,
    MAX_REASON_SNIPPETS,
};
pub use policy::{MergedPolicy, PolicyStore, NO_POLICY_FALLBACK};
pub use prompt::{build_cancellation_prompt, build_eligibility_prompt};
pub use query::{FlightQuery, HISTORY_WINDOW_DAYS};
pub use raw::{decode_flight_records, ProviderResponse, RawFlightRecord, FLIGHT_STATUS_SERVICE};
pub use types::{
    DelayClassification, DelayEntry, DelayStatus, FlightDetail, PolicyRecord, PolicyType,
    StatsSummary, UNKNOWN,
};
