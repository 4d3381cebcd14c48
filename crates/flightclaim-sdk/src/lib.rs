//! FlightClaim SDK
//!
//! High-level API over the compensation pipeline. [`ClaimAssistant`] wires a
//! flight-status provider, a web-search provider, the airline policy corpus
//! and a reasoning engine together and exposes:
//! - eligibility verdicts, streamed or batched
//! - cancellation-reason inference
//! - historical delay statistics
//! - plain flight-detail lookups
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use flightclaim_sdk::ClaimAssistantBuilder;
//! use futures::StreamExt;
//!
//! let assistant = ClaimAssistantBuilder::new().build().await?;
//! let mut stream = assistant.compute_eligibility_stream("DL324", "2025-04-12").await?;
//! while let Some(fragment) = stream.next().await {
//!     print!("{}", fragment?);
//! }
//! ```

pub mod assistant;
pub mod builder;
pub mod config;
pub mod error;
pub mod flight_status;
pub mod policy_loader;
pub mod web_search;

pub use assistant::{ClaimAssistant, EligibilityAnswer, ReasoningOptions, NO_DISRUPTION_REASON};
pub use builder::ClaimAssistantBuilder;
pub use config::{AssistantConfig, FlightStatusConfig, LLMConfig, WebSearchConfig};
pub use error::{Result, SdkError};
pub use flight_status::{AeroDataBoxClient, FlightStatusLookup};
pub use policy_loader::{load_policy_store, try_load_policy_store};
pub use web_search::{BraveSearchClient, SearchResult, WebSearch, WEB_SEARCH_SERVICE};

// Re-export core and llm types callers need
pub use flightclaim_core::{ClaimError, FlightDetail, FlightQuery, PolicyStore, StatsSummary};
pub use flightclaim_llm::{LLMClient, LLMError, TokenStream};
