//! FlightClaim LLM Integration
//!
//! Streaming client for the reasoning engine that answers eligibility and
//! cancellation-reason prompts. The engine speaks the OpenAI chat-completions
//! wire format over server-sent events; Groq is the default endpoint.
//!
//! A [`TokenStream`] is lazy: nothing is read from the network until it is
//! polled, and dropping it closes the upstream connection.

pub use client::{LLMClient, LLMRequest, LLMResponse};
pub use error::{LLMError, Result, REASONING_SERVICE};
pub use provider::{MockProvider, OpenAIProvider, GROQ_BASE_URL};
pub use stream::{collect_text, decode_sse, SseDecoder, SseEvent, TokenStream};
pub use thinking::split_thinking;

pub mod client;
pub mod error;
pub mod provider;
pub mod stream;
pub mod thinking;
