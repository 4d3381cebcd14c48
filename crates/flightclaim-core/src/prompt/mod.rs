//! Prompt rendering for the reasoning engine
//!
//! Rendering is pure: the same inputs always produce byte-identical prompts.
//! Every free-text input is capped before it is embedded.

pub mod builder;
pub mod templates;

pub use builder::{
    build_cancellation_prompt, build_eligibility_prompt, truncate_chars, MAX_FIELD_CHARS,
    MAX_POLICY_CHARS, MAX_SNIPPET_CHARS,
};
