//! Reasoning-engine provider implementations

mod mock;
mod openai;

pub use mock::MockProvider;
pub use openai::{OpenAIProvider, GROQ_BASE_URL};
