//! Claim assistant initialization
//!
//! Thin wrapper that turns server configuration into SDK configuration.

use crate::config::ServerConfig;
use anyhow::Result;
use flightclaim_sdk::{ClaimAssistant, ClaimAssistantBuilder};
use tracing::info;

/// Build the assistant with real collaborators from configuration
pub async fn init_assistant(config: &ServerConfig) -> Result<ClaimAssistant> {
    info!("Loading policy corpus from {}", config.policy_path.display());

    let assistant = ClaimAssistantBuilder::new()
        .with_config(config.assistant_config())
        .build()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to initialize claim assistant: {}", e))?;

    Ok(assistant)
}
