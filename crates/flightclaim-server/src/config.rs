//! Server configuration

use flightclaim_sdk::{AssistantConfig, FlightStatusConfig, LLMConfig, WebSearchConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

impl Default for LogFormat {
    fn default() -> Self {
        LogFormat::Text
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port (HTTP)
    pub port: u16,

    /// Log level for the workspace crates, used when `RUST_LOG` is unset
    pub log_level: String,

    pub log_format: LogFormat,

    /// Airline policy corpus file
    pub policy_path: PathBuf,

    pub flight_status: FlightStatusConfig,

    pub web_search: WebSearchConfig,

    pub llm: LLMConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        let assistant = AssistantConfig::default();
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            log_level: "info".to_string(),
            log_format: LogFormat::default(),
            policy_path: assistant.policy_path,
            flight_status: assistant.flight_status,
            web_search: assistant.web_search,
            llm: assistant.llm,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and `config/server.*`.
    ///
    /// Environment keys use the `FLIGHTCLAIM` prefix and `__` for nesting,
    /// e.g. `FLIGHTCLAIM__LLM__API_KEY`.
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();
        Self::load_from("config/server")
    }

    /// Load configuration from `file` layered under the environment.
    ///
    /// A missing file is fine; a file that exists but does not parse is an
    /// error, so the server never starts on defaults by accident.
    pub fn load_from(file: &str) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::with_name(file).required(false))
            .add_source(
                config::Environment::with_prefix("FLIGHTCLAIM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to load configuration from {}: {}", file, e))?
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))
    }

    /// Collaborator settings for the SDK
    pub fn assistant_config(&self) -> AssistantConfig {
        AssistantConfig::new()
            .with_policy_path(self.policy_path.clone())
            .with_flight_status(self.flight_status.clone())
            .with_web_search(self.web_search.clone())
            .with_llm(self.llm.clone())
    }

    /// Default `EnvFilter` directives derived from `log_level`
    pub fn default_log_filter(&self) -> String {
        let level = &self.log_level;
        format!(
            "flightclaim_server={level},flightclaim_sdk={level},flightclaim_llm={level},flightclaim_core={level},tower_http=debug"
        )
    }
}
