//! Policy corpus loading

use crate::error::{Result, SdkError};
use flightclaim_core::PolicyStore;
use std::path::Path;
use tracing::{error, info};

/// Read and parse the corpus, failing on a missing or malformed file
pub async fn try_load_policy_store(path: impl AsRef<Path>) -> Result<PolicyStore> {
    let content = tokio::fs::read_to_string(path.as_ref()).await?;
    let store = PolicyStore::from_json(&content).map_err(|e| {
        SdkError::ConfigError(format!(
            "Invalid policy corpus {}: {}",
            path.as_ref().display(),
            e
        ))
    })?;
    Ok(store)
}

/// Load the corpus, degrading to an empty store when it cannot be read.
///
/// Every flight then gets the no-policy fallback text, which is preferable
/// to refusing to start.
pub async fn load_policy_store(path: impl AsRef<Path>) -> PolicyStore {
    let path = path.as_ref();
    match try_load_policy_store(path).await {
        Ok(store) => {
            info!("Loaded {} policy records from {}", store.len(), path.display());
            store
        }
        Err(e) => {
            error!("Failed to load policy corpus from {}: {}", path.display(), e);
            PolicyStore::default()
        }
    }
}
