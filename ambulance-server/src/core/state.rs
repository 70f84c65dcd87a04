use std::sync::Arc;

use anyhow::Context;
use shared::models::Ambulance;

use crate::core::Config;
use crate::core::config::StoreBackend;
use crate::db::{DocumentStore, MemoryStore, RedbStore};
use crate::records::AmbulanceStore;

/// Shared state handed to every handler
///
/// Cloning is cheap: the store sits behind an `Arc`. Handlers get the store
/// through axum's `State` extractor; there is no global handle.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    store: Arc<AmbulanceStore>,
}

impl ServerState {
    /// Build state around an existing store
    pub fn new(config: Config, store: Arc<dyn DocumentStore<Ambulance>>) -> Self {
        Self { config, store }
    }

    /// Open the store selected by `config`
    pub async fn initialize(config: &Config) -> anyhow::Result<Self> {
        let store: Arc<AmbulanceStore> = match config.store {
            StoreBackend::Memory => {
                tracing::info!("Using in-memory document store");
                Arc::new(MemoryStore::<Ambulance>::new())
            }
            StoreBackend::Redb => {
                tracing::info!(path = %config.db_path.display(), "Opening redb document store");
                let store = RedbStore::<Ambulance>::open(&config.db_path).with_context(|| {
                    format!("failed to open {}", config.db_path.display())
                })?;
                Arc::new(store)
            }
        };

        Ok(Self::new(config.clone(), store))
    }

    pub fn store(&self) -> &AmbulanceStore {
        self.store.as_ref()
    }

    /// Close the store; called once on shutdown
    pub async fn shutdown(&self) {
        if let Err(e) = self.store.disconnect().await {
            tracing::warn!(error = %e, "Failed to disconnect document store");
        }
    }
}
