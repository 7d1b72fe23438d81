use std::sync::Arc;

use keyhold_storage::{FileStore, InMemoryFileStore, LocalFileStore};

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn FileStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let store: Arc<dyn FileStore> = match config.storage.backend.as_str() {
            "local" => Arc::new(LocalFileStore::new(&config.storage.root).await?),
            "memory" => {
                tracing::warn!("Using in-memory storage - data is lost on restart");
                Arc::new(InMemoryFileStore::new())
            }
            other => {
                anyhow::bail!("Unknown storage backend '{}'. Valid options: 'local', 'memory'", other);
            }
        };

        Ok(Self {
            store,
            config: Arc::new(config.clone()),
        })
    }
}
