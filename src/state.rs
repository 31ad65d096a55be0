use std::sync::Arc;

use crate::config::Config;
use crate::error::CatalogError;
use crate::models::CatalogItem;
use crate::store::{CatalogStore, FileCatalogStore};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn CatalogStore>,
}

impl AppState {
    /// State backed by the catalog file under `config.data_dir`.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        std::fs::create_dir_all(&config.data_dir)?;

        let catalog_path = config.catalog_path();
        if config.seed_if_missing {
            crate::store::seed::seed_if_missing(&catalog_path)?;
        }
        if !catalog_path.exists() {
            tracing::warn!(
                "No catalog at {}; queries will fail until one is provided",
                catalog_path.display()
            );
        }

        Ok(Self::with_store(config, Arc::new(FileCatalogStore::new(catalog_path))))
    }

    pub fn with_store(config: Config, store: Arc<dyn CatalogStore>) -> Self {
        Self { config, store }
    }

    /// Take a fresh snapshot and run `query` over it on the blocking pool.
    pub async fn query<T, F>(&self, query: F) -> Result<T, QueryError>
    where
        T: Send + 'static,
        F: FnOnce(Vec<CatalogItem>) -> Result<T, CatalogError> + Send + 'static,
    {
        let store = self.store.clone();
        tokio::task::spawn_blocking(move || query(store.find_all()?))
            .await
            .map_err(QueryError::Join)?
            .map_err(QueryError::Catalog)
    }
}

/// Failure of a snapshot query run through [`AppState::query`].
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Query task failed: {0}")]
    Join(tokio::task::JoinError),
}
