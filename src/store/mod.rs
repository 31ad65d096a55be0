//! Catalog store: where snapshots come from. The query engine never writes.

pub mod seed;

use parking_lot::RwLock;
use std::path::{Path, PathBuf};

use crate::error::{CatalogError, Result};
use crate::models::{CatalogDocument, CatalogItem, Category};

/// Read access to the catalog. Each call returns a consistent point-in-time view.
pub trait CatalogStore: Send + Sync {
    fn find_all(&self) -> Result<Vec<CatalogItem>>;

    fn find_by_id(&self, id: &str) -> Result<CatalogItem> {
        self.find_all()?
            .into_iter()
            .find(|item| item.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    fn categories(&self) -> Result<Vec<Category>>;
}

/// JSON document on disk, re-read on every call so edits show up without a restart.
pub struct FileCatalogStore {
    path: PathBuf,
}

impl FileCatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<CatalogDocument> {
        let data = std::fs::read_to_string(&self.path).map_err(|e| {
            tracing::warn!("Failed to read catalog {}: {e}", self.path.display());
            CatalogError::StoreUnavailable(format!("read {}: {e}", self.path.display()))
        })?;
        serde_json::from_str(&data).map_err(|e| {
            tracing::error!("Malformed catalog {}: {e}", self.path.display());
            CatalogError::StoreUnavailable(format!("parse {}: {e}", self.path.display()))
        })
    }
}

impl CatalogStore for FileCatalogStore {
    fn find_all(&self) -> Result<Vec<CatalogItem>> {
        Ok(self.load()?.cakes)
    }

    fn categories(&self) -> Result<Vec<Category>> {
        Ok(self.load()?.categories)
    }
}

/// Write a catalog document atomically (temp file + rename).
pub fn write_document(path: &Path, document: &CatalogDocument) -> anyhow::Result<()> {
    use anyhow::Context;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let data = serde_json::to_string_pretty(document)?;
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, data)
        .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
    std::fs::rename(&tmp_path, path)
        .with_context(|| format!("Failed to move catalog into {}", path.display()))?;
    Ok(())
}

/// In-memory catalog; snapshots are clones taken under a read lock.
#[derive(Default)]
pub struct MemoryCatalogStore {
    document: RwLock<CatalogDocument>,
}

impl MemoryCatalogStore {
    pub fn new(document: CatalogDocument) -> Self {
        Self {
            document: RwLock::new(document),
        }
    }

    pub fn from_items(cakes: Vec<CatalogItem>) -> Self {
        Self::new(CatalogDocument {
            categories: Vec::new(),
            cakes,
        })
    }

    /// Swap in a new catalog; queries already holding a snapshot are unaffected.
    pub fn replace(&self, document: CatalogDocument) {
        *self.document.write() = document;
    }
}

impl CatalogStore for MemoryCatalogStore {
    fn find_all(&self) -> Result<Vec<CatalogItem>> {
        Ok(self.document.read().cakes.clone())
    }

    fn find_by_id(&self, id: &str) -> Result<CatalogItem> {
        self.document
            .read()
            .cakes
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    fn categories(&self) -> Result<Vec<Category>> {
        Ok(self.document.read().categories.clone())
    }
}
