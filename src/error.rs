//! Error types for catalog queries.

use thiserror::Error;

/// Result type alias using `CatalogError`
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Failures a catalog query can surface to its caller.
///
/// Empty queries and all-`"all"` filters are not errors: they resolve to an
/// empty result or the unfiltered catalog respectively.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Cake not found: {0}")]
    NotFound(String),

    #[error("Catalog store unavailable: {0}")]
    StoreUnavailable(String),
}
