//! Axum handlers: a thin query façade over the catalog engine.

pub mod catalog;
pub mod filter;
pub mod related;
pub mod search;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

use crate::error::CatalogError;
use crate::state::{AppState, QueryError};

/// Map a query failure onto the `(StatusCode, String)` error half of a handler result.
pub fn error_response(err: QueryError) -> (StatusCode, String) {
    match err {
        QueryError::Catalog(CatalogError::NotFound(id)) => {
            (StatusCode::NOT_FOUND, format!("Cake not found: {id}"))
        }
        QueryError::Catalog(CatalogError::StoreUnavailable(reason)) => {
            tracing::error!("Catalog store unavailable: {reason}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "Catalog is temporarily unavailable".to_string(),
            )
        }
        QueryError::Join(e) => {
            tracing::error!("Catalog query task failed: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Query failed".to_string())
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/categories", get(catalog::list_categories))
        .route("/api/cakes", get(catalog::list_cakes))
        .route("/api/cakes/filter", get(filter::filter_cakes))
        .route("/api/cakes/category/{category}", get(filter::cakes_by_category))
        .route("/api/cakes/{id}", get(catalog::get_cake))
        .route("/api/cakes/{id}/related", get(related::related_cakes))
        .route("/api/cakes/{id}/related/all", get(related::all_related_cakes))
        .route("/api/filter-options", get(filter::filter_options))
        .route("/api/search", get(search::search))
        .route("/api/search/suggestions", get(search::suggestions))
        .with_state(state)
}
