use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use super::error_response;
use crate::models::{CatalogItem, Category};
use crate::state::{AppState, QueryError};

/// GET /api/categories - Browsable categories with their cover images
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, (StatusCode, String)> {
    let store = state.store.clone();
    let categories = tokio::task::spawn_blocking(move || store.categories())
        .await
        .map_err(|e| error_response(QueryError::Join(e)))?
        .map_err(|e| error_response(e.into()))?;
    Ok(Json(categories))
}

/// GET /api/cakes - Whole catalog in snapshot order
pub async fn list_cakes(
    State(state): State<AppState>,
) -> Result<Json<Vec<CatalogItem>>, (StatusCode, String)> {
    let cakes = state.query(|cakes| Ok(cakes)).await.map_err(error_response)?;
    tracing::debug!("Listing {} cakes", cakes.len());
    Ok(Json(cakes))
}

/// GET /api/cakes/{id} - A single cake
pub async fn get_cake(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CatalogItem>, (StatusCode, String)> {
    let store = state.store.clone();
    let cake = tokio::task::spawn_blocking(move || store.find_by_id(&id))
        .await
        .map_err(|e| error_response(QueryError::Join(e)))?
        .map_err(|e| error_response(e.into()))?;
    Ok(Json(cake))
}
