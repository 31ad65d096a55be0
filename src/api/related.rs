use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use super::error_response;
use crate::catalog;
use crate::models::{CatalogItem, LimitParams};
use crate::state::AppState;

/// GET /api/cakes/{id}/related?limit= - Cakes sharing a category, bounded
pub async fn related_cakes(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<LimitParams>,
) -> Result<Json<Vec<CatalogItem>>, (StatusCode, String)> {
    let limit = state.config.limit(params.limit, state.config.related_limit);
    let cakes = state
        .query(move |cakes| catalog::related::related(&id, &cakes, limit))
        .await
        .map_err(error_response)?;
    Ok(Json(cakes))
}

/// GET /api/cakes/{id}/related/all - Every cake sharing a category
pub async fn all_related_cakes(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<CatalogItem>>, (StatusCode, String)> {
    let cakes = state
        .query(move |cakes| catalog::related::related_all(&id, &cakes))
        .await
        .map_err(error_response)?;
    Ok(Json(cakes))
}
