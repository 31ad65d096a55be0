use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use super::error_response;
use crate::catalog;
use crate::models::{CatalogItem, FacetSummary, FilterCriteria};
use crate::state::AppState;

/// GET /api/cakes/filter?category=&flavour=&weight=&diet=&sort=
pub async fn filter_cakes(
    State(state): State<AppState>,
    Query(criteria): Query<FilterCriteria>,
) -> Result<Json<Vec<CatalogItem>>, (StatusCode, String)> {
    tracing::debug!("Filtering with {criteria:?}");
    let cakes = state
        .query(move |cakes| Ok(catalog::filter::filter(&criteria, &cakes)))
        .await
        .map_err(error_response)?;
    Ok(Json(cakes))
}

/// GET /api/cakes/category/{category}
pub async fn cakes_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<CatalogItem>>, (StatusCode, String)> {
    let cakes = state
        .query(move |cakes| Ok(catalog::filter::by_category(&category, &cakes)))
        .await
        .map_err(error_response)?;
    Ok(Json(cakes))
}

/// GET /api/filter-options - Facet values and price range for the filter bar
pub async fn filter_options(
    State(state): State<AppState>,
) -> Result<Json<FacetSummary>, (StatusCode, String)> {
    let summary = state
        .query(|cakes| Ok(catalog::facets::aggregate(&cakes)))
        .await
        .map_err(error_response)?;
    Ok(Json(summary))
}
