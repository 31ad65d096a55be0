use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;

use super::error_response;
use crate::catalog;
use crate::models::{SearchParams, SearchResponse};
use crate::state::AppState;

/// GET /api/search?q=&limit= - Tokenized free-text search.
/// An empty query is a valid request with no results.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, (StatusCode, String)> {
    let query = params.q.trim().to_string();
    let limit = state.config.limit(params.limit, state.config.search_limit);

    let results = if query.is_empty() {
        Vec::new()
    } else {
        let q = query.clone();
        state
            .query(move |cakes| Ok(catalog::search::search(&q, &cakes, limit)))
            .await
            .map_err(error_response)?
    };
    tracing::debug!("Search {query:?} matched {} cakes", results.len());

    Ok(Json(SearchResponse {
        query,
        count: results.len(),
        results,
    }))
}

/// GET /api/search/suggestions?q=&limit= - Autocomplete strings
pub async fn suggestions(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<String>>, (StatusCode, String)> {
    if params.q.trim().is_empty() {
        return Ok(Json(Vec::new()));
    }
    let limit = state.config.limit(params.limit, state.config.suggest_limit);

    let suggestions = state
        .query(move |cakes| Ok(catalog::search::suggest(&params.q, &cakes, limit)))
        .await
        .map_err(error_response)?;
    Ok(Json(suggestions))
}
