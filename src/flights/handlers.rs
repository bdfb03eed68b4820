use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::{auth::extractors::AuthUser, error::AppError, state::AppState};

use super::dto::{SearchParams, SearchResponse, StatsResponse};
use super::service;

pub fn flight_routes() -> Router<AppState> {
    Router::new()
        .route("/stats", get(stats))
        .route("/search", get(search))
}

#[instrument(skip(state, _user))]
pub async fn stats(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<Json<StatsResponse>, AppError> {
    let popular = service::popular_stats(&state).await?;
    Ok(Json(StatsResponse { popular }))
}

#[instrument(skip(state, _user))]
pub async fn search(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    let (kind, data) = service::search(&state, &params.query, &params.r#type).await?;
    Ok(Json(SearchResponse {
        ok: true,
        kind,
        data,
    }))
}
