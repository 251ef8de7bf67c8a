use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::AppState;
use crate::error::AppError;
use crate::generate;
use crate::timestamp;

#[derive(Deserialize)]
pub struct LexicoidParams {
    ts: Option<String>,
}

#[derive(Serialize)]
pub struct LexicoidResponse {
    pub lexicoid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u128>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/lexicoid", get(lexicoid_from))
        .route("/lexicoid/now", get(lexicoid_now))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn not_found() -> AppError {
    AppError::NotFound("no such route".into())
}

async fn lexicoid_from(
    State(state): State<AppState>,
    Query(params): Query<LexicoidParams>,
) -> Result<Json<LexicoidResponse>, AppError> {
    let raw = params
        .ts
        .ok_or_else(|| AppError::BadRequest("missing `ts` query parameter".into()))?;

    let lexicoid = generate::lexicoid(timestamp::parse(&raw), state.config.strict)?;
    tracing::debug!(%raw, %lexicoid, "encoded timestamp");

    Ok(Json(LexicoidResponse {
        lexicoid,
        timestamp: None,
    }))
}

async fn lexicoid_now(State(state): State<AppState>) -> Result<Json<LexicoidResponse>, AppError> {
    let (seconds, lexicoid) = generate::now_seconds_with(state.clock.as_ref())
        .map_err(|e| AppError::Internal(format!("system clock is unusable: {e}")))?;

    Ok(Json(LexicoidResponse {
        lexicoid,
        timestamp: Some(seconds),
    }))
}
