//! Health check endpoint

use axum::{routing::get, Json, Router};
use serde::Serialize;

use super::method_not_allowed;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Health routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route(
        "/health",
        get(health)
            .head(method_not_allowed)
            .fallback(method_not_allowed),
    )
}
