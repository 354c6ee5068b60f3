//! Front page: the static HTML document, read fresh on every request

use axum::extract::State;
use axum::response::Html;
use axum::{routing::get, Router};

use super::method_not_allowed;
use crate::http::error::ApiError;
use crate::state::AppState;

/// GET / - serve the configured HTML document verbatim
async fn home(State(state): State<AppState>) -> Result<Html<Vec<u8>>, ApiError> {
    let path = state.index_path();
    let bytes = tokio::fs::read(path).await.map_err(|source| ApiError::Asset {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Html(bytes))
}

/// Home routes
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(home).head(method_not_allowed).fallback(method_not_allowed),
    )
}
