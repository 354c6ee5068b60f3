//! Reading endpoints
//!
//! POST /data ingests one reading from a device (secret required).
//! GET /data pages through readings newest-first (no secret).
//! Every other verb is answered with 405 before any store access.

use axum::{
    body::Bytes,
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::Utc;

use super::method_not_allowed;
use crate::http::error::ApiError;
use crate::http::extractors::SecretHeader;
use crate::models::{Page, PageParams, TemperatureReading, TemperatureReadingPayload};
use crate::state::AppState;

/// GET /data?limit=&offset= - list readings, newest first
///
/// The query is decoded as plain pairs so repeated or unexpected keys
/// never reject the request.
async fn list_readings(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<TemperatureReading>>, ApiError> {
    let page = Page::from(PageParams::from_pairs(pairs));
    let readings = state.store().query_page(page).await?;

    tracing::debug!(
        limit = page.limit(),
        offset = page.offset(),
        count = readings.len(),
        "listed temperature readings"
    );
    Ok(Json(readings))
}

/// POST /data - store a reading
///
/// Checks run in this order: decode the body (422), compare the secret
/// (403), then default the timestamp and insert (500 on store failure).
/// A malformed body is therefore a 422 even when the secret is wrong;
/// a well-formed body with a wrong secret is always a 403.
async fn create_reading(
    State(state): State<AppState>,
    SecretHeader(provided): SecretHeader,
    body: Bytes,
) -> Result<Json<TemperatureReading>, ApiError> {
    let payload = TemperatureReadingPayload::parse(&body).map_err(|e| {
        tracing::warn!(error = %e, "failed to decode temperature reading");
        e
    })?;

    if !state.secret().matches(provided.as_deref().unwrap_or_default()) {
        tracing::warn!("rejected temperature reading: secret key mismatch");
        return Err(ApiError::Forbidden);
    }

    tracing::info!(
        temp_co = payload.temp_co,
        temp_room = payload.temp_room,
        timestamp = ?payload.timestamp,
        "received temperature reading"
    );

    let reading = payload.resolve(Utc::now().timestamp());
    let stored = state.store().insert(reading).await?;

    Ok(Json(stored))
}

/// Reading routes
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/data",
        get(list_readings)
            .post(create_reading)
            .head(method_not_allowed)
            .fallback(method_not_allowed),
    )
}
