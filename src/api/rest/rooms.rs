//! Room inspection endpoint

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::api::websocket::state::AppState;

/// GET /debug-rooms - Dump the whole registry
///
/// Diagnostic only and unauthenticated. Returns 404 when disabled by config.
pub async fn debug_rooms(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    if !state.config.debug_rooms {
        return StatusCode::NOT_FOUND.into_response();
    }
    Json(state.relay.snapshot()).into_response()
}
