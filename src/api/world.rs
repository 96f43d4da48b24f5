//! REST endpoint for the current world

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;

use super::websocket::AppState;
use crate::types::WorldSnapshot;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Current sequence ID, comparable with WebSocket messages
    pub sequence_id: u64,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T, sequence_id: u64) -> Self {
        Self { data, sequence_id }
    }
}

/// GET /api/world - current snapshot (`null` before the first publish)
pub async fn get_world(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot: Option<WorldSnapshot> = state.current_snapshot();
    Json(ApiResponse::new(snapshot, state.current_sequence_id()))
}
