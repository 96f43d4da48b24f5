//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue},
    response::Html,
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

use super::websocket::{handler::ws_handler, AppState};
use super::world;

/// Overlay page served at `/`
const OVERLAY_PAGE: &str = include_str!("overlay.html");

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(overlay_page))
        .route("/ws", get(ws_handler))
        .route("/health", get(health_check))
        .route("/api/world", get(world::get_world))
        .layer(cors)
        // Browser sources must never show a cached overlay
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache, no-store, must-revalidate"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::PRAGMA,
            HeaderValue::from_static("no-cache"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::EXPIRES,
            HeaderValue::from_static("0"),
        ))
        .with_state(state)
}

async fn overlay_page() -> Html<&'static str> {
    Html(OVERLAY_PAGE)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
