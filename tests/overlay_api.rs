//! Overlay HTTP surface

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::Request;
use tower::util::ServiceExt;

use world_overlay::api::{create_router, AppState};
use world_overlay::{SnapshotPublisher, WorldSnapshot};

async fn get_json(app: axum::Router, uri: &str) -> serde_json::Value {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_world_is_null_before_first_publish() {
    let state = Arc::new(AppState::new(Arc::new(SnapshotPublisher::new())));

    let json = get_json(create_router(state), "/api/world").await;
    assert!(json["data"].is_null());
    assert_eq!(json["sequence_id"], 0);
}

#[tokio::test]
async fn test_world_reflects_latest_publish() {
    let publisher = Arc::new(SnapshotPublisher::new());
    let state = Arc::new(AppState::new(Arc::clone(&publisher)));

    publisher.publish(WorldSnapshot {
        id: "wrld_abc".to_string(),
        name: "Neon @ Club".to_string(),
        author_name: "by Jane Doe".to_string(),
        image_url: "https://files.example/neon.png".to_string(),
    });
    publisher.publish(WorldSnapshot::cleared());

    let json = get_json(create_router(state), "/api/world").await;
    assert_eq!(json["data"]["id"], "");
    assert_eq!(json["data"]["authorName"], "");
    assert_eq!(json["sequence_id"], 2);
}

#[tokio::test]
async fn test_overlay_page_served() {
    let state = Arc::new(AppState::new(Arc::new(SnapshotPublisher::new())));
    let response = create_router(state)
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("/ws"));
}
