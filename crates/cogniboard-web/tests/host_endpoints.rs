//! Integration tests for the web host endpoints

#![cfg(feature = "ssr")]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn get(uri: &str) -> (StatusCode, Option<String>, String) {
    let router = cogniboard_web::create_router();

    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body = String::from_utf8(body.to_vec()).unwrap();

    (status, content_type, body)
}

#[tokio::test]
async fn index_serves_shell_linking_the_stylesheet() {
    let (status, content_type, body) = get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().contains("text/html"));
    assert!(body.contains(r#"<link rel="stylesheet" href="/styles.css">"#));
    assert!(body.contains("Cognitive Query Pro"));
}

#[tokio::test]
async fn stylesheet_carries_the_overlay_fade_contract() {
    let (status, content_type, body) = get("/styles.css").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().contains("text/css"));

    // Overlay markup hooks and the open-state signaling class.
    assert!(body.contains(".menu-overlay"));
    assert!(body.contains(".menu-overlay.open"));
    assert!(body.contains(".sidebar"));
    assert!(body.contains(".mobile-header"));

    // Eased ~0.3s fade with scale-down, and the delayed visibility flip
    // that keeps a closing overlay interactive until the fade ends.
    assert!(body.contains("--overlay-fade: 0.3s"));
    assert!(body.contains("opacity var(--overlay-fade) ease"));
    assert!(body.contains("transform: scale(0.96)"));
    assert!(body.contains("visibility 0s linear var(--overlay-fade)"));

    // The breakpoint is owned by the nav core; the stylesheet must not
    // carry a duplicate media-query copy of it.
    assert!(!body.contains("@media"));
    assert!(!body.contains("992"));
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let (status, content_type, body) = get("/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().contains("application/json"));

    let health: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(health["status"], "ok");
    assert_eq!(health["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (status, _, _) = get("/api/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
