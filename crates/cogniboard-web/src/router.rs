//! Web host router using Axum
//!
//! Serves the SPA shell, the theme stylesheet, and a health probe. Page
//! rendering itself happens client-side in the Leptos app.

use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use rust_embed::RustEmbed;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};

/// Static assets bundled into the binary (theme stylesheet).
#[derive(RustEmbed)]
#[folder = "static/"]
struct StaticAssets;

#[derive(Serialize)]
struct Health {
    status: &'static str,
    version: &'static str,
}

/// Create the web router
pub fn create_router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/styles.css", get(styles_handler))
        .route("/api/health", get(health_handler))
        .layer(cors)
}

async fn index_handler() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Cognitive Query Pro</title>
    <link rel="stylesheet" href="/styles.css">
</head>
<body>
    <div id="app">
        <div class="boot-screen">
            <h1 class="boot-title">🧠 Cognitive Query Pro</h1>
            <p class="boot-subtitle">Loading the dashboard&hellip;</p>
            <noscript>
                <p>This dashboard needs JavaScript/WASM enabled. Build the
                frontend with <code>trunk build --release</code> and serve it
                alongside this host.</p>
            </noscript>
        </div>
    </div>
</body>
</html>"#,
    )
}

async fn styles_handler() -> impl IntoResponse {
    match StaticAssets::get("styles.css") {
        Some(asset) => {
            let mime = mime_guess::from_path("styles.css").first_or_octet_stream();
            (
                [(header::CONTENT_TYPE, mime.as_ref().to_string())],
                asset.data.into_owned(),
            )
                .into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn health_handler() -> Json<Health> {
    Json(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
