// src/routes/mod.rs
pub mod chat;
pub mod health;
pub mod recommend;

use axum::{
    Router,
    extract::OriginalUri,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use chat::chat_handler;
use health::health_handler;
use recommend::{list_doshas_handler, recommend_handler};

/// API routes, unprefixed.
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/recommend", post(recommend_handler))
        .route("/doshas", get(list_doshas_handler))
        .route("/chat", post(chat_handler))
}

/// Full application: API routes mounted under `api_prefix` (empty mounts at
/// the root), plus the banner, JSON 404s, CORS and request tracing.
pub fn build_app(api_prefix: &str) -> Router {
    let api = create_router();
    let app = if api_prefix.is_empty() {
        Router::new().merge(api)
    } else {
        Router::new().nest(api_prefix, api)
    };

    app.route("/", get(|| async { "Ayurveda backend is up" }))
        .fallback(not_found)
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}

async fn not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
