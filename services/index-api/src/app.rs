//! Router construction.

use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

use crate::handlers;
use crate::state::AppState;

/// Build the service router.
///
/// When `static_dir` is given, unmatched paths are served from it, which is
/// how the map front-end is delivered.
pub fn build_router(state: Arc<AppState>, static_dir: Option<&Path>) -> Router {
    let router = Router::new()
        // Index computation
        .route(
            "/calculate/:index_name",
            post(handlers::calculate::calculate_handler),
        )
        // Discovery
        .route("/api/indices", get(handlers::api::indices_handler))
        .route("/api/bands", get(handlers::api::bands_handler))
        // Health
        .route("/health", get(handlers::health::health_handler));

    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}
