use axum::http::StatusCode;
use axum::routing::get;
use axum::{Extension, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::AppContext;

pub mod applications;
pub mod config;
pub mod locations;

/// Full application router, including layers. Shared by the binary and the
/// integration tests.
pub fn app(context: AppContext) -> Router {
    let router = Router::new()
        .merge(locations::router())
        .merge(applications::router())
        .merge(config::router())
        .merge(health_check());
    let router = match &context.config.spa_dist {
        Some(dist) => router.fallback_service(ServeDir::new(dist)),
        None => router,
    };
    router
        .layer(Extension(context))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub fn health_check() -> Router {
    Router::new().route("/health", get(|| async { StatusCode::OK }))
}
