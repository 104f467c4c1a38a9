use axum::routing::get;
use axum::{Extension, Json, Router};
use axum_macros::debug_handler;
use shared::AppConfig;
use tracing::debug;
use url::Url;

use crate::AppContext;

pub fn router() -> Router {
    Router::new().route("/config.json", get(get_config))
}

/// Runtime configuration for the SPA, fetched once at startup.
#[debug_handler]
async fn get_config(Extension(context): Extension<AppContext>) -> Json<AppConfig> {
    let config = AppConfig {
        api_url: context.config.api_url.as_ref().map(Url::to_string),
    };
    debug!(?config, "Serving runtime config");
    Json(config)
}
