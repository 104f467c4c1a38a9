use gloo_net::http::Request;
use gloo_net::Error;
use shared::AppConfig;

/// Fetches the runtime configuration served next to the SPA bundle. Called
/// once at startup; the caller falls back to defaults on failure.
pub async fn load_config() -> Result<AppConfig, Error> {
    Request::get("/config.json")
        .send()
        .await?
        .json::<AppConfig>()
        .await
}
