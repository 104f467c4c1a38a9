use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use url::Url;

use self::store::Store;

pub mod endpoints;
pub mod error;
pub mod store;

#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<Config>,
    pub store: Store,
}

/// Mock data server standing in for the housing backend during development.
#[derive(Parser, Clone, Debug)]
#[command(version)]
pub struct Config {
    #[arg(long, env = "APP_BIND", default_value = "[::]:3000")]
    pub bind: SocketAddr,

    /// json-server style seed file holding the housing locations.
    #[arg(long, env = "APP_DATA_FILE", default_value = "data/locations.json")]
    pub data_file: PathBuf,

    /// API origin advertised to the SPA through /config.json. When unset the
    /// SPA falls back to the local default.
    #[arg(long, env = "APP_API_URL")]
    pub api_url: Option<Url>,

    /// Directory with the built SPA, served as static fallback when set.
    #[arg(long, env = "SPA_DIST")]
    pub spa_dist: Option<PathBuf>,
}
