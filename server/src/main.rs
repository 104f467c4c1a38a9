use std::io;
use std::sync::Arc;

use clap::Parser;
use server::store::Store;
use server::{endpoints, AppContext, Config};
use tokio::signal::unix::SignalKind;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    info!(?config, "Starting Homes mock data server");

    info!(data_file = ?config.data_file, "Loading housing location seed");
    let store = Store::load(&config.data_file)?;
    info!(locations = store.len(), "Seed data loaded");

    let context = AppContext {
        config: Arc::new(config.clone()),
        store,
    };
    let app = endpoints::app(context);

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    info!(bind_address = %config.bind, "HTTP server listening");
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("HTTP server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    async fn terminate() -> io::Result<()> {
        tokio::signal::unix::signal(SignalKind::terminate())?
            .recv()
            .await;
        Ok(())
    }
    tokio::select! {
        _ = terminate() => {},
        _ = tokio::signal::ctrl_c() => {},
    }
    info!("Shutdown signal received, starting graceful shutdown")
}
