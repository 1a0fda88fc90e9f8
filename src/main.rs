//! HR Engine HTTP server.
//!
//! Loads organisation policy from `HR_ENGINE_CONFIG_DIR` (default
//! `./config/default`) and serves the API on `HR_ENGINE_ADDR` (default
//! `0.0.0.0:3000`). Log filtering follows `RUST_LOG`.

use std::env;

use hr_engine::api::{AppState, create_router};
use hr_engine::config::ConfigLoader;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hr_engine=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), String> {
    init_tracing();

    let config_dir = env::var("HR_ENGINE_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let addr = env::var("HR_ENGINE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.into());

    let config = ConfigLoader::load(&config_dir)
        .map_err(|e| format!("failed to load config from {config_dir}: {e}"))?;
    info!(
        config_dir = %config_dir,
        organization = %config.organization().name,
        default_shift = %config.organization().default_shift,
        "Organisation policy loaded"
    );

    let app = create_router(AppState::new(config));

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("bind {addr} failed: {e}"))?;
    info!("hr-engine listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("server failed: {e}"))
}
