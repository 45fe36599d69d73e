//! HTTP server for the Pay Package Engine.
//!
//! Environment:
//! - `PAY_PACKAGE_CONFIG_DIR`: configuration directory (default `./config/adelphi`)
//! - `PAY_PACKAGE_BIND`: overrides the configured bind address
//! - `PAY_PACKAGE_LOG_JSON`: emit JSON log lines when set to `1` or `true`
//! - `RUST_LOG`: log filter (default `info`)

use std::env;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use pay_package_engine::api::{AppState, create_router};
use pay_package_engine::config::ConfigLoader;

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(default)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool("PAY_PACKAGE_LOG_JSON", false) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn wait_for_shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    init_tracing();

    let config_dir =
        env::var("PAY_PACKAGE_CONFIG_DIR").unwrap_or_else(|_| "./config/adelphi".to_string());
    let loader = ConfigLoader::load(&config_dir).map_err(|e| format!("config: {e}"))?;
    let bind_addr =
        env::var("PAY_PACKAGE_BIND").unwrap_or_else(|_| loader.service().bind_address.clone());
    info!(
        config_dir = %config_dir,
        agency = %loader.agency().name,
        seed_sample_data = loader.service().seed_sample_data,
        "Configuration loaded"
    );

    let app = create_router(AppState::new(loader));

    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| format!("bind {bind_addr} failed: {e}"))?;
    info!("pay-package-engine listening on {bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .map_err(|e| format!("server failed: {e}"))
}
