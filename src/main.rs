//! Launchboard Server
//!
//! Run with: cargo run --bin launchboard
//!
//! # Configuration
//!
//! Read from `LAUNCHBOARD_CONFIG` or the default config locations, then
//! overridden by environment variables:
//! - `LAUNCHBOARD_DATASET`: Launch CSV (default: spacex_launch_dash.csv)
//! - `LAUNCHBOARD_HOST`: Host to bind to (default: 0.0.0.0)
//! - `LAUNCHBOARD_PORT`: Port to listen on (default: 8050)
//! - `LAUNCHBOARD_LOG_LEVEL`: Log level (default: info)
//! - `LAUNCHBOARD_LOG_FORMAT`: pretty or json (default: pretty)
//! - `RUST_LOG`: Full filter directive, takes precedence over the level

use launchboard::api::{serve, AppState};
use launchboard::config::{Config, LoggingConfig};
use launchboard::dataset::Dataset;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let loaded = Config::load_default()?;
    init_tracing(&loaded.config.logging);
    loaded.log();
    let config = loaded.config;

    tracing::info!("Starting Launchboard v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Dataset: {}", config.dataset.path);

    // A dataset that fails to load is fatal; there is nothing to serve.
    let dataset = match Dataset::load(Path::new(&config.dataset.path)) {
        Ok(dataset) => dataset,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load launch dataset");
            return Err(e.into());
        }
    };
    tracing::info!("{}", dataset.summary());

    let state = AppState::new(dataset, &config.dashboard);

    tracing::info!("Starting server on {}", config.server.addr());
    serve(state, &config.server).await?;

    tracing::info!("Launchboard stopped");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("launchboard={},tower_http=debug", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
