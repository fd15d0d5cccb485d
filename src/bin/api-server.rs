//! Astro Signal API Server
//!
//! Serves `GET /health`, `GET /metrics` and `POST /astro/compute`.
//! Stateless apart from the ephemeris loaded once at startup, so it can be
//! scaled horizontally.

use astro_signal::config::ServiceConfig;
use astro_signal::core::http::start_server;
use astro_signal::logging;
use astro_signal::services::init_oracle;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    let config = ServiceConfig::from_env();
    logging::init_logging(&config);

    info!("Starting Astro Signal API Server");
    info!(environment = %config.environment, "Environment");
    info!(port = config.port, "HTTP Server: http://0.0.0.0:{}", config.port);

    let oracle = init_oracle(&config.ephe_dir);
    info!(available = oracle.is_available(), ephe_dir = %config.ephe_dir, "Ephemeris");

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(&config, oracle).await {
            error!(error = %e, "HTTP server error");
        }
    });

    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
