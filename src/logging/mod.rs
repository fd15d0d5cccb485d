//! Logging setup for the signal service
//!
//! - Production: structured JSON lines for log aggregation
//! - Sandbox: colourful, human-readable output

use crate::config::ServiceConfig;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    pub fn for_config(config: &ServiceConfig) -> Self {
        if config.is_production() {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

/// Install the global subscriber for the configured environment, filtered by
/// `RUST_LOG` (default `info`).
pub fn init_logging(config: &ServiceConfig) {
    init_logging_with(LogFormat::for_config(config));
}

pub fn init_logging_with(format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    // A second init (tests, embedding) keeps the first subscriber.
    let result = match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(std::io::stdout),
            )
            .try_init(),
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(true)
                    .with_writer(std::io::stdout),
            )
            .try_init(),
    };

    if result.is_err() {
        tracing::debug!("global subscriber already installed");
    }
}
