//! Process configuration read from the environment.

use std::env;

pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_EPHE_DIR: &str = "ephe";
pub const DEFAULT_ENVIRONMENT: &str = "sandbox";

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub port: u16,
    /// Ephemeris data directory, relative to the installation location.
    pub ephe_dir: String,
    /// Deployment environment name (`APP_ENV`).
    pub environment: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            ephe_dir: DEFAULT_EPHE_DIR.to_string(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup so tests don't touch process env.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let ephe_dir = lookup("EPHE_DIR")
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| DEFAULT_EPHE_DIR.to_string());

        let environment =
            lookup("APP_ENV").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

        Self {
            port,
            ephe_dir,
            environment,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self.environment.as_str(), "production" | "prod")
    }
}
