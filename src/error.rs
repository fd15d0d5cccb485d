//! Typed failures for each stage of the signal pipeline.

use thiserror::Error;

/// Failure to turn a civil date/time/timezone triple into an astronomical instant.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NormalizationError {
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid time '{0}': expected HH:MM or HH:MM:SS")]
    InvalidTime(String),

    #[error("unknown timezone '{0}'")]
    UnknownTimezone(String),
}

/// Failure reported by an ephemeris oracle.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OracleError {
    /// The backend never initialized; every call fails the same way.
    #[error("ephemeris library unavailable")]
    Unavailable,

    #[error("ephemeris computation failed: {message}")]
    Computation { message: String },
}

/// Failure while loading the ephemeris data directory or process settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("ephemeris directory must be relative to the installation, got '{0}'")]
    AbsoluteEphemerisPath(String),

    #[error("ephemeris directory '{0}' not found")]
    EphemerisDirNotFound(String),

    #[error("failed to read ephemeris data: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed ephemeris data: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("ephemeris data invalid: {message}")]
    Invalid { message: String },
}
