//! Astro signal service
//!
//! Derives four bounded numeric signals (gain, risk, phase, confidence) from a
//! birth timestamp and location using an in-process ephemeris, and serves them
//! over HTTP.

pub mod astro;
pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;
