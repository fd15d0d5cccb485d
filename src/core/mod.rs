//! HTTP surface of the signal service

pub mod http;

pub use http::*;
