//! Request-scoped data models shared by the pipeline stages.

pub mod ephemeris;
pub mod request;
pub mod signal;

pub use ephemeris::{Body, CelestialPosition};
pub use request::{AstroComputeInput, ComputeRequest};
pub use signal::{AstroComputeOutput, Outcome, SignalResult};
