//! Signal derivation: pure scoring formulas and the degradation-aware engine.

pub mod engine;
pub mod scoring;

pub use engine::{Derivation, SignalEngine};
pub use scoring::*;
