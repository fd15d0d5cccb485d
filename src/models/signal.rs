use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::math::{clamp01, round4};

/// Neutral value every signal falls back to when it cannot be computed.
pub const NEUTRAL_SIGNAL: f64 = 0.5;
pub const CONFIDENCE_UNAVAILABLE: f64 = 0.0;
pub const CONFIDENCE_UNPARSEABLE: f64 = 0.3;
pub const CONFIDENCE_FULL: f64 = 1.0;

/// The four output scalars, each in [0, 1] with 4-decimal precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalResult {
    pub gain_signal: f64,
    pub risk_signal: f64,
    pub phase_signal: f64,
    pub confidence: f64,
}

impl SignalResult {
    /// Clamp and round every field.
    pub fn new(gain_signal: f64, risk_signal: f64, phase_signal: f64, confidence: f64) -> Self {
        Self {
            gain_signal: round4(clamp01(gain_signal)),
            risk_signal: round4(clamp01(risk_signal)),
            phase_signal: round4(clamp01(phase_signal)),
            confidence: round4(clamp01(confidence)),
        }
    }

    /// All signals neutral, with the given confidence tier.
    pub fn degraded(confidence: f64) -> Self {
        Self::new(NEUTRAL_SIGNAL, NEUTRAL_SIGNAL, NEUTRAL_SIGNAL, confidence)
    }
}

/// Terminal state reached by one derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Success,
    LibraryUnavailable,
    InputUnparseable,
    OracleFailure,
}

impl Outcome {
    pub const ALL: [Outcome; 4] = [
        Outcome::Success,
        Outcome::LibraryUnavailable,
        Outcome::InputUnparseable,
        Outcome::OracleFailure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::LibraryUnavailable => "library_unavailable",
            Outcome::InputUnparseable => "input_unparseable",
            Outcome::OracleFailure => "oracle_failure",
        }
    }

    /// Confidence tier reported for this outcome.
    pub fn confidence(&self) -> f64 {
        match self {
            Outcome::Success => CONFIDENCE_FULL,
            Outcome::LibraryUnavailable | Outcome::OracleFailure => CONFIDENCE_UNAVAILABLE,
            Outcome::InputUnparseable => CONFIDENCE_UNPARSEABLE,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response body of `POST /astro/compute`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AstroComputeOutput {
    pub gain_signal: f64,
    pub risk_signal: f64,
    pub phase_signal: f64,
    pub confidence: f64,
}

impl From<SignalResult> for AstroComputeOutput {
    fn from(result: SignalResult) -> Self {
        Self {
            gain_signal: result.gain_signal,
            risk_signal: result.risk_signal,
            phase_signal: result.phase_signal,
            confidence: result.confidence,
        }
    }
}
