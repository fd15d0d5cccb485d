//! Signal engine: natal and transit positions to the four output signals.
//!
//! `derive` is total. Every failure lands on one rung of the degradation
//! ladder and is reported only through `confidence`:
//!
//! | outcome             | signals | confidence |
//! |---------------------|---------|------------|
//! | library unavailable | 0.5     | 0.0        |
//! | input unparseable   | 0.5     | 0.3        |
//! | oracle failure      | 0.5     | 0.0        |
//! | success             | derived | 1.0        |

use std::sync::Arc;

use tracing::{debug, warn};

use crate::astro::{self, AstronomicalInstant};
use crate::error::OracleError;
use crate::models::{Body, ComputeRequest, Outcome, SignalResult};
use crate::services::{Clock, EphemerisOracle, SystemClock};
use crate::signals::scoring::{fallback_ascendant, gain_score, phase_score, risk_score};

/// Result of one derivation together with the ladder state it reached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derivation {
    pub result: SignalResult,
    pub outcome: Outcome,
    /// Natal ascendant was replaced by natal Sun + 90°.
    pub ascendant_fallback: bool,
}

impl Derivation {
    fn degraded(outcome: Outcome) -> Self {
        Self {
            result: SignalResult::degraded(outcome.confidence()),
            outcome,
            ascendant_fallback: false,
        }
    }
}

#[derive(Clone)]
pub struct SignalEngine {
    oracle: Arc<dyn EphemerisOracle>,
    clock: Arc<dyn Clock>,
}

impl SignalEngine {
    pub fn new(oracle: Arc<dyn EphemerisOracle>) -> Self {
        Self::with_clock(oracle, Arc::new(SystemClock))
    }

    pub fn with_clock(oracle: Arc<dyn EphemerisOracle>, clock: Arc<dyn Clock>) -> Self {
        Self { oracle, clock }
    }

    pub fn oracle_available(&self) -> bool {
        self.oracle.is_available()
    }

    pub fn derive(&self, request: &ComputeRequest) -> SignalResult {
        self.derive_with_outcome(request).result
    }

    pub fn derive_with_outcome(&self, request: &ComputeRequest) -> Derivation {
        if !self.oracle.is_available() {
            return Derivation::degraded(Outcome::LibraryUnavailable);
        }

        let natal = match astro::normalize(
            &request.birth_date,
            &request.birth_time,
            &request.timezone_name,
        ) {
            Ok(instant) => instant,
            Err(e) => {
                warn!(error = %e, "Birth time not parseable - returning neutral signals");
                return Derivation::degraded(Outcome::InputUnparseable);
            }
        };

        match self.compute(natal, request) {
            Ok(derivation) => {
                debug!(
                    gain = derivation.result.gain_signal,
                    risk = derivation.result.risk_signal,
                    phase = derivation.result.phase_signal,
                    ascendant_fallback = derivation.ascendant_fallback,
                    "Signals derived"
                );
                derivation
            }
            Err(e) => {
                warn!(error = %e, "Ephemeris lookup failed - returning neutral signals");
                Derivation::degraded(Outcome::OracleFailure)
            }
        }
    }

    fn compute(
        &self,
        natal: AstronomicalInstant,
        request: &ComputeRequest,
    ) -> Result<Derivation, OracleError> {
        let natal_sun = self.oracle.position(natal, Body::Sun)?.normalized();
        let natal_moon = self.oracle.position(natal, Body::Moon)?.normalized();

        let (natal_ascendant, ascendant_fallback) =
            match self
                .oracle
                .ascendant(natal, request.latitude, request.longitude)
            {
                Ok(Some(position)) => (position.normalized(), false),
                Ok(None) => {
                    warn!(
                        latitude = request.latitude,
                        "No Placidus ascendant at this latitude - using fallback"
                    );
                    (fallback_ascendant(natal_sun), true)
                }
                Err(e) => {
                    warn!(error = %e, "Ascendant lookup failed - using fallback");
                    (fallback_ascendant(natal_sun), true)
                }
            };

        let now = AstronomicalInstant::from_utc(self.clock.now());
        let current_sun = self.oracle.position(now, Body::Sun)?.normalized();
        let current_moon = self.oracle.position(now, Body::Moon)?.normalized();

        let result = SignalResult::new(
            gain_score(natal_sun, natal_moon, natal_ascendant),
            risk_score(current_moon, natal_sun),
            phase_score(current_moon, current_sun),
            Outcome::Success.confidence(),
        );

        Ok(Derivation {
            result,
            outcome: Outcome::Success,
            ascendant_fallback,
        })
    }
}
