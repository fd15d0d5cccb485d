//! Scripted oracles for driving the engine through each ladder state.

#![allow(dead_code)]

use std::path::PathBuf;

use astro_signal::astro::AstronomicalInstant;
use astro_signal::error::OracleError;
use astro_signal::models::{Body, CelestialPosition};
use astro_signal::services::{AnalyticEphemeris, EphemerisOracle};

/// Bundled ephemeris data directory at the crate root.
pub fn bundled_ephe_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("ephe")
}

pub fn bundled_ephemeris() -> AnalyticEphemeris {
    AnalyticEphemeris::open(&bundled_ephe_dir()).expect("bundled ephemeris loads")
}

#[derive(Debug, Clone, Copy)]
pub enum AscendantBehaviour {
    At(f64),
    Undefined,
    Fails,
}

/// Returns fixed longitudes: natal values at `natal_jd`, current values otherwise.
#[derive(Debug, Clone)]
pub struct ScriptedOracle {
    pub natal_jd: f64,
    pub natal_sun: f64,
    pub natal_moon: f64,
    pub ascendant: AscendantBehaviour,
    pub current_sun: f64,
    pub current_moon: f64,
    /// Make every position lookup at the current instant fail.
    pub fail_current: bool,
}

impl ScriptedOracle {
    pub fn new(natal: AstronomicalInstant) -> Self {
        Self {
            natal_jd: natal.julian_day(),
            natal_sun: 10.0,
            natal_moon: 20.0,
            ascendant: AscendantBehaviour::At(30.0),
            current_sun: 0.0,
            current_moon: 0.0,
            fail_current: false,
        }
    }

    fn is_natal(&self, instant: AstronomicalInstant) -> bool {
        (instant.julian_day() - self.natal_jd).abs() < 1e-9
    }
}

impl EphemerisOracle for ScriptedOracle {
    fn is_available(&self) -> bool {
        true
    }

    fn position(
        &self,
        instant: AstronomicalInstant,
        body: Body,
    ) -> Result<CelestialPosition, OracleError> {
        if self.is_natal(instant) {
            return Ok(CelestialPosition::new(match body {
                Body::Sun => self.natal_sun,
                Body::Moon => self.natal_moon,
            }));
        }
        if self.fail_current {
            return Err(OracleError::Computation {
                message: "scripted failure".to_string(),
            });
        }
        Ok(CelestialPosition::new(match body {
            Body::Sun => self.current_sun,
            Body::Moon => self.current_moon,
        }))
    }

    fn ascendant(
        &self,
        _instant: AstronomicalInstant,
        _latitude: f64,
        _longitude: f64,
    ) -> Result<Option<CelestialPosition>, OracleError> {
        match self.ascendant {
            AscendantBehaviour::At(angle) => Ok(Some(CelestialPosition::new(angle))),
            AscendantBehaviour::Undefined => Ok(None),
            AscendantBehaviour::Fails => Err(OracleError::Computation {
                message: "houses failed".to_string(),
            }),
        }
    }
}

/// Claims availability but fails every lookup.
pub struct BrokenOracle;

impl EphemerisOracle for BrokenOracle {
    fn is_available(&self) -> bool {
        true
    }

    fn position(
        &self,
        _instant: AstronomicalInstant,
        _body: Body,
    ) -> Result<CelestialPosition, OracleError> {
        Err(OracleError::Computation {
            message: "backend crashed".to_string(),
        })
    }

    fn ascendant(
        &self,
        _instant: AstronomicalInstant,
        _latitude: f64,
        _longitude: f64,
    ) -> Result<Option<CelestialPosition>, OracleError> {
        Err(OracleError::Computation {
            message: "backend crashed".to_string(),
        })
    }
}

pub fn request(date: &str, time: &str, timezone: &str) -> astro_signal::models::ComputeRequest {
    astro_signal::models::ComputeRequest {
        birth_date: date.to_string(),
        birth_time: time.to_string(),
        latitude: 28.61,
        longitude: 77.21,
        timezone_name: timezone.to_string(),
        problem_context: "career".to_string(),
        summary_text: "summary".to_string(),
    }
}

pub fn delhi_request() -> astro_signal::models::ComputeRequest {
    request("1990-06-15", "08:30", "Asia/Kolkata")
}
