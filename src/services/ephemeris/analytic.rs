//! In-process analytic ephemeris for the Sun, the Moon and the ascendant.
//!
//! Solar longitude uses the equation of centre on the geometric mean
//! longitude, corrected to apparent longitude. Lunar longitude sums the
//! periodic term table loaded from the data directory on top of the mean
//! longitude. Both are accurate to a few hundredths of a degree around the
//! present era, which is far finer than the signals resolve.

use std::path::Path;

use crate::astro::time::J2000;
use crate::astro::AstronomicalInstant;
use crate::common::math::normalize_degrees;
use crate::error::{ConfigError, OracleError};
use crate::models::{Body, CelestialPosition};

use super::terms::LunarTermTable;
use super::EphemerisOracle;

pub struct AnalyticEphemeris {
    lunar_terms: LunarTermTable,
}

impl AnalyticEphemeris {
    /// Load the data directory. This is the only I/O the oracle ever does.
    pub fn open(dir: &Path) -> Result<Self, ConfigError> {
        Ok(Self::with_terms(LunarTermTable::load(dir)?))
    }

    pub fn with_terms(lunar_terms: LunarTermTable) -> Self {
        Self { lunar_terms }
    }

    pub fn lunar_terms(&self) -> &LunarTermTable {
        &self.lunar_terms
    }

    fn moon_longitude(&self, t: f64) -> f64 {
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;

        let l_prime = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
            - t4 / 65_194_000.0;
        let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
            - t4 / 113_065_000.0;
        let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0;
        let m_prime = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
            - t4 / 14_712_000.0;
        let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
            + t4 / 863_310_000.0;

        let a1 = 119.75 + 131.849 * t;
        let a2 = 53.09 + 479_264.290 * t;
        // Earth orbit eccentricity decay
        let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;

        let mut sum: f64 = self
            .lunar_terms
            .terms()
            .iter()
            .map(|term| {
                let arg = term.d as f64 * d
                    + term.m as f64 * m
                    + term.m_prime as f64 * m_prime
                    + term.f as f64 * f;
                term.amplitude * e.powi(term.m.abs()) * sin_deg(arg)
            })
            .sum();

        sum += 3958.0 * sin_deg(a1) + 1962.0 * sin_deg(l_prime - f) + 318.0 * sin_deg(a2);

        normalize_degrees(l_prime + sum / 1_000_000.0)
    }
}

fn sin_deg(angle: f64) -> f64 {
    normalize_degrees(angle).to_radians().sin()
}

fn cos_deg(angle: f64) -> f64 {
    normalize_degrees(angle).to_radians().cos()
}

/// Apparent geocentric longitude of the Sun, `t` in Julian centuries from J2000.
fn sun_longitude(t: f64) -> f64 {
    let t2 = t * t;
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t2;
    let m = 357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t2;
    let centre = (1.914_602 - 0.004_817 * t - 0.000_014 * t2) * sin_deg(m)
        + (0.019_993 - 0.000_101 * t) * sin_deg(2.0 * m)
        + 0.000_289 * sin_deg(3.0 * m);
    let omega = 125.04 - 1934.136 * t;
    normalize_degrees(l0 + centre - 0.005_69 - 0.004_78 * sin_deg(omega))
}

/// Mean obliquity of the ecliptic in degrees.
fn obliquity(t: f64) -> f64 {
    23.439_291 - 0.013_004_2 * t - 0.000_000_164 * t * t + 0.000_000_504 * t * t * t
}

/// Greenwich mean sidereal time in degrees.
fn greenwich_sidereal_time(jd: f64, t: f64) -> f64 {
    normalize_degrees(
        280.460_618_37 + 360.985_647_366_29 * (jd - J2000) + 0.000_387_933 * t * t
            - t * t * t / 38_710_000.0,
    )
}

fn finite(value: f64, what: &str) -> Result<f64, OracleError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(OracleError::Computation {
            message: format!("non-finite {}", what),
        })
    }
}

impl EphemerisOracle for AnalyticEphemeris {
    fn is_available(&self) -> bool {
        true
    }

    fn position(
        &self,
        instant: AstronomicalInstant,
        body: Body,
    ) -> Result<CelestialPosition, OracleError> {
        let t = finite(instant.centuries_since_j2000(), "julian day")?;
        let longitude = match body {
            Body::Sun => sun_longitude(t),
            Body::Moon => self.moon_longitude(t),
        };
        Ok(CelestialPosition::new(finite(longitude, "longitude")?))
    }

    fn ascendant(
        &self,
        instant: AstronomicalInstant,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<CelestialPosition>, OracleError> {
        let jd = finite(instant.julian_day(), "julian day")?;
        let latitude = finite(latitude, "latitude")?;
        let longitude = finite(longitude, "longitude")?;
        let t = instant.centuries_since_j2000();

        let epsilon = obliquity(t);
        // Placidus cusps do not exist inside the polar circles.
        if latitude.abs() >= 90.0 - epsilon {
            return Ok(None);
        }

        let ramc = greenwich_sidereal_time(jd, t) + longitude;
        let y = cos_deg(ramc);
        let x = -(sin_deg(ramc) * cos_deg(epsilon)
            + latitude.to_radians().tan() * sin_deg(epsilon));
        let ascendant = normalize_degrees(y.atan2(x).to_degrees());

        Ok(Some(CelestialPosition::new(finite(ascendant, "ascendant")?)))
    }
}
