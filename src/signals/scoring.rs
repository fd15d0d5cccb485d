//! Raw signal formulas over ecliptic longitudes in degrees.
//!
//! Inputs may be unnormalized; every formula reduces modulo 360 first.
//! Outputs are clamped to [0, 1] but not rounded.

use crate::common::math::{angular_separation, clamp01, normalize_degrees};

pub const GAIN_SUN_WEIGHT: f64 = 0.33;
pub const GAIN_MOON_WEIGHT: f64 = 0.33;
pub const GAIN_ASCENDANT_WEIGHT: f64 = 0.34;

/// Offset added to the natal Sun when no ascendant is available.
pub const ASCENDANT_FALLBACK_OFFSET: f64 = 90.0;

/// Weighted blend of the natal angles, each mapped to [0, 1).
pub fn gain_score(natal_sun: f64, natal_moon: f64, natal_ascendant: f64) -> f64 {
    clamp01(
        GAIN_SUN_WEIGHT * normalize_degrees(natal_sun) / 360.0
            + GAIN_MOON_WEIGHT * normalize_degrees(natal_moon) / 360.0
            + GAIN_ASCENDANT_WEIGHT * normalize_degrees(natal_ascendant) / 360.0,
    )
}

/// Transit stress of the current Moon against the natal Sun.
///
/// Peaks at a square (90°), zero at conjunction and opposition.
pub fn risk_score(current_moon: f64, natal_sun: f64) -> f64 {
    let sep = angular_separation(current_moon, natal_sun);
    clamp01(sep.to_radians().sin())
}

/// Sun-Moon elongation as a fraction of the lunation; 0 at new moon.
pub fn phase_score(current_moon: f64, current_sun: f64) -> f64 {
    clamp01(normalize_degrees(current_moon - current_sun) / 360.0)
}

/// Stand-in ascendant: natal Sun plus a quadrant.
pub fn fallback_ascendant(natal_sun: f64) -> f64 {
    normalize_degrees(natal_sun + ASCENDANT_FALLBACK_OFFSET)
}
