use std::fmt;

use crate::common::math::normalize_degrees;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Body::Sun => write!(f, "sun"),
            Body::Moon => write!(f, "moon"),
        }
    }
}

/// Ecliptic longitude in degrees as returned by an oracle.
///
/// The raw value may lie outside [0, 360); use [`CelestialPosition::normalized`]
/// before doing arithmetic with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelestialPosition {
    longitude: f64,
}

impl CelestialPosition {
    pub fn new(longitude: f64) -> Self {
        Self { longitude }
    }

    pub fn raw(&self) -> f64 {
        self.longitude
    }

    pub fn normalized(&self) -> f64 {
        normalize_degrees(self.longitude)
    }
}
