//! Astronomical time handling.

pub mod time;

pub use time::{julian_day, normalize, AstronomicalInstant};
