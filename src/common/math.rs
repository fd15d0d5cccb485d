//! Angle and bounded-scalar helpers used by the signal engine.

/// Clamp a value to the unit interval.
pub fn clamp01(x: f64) -> f64 {
    x.min(1.0).max(0.0)
}

/// Round to 4 decimal places.
pub fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

/// Reduce an angle in degrees to [0, 360).
pub fn normalize_degrees(angle: f64) -> f64 {
    let r = angle.rem_euclid(360.0);
    // rem_euclid can land on 360.0 for tiny negative inputs
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// Shorter arc between two angles, in [0, 180].
pub fn angular_separation(a: f64, b: f64) -> f64 {
    let sep = normalize_degrees((a - b).abs());
    if sep > 180.0 {
        360.0 - sep
    } else {
        sep
    }
}
