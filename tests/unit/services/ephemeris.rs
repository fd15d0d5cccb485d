//! Unit tests for the ephemeris oracles and their data loading

use std::fs;

use astro_signal::astro::AstronomicalInstant;
use astro_signal::common::math::angular_separation;
use astro_signal::error::{ConfigError, OracleError};
use astro_signal::models::Body;
use astro_signal::services::ephemeris::{
    init_oracle, resolve_ephemeris_dir_from, LunarTermTable, LUNAR_TERMS_FILE,
};
use astro_signal::services::{AnalyticEphemeris, EphemerisOracle, NullOracle};

use crate::support_oracle::{bundled_ephe_dir, bundled_ephemeris};

fn at(jd: f64) -> AstronomicalInstant {
    AstronomicalInstant::from_julian_day(jd)
}

#[test]
fn test_bundled_table_loads() {
    let ephemeris = bundled_ephemeris();
    assert!(ephemeris.is_available());
    assert_eq!(ephemeris.lunar_terms().len(), 59);
}

#[test]
fn test_sun_longitude_reference() {
    // 1992 October 13.0: apparent longitude 199.90895 degrees
    let sun = bundled_ephemeris().position(at(2_448_908.5), Body::Sun).unwrap();
    assert!((sun.raw() - 199.909).abs() < 0.01, "sun = {}", sun.raw());
}

#[test]
fn test_sun_near_zero_at_march_equinox() {
    // 2000-03-20 07:35 UT
    let jd = 2_451_623.5 + (7.0 + 35.0 / 60.0) / 24.0;
    let sun = bundled_ephemeris().position(at(jd), Body::Sun).unwrap();
    assert!(angular_separation(sun.normalized(), 0.0) < 0.05, "sun = {}", sun.raw());
}

#[test]
fn test_moon_longitude_reference() {
    // 1992 April 12.0: geocentric longitude 133.162655 degrees
    let moon = bundled_ephemeris().position(at(2_448_724.5), Body::Moon).unwrap();
    assert!((moon.raw() - 133.1627).abs() < 0.01, "moon = {}", moon.raw());
}

#[test]
fn test_positions_are_normalized() {
    let ephemeris = bundled_ephemeris();
    for jd in [2_415_020.0, 2_440_000.25, 2_451_545.0, 2_460_000.75, 2_470_000.5] {
        for body in [Body::Sun, Body::Moon] {
            let lon = ephemeris.position(at(jd), body).unwrap().raw();
            assert!((0.0..360.0).contains(&lon), "{body} at {jd} = {lon}");
        }
    }
}

#[test]
fn test_moon_moves_about_thirteen_degrees_a_day() {
    let ephemeris = bundled_ephemeris();
    let a = ephemeris.position(at(2_451_545.0), Body::Moon).unwrap().normalized();
    let b = ephemeris.position(at(2_451_546.0), Body::Moon).unwrap().normalized();
    let daily = angular_separation(a, b);
    assert!((11.0..=15.5).contains(&daily), "daily motion {daily}");
}

#[test]
fn test_ascendant_defined_at_mid_latitudes() {
    let ephemeris = bundled_ephemeris();
    let instant = at(2_448_057.625); // 1990-06-15 03:00 UT
    let asc = ephemeris.ascendant(instant, 28.61, 77.21).unwrap().unwrap();
    assert!((0.0..360.0).contains(&asc.raw()));
    // Three hours after sunrise with the Sun in late Gemini, Leo is rising
    assert!((120.0..150.0).contains(&asc.raw()), "asc = {}", asc.raw());
}

#[test]
fn test_ascendant_undefined_inside_polar_circles() {
    let ephemeris = bundled_ephemeris();
    let instant = at(2_451_545.0);
    assert_eq!(ephemeris.ascendant(instant, 70.0, 20.0).unwrap(), None);
    assert_eq!(ephemeris.ascendant(instant, -80.0, 0.0).unwrap(), None);
    assert_eq!(ephemeris.ascendant(instant, 90.0, 0.0).unwrap(), None);
    assert!(ephemeris.ascendant(instant, 60.0, 20.0).unwrap().is_some());
}

#[test]
fn test_non_finite_inputs_are_computation_errors() {
    let ephemeris = bundled_ephemeris();
    let err = ephemeris.position(at(f64::NAN), Body::Sun).unwrap_err();
    assert!(matches!(err, OracleError::Computation { .. }));

    let err = ephemeris
        .ascendant(at(2_451_545.0), f64::NAN, 0.0)
        .unwrap_err();
    assert!(matches!(err, OracleError::Computation { .. }));
}

#[test]
fn test_null_oracle_reports_unavailable() {
    let oracle = NullOracle;
    assert!(!oracle.is_available());
    assert_eq!(
        oracle.position(at(2_451_545.0), Body::Moon),
        Err(OracleError::Unavailable)
    );
    assert_eq!(
        oracle.ascendant(at(2_451_545.0), 0.0, 0.0),
        Err(OracleError::Unavailable)
    );
}

#[test]
fn test_open_missing_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("nope");
    assert!(matches!(
        AnalyticEphemeris::open(&missing),
        Err(ConfigError::EphemerisDirNotFound(_))
    ));
}

#[test]
fn test_open_directory_without_table() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(matches!(
        AnalyticEphemeris::open(tmp.path()),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn test_open_malformed_table() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join(LUNAR_TERMS_FILE), "{ not json").unwrap();
    assert!(matches!(
        AnalyticEphemeris::open(tmp.path()),
        Err(ConfigError::Malformed(_))
    ));
}

#[test]
fn test_table_validation() {
    assert!(matches!(
        LunarTermTable::from_json(r#"{"longitude": []}"#),
        Err(ConfigError::Invalid { .. })
    ));
    assert!(matches!(
        LunarTermTable::from_json(r#"{"longitude": [[0, 3, 0, 0, 100]]}"#),
        Err(ConfigError::Invalid { .. })
    ));

    let table = LunarTermTable::from_json(r#"{"longitude": [[0, 0, 1, 0, 6288774]]}"#).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.terms()[0].m_prime, 1);
    assert_eq!(table.terms()[0].amplitude, 6_288_774.0);
}

#[test]
fn test_copied_table_matches_bundled() {
    let tmp = tempfile::tempdir().unwrap();
    fs::copy(
        bundled_ephe_dir().join(LUNAR_TERMS_FILE),
        tmp.path().join(LUNAR_TERMS_FILE),
    )
    .unwrap();
    let copied = AnalyticEphemeris::open(tmp.path()).unwrap();
    assert_eq!(copied.lunar_terms(), bundled_ephemeris().lunar_terms());
}

#[test]
fn test_resolve_rejects_absolute_paths() {
    let tmp = tempfile::tempdir().unwrap();
    let absolute = tmp.path().to_string_lossy().to_string();
    assert!(matches!(
        resolve_ephemeris_dir_from(tmp.path(), &absolute),
        Err(ConfigError::AbsoluteEphemerisPath(_))
    ));
}

#[test]
fn test_resolve_searches_install_ancestors() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("ephe")).unwrap();
    let install = tmp.path().join("target").join("release");
    fs::create_dir_all(&install).unwrap();

    let resolved = resolve_ephemeris_dir_from(&install, "ephe").unwrap();
    assert_eq!(resolved, tmp.path().join("ephe"));
}

#[test]
fn test_resolve_prefers_closest_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let install = tmp.path().join("bin");
    fs::create_dir_all(install.join("ephe")).unwrap();
    fs::create_dir_all(tmp.path().join("ephe")).unwrap();

    let resolved = resolve_ephemeris_dir_from(&install, "ephe").unwrap();
    assert_eq!(resolved, install.join("ephe"));
}

#[test]
fn test_resolve_missing_directory() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(matches!(
        resolve_ephemeris_dir_from(tmp.path(), "ephe-missing"),
        Err(ConfigError::EphemerisDirNotFound(_))
    ));
}

#[test]
fn test_init_oracle_degrades_to_null() {
    let oracle = init_oracle("definitely-not-an-ephemeris-dir");
    assert!(!oracle.is_available());
}

#[test]
fn test_init_oracle_rejects_absolute_dir() {
    let absolute = bundled_ephe_dir().to_string_lossy().to_string();
    let oracle = init_oracle(&absolute);
    assert!(!oracle.is_available());
}
