//! Ephemeris oracle interface.
//!
//! The engine only talks to [`EphemerisOracle`]. At startup [`init_oracle`]
//! loads the bundled data directory once and hands back either the analytic
//! ephemeris or, when the data cannot be loaded, a [`NullOracle`] that reports
//! the library as unavailable on every call.

pub mod analytic;
pub mod terms;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use crate::astro::AstronomicalInstant;
use crate::error::{ConfigError, OracleError};
use crate::models::{Body, CelestialPosition};

pub use analytic::AnalyticEphemeris;
pub use terms::{LunarTerm, LunarTermTable, LUNAR_TERMS_FILE};

/// How many directories above the executable are searched for the data dir.
const INSTALL_SEARCH_DEPTH: usize = 4;

pub trait EphemerisOracle: Send + Sync {
    /// `false` when the backend failed to initialize.
    fn is_available(&self) -> bool;

    /// Geocentric ecliptic longitude of `body` at `instant`.
    fn position(
        &self,
        instant: AstronomicalInstant,
        body: Body,
    ) -> Result<CelestialPosition, OracleError>;

    /// Placidus ascendant, or `None` where the house system is undefined.
    fn ascendant(
        &self,
        instant: AstronomicalInstant,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<CelestialPosition>, OracleError>;
}

/// Stand-in when the ephemeris data could not be loaded.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullOracle;

impl EphemerisOracle for NullOracle {
    fn is_available(&self) -> bool {
        false
    }

    fn position(
        &self,
        _instant: AstronomicalInstant,
        _body: Body,
    ) -> Result<CelestialPosition, OracleError> {
        Err(OracleError::Unavailable)
    }

    fn ascendant(
        &self,
        _instant: AstronomicalInstant,
        _latitude: f64,
        _longitude: f64,
    ) -> Result<Option<CelestialPosition>, OracleError> {
        Err(OracleError::Unavailable)
    }
}

/// Locate `ephe_dir` next to the running executable (or up to a few parents).
pub fn resolve_ephemeris_dir(ephe_dir: &str) -> Result<PathBuf, ConfigError> {
    let exe = std::env::current_exe()?;
    let install_dir = exe
        .parent()
        .ok_or_else(|| ConfigError::EphemerisDirNotFound(ephe_dir.to_string()))?;
    resolve_ephemeris_dir_from(install_dir, ephe_dir)
}

/// Same as [`resolve_ephemeris_dir`] with an explicit installation directory.
pub fn resolve_ephemeris_dir_from(
    install_dir: &Path,
    ephe_dir: &str,
) -> Result<PathBuf, ConfigError> {
    let relative = Path::new(ephe_dir);
    if relative.is_absolute() {
        return Err(ConfigError::AbsoluteEphemerisPath(ephe_dir.to_string()));
    }

    install_dir
        .ancestors()
        .take(INSTALL_SEARCH_DEPTH)
        .map(|base| base.join(relative))
        .find(|candidate| candidate.is_dir())
        .ok_or_else(|| ConfigError::EphemerisDirNotFound(ephe_dir.to_string()))
}

/// One-time oracle setup. Never fails: a load error yields [`NullOracle`].
pub fn init_oracle(ephe_dir: &str) -> Arc<dyn EphemerisOracle> {
    match resolve_ephemeris_dir(ephe_dir).and_then(|dir| AnalyticEphemeris::open(&dir)) {
        Ok(ephemeris) => {
            info!(
                terms = ephemeris.lunar_terms().len(),
                "Ephemeris loaded"
            );
            Arc::new(ephemeris)
        }
        Err(e) => {
            warn!(error = %e, ephe_dir = ephe_dir, "Ephemeris unavailable - serving degraded signals");
            Arc::new(NullOracle)
        }
    }
}
