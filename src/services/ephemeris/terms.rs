//! Periodic terms of the lunar longitude series, loaded from the data directory.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

pub const LUNAR_TERMS_FILE: &str = "lunar_terms.json";

/// One sine term: multiples of D, M, M', F and the amplitude in 1e-6 degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarTerm {
    pub d: i32,
    pub m: i32,
    pub m_prime: i32,
    pub f: i32,
    pub amplitude: f64,
}

#[derive(Debug, Deserialize)]
struct RawTerm(i32, i32, i32, i32, f64);

#[derive(Debug, Deserialize)]
struct TermFile {
    longitude: Vec<RawTerm>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LunarTermTable {
    terms: Vec<LunarTerm>,
}

impl LunarTermTable {
    /// Read `lunar_terms.json` from `dir`.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        if !dir.is_dir() {
            return Err(ConfigError::EphemerisDirNotFound(dir.display().to_string()));
        }
        let raw = fs::read_to_string(dir.join(LUNAR_TERMS_FILE))?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let file: TermFile = serde_json::from_str(raw)?;
        let terms = file
            .longitude
            .into_iter()
            .map(|RawTerm(d, m, m_prime, f, amplitude)| LunarTerm {
                d,
                m,
                m_prime,
                f,
                amplitude,
            })
            .collect();
        Self::new(terms)
    }

    pub fn new(terms: Vec<LunarTerm>) -> Result<Self, ConfigError> {
        if terms.is_empty() {
            return Err(ConfigError::Invalid {
                message: "lunar term table is empty".to_string(),
            });
        }
        // E correction is only defined up to E^2
        if let Some(bad) = terms.iter().find(|t| t.m.abs() > 2) {
            return Err(ConfigError::Invalid {
                message: format!("solar anomaly multiple {} out of range", bad.m),
            });
        }
        if terms.iter().any(|t| !t.amplitude.is_finite()) {
            return Err(ConfigError::Invalid {
                message: "non-finite amplitude".to_string(),
            });
        }
        Ok(Self { terms })
    }

    pub fn terms(&self) -> &[LunarTerm] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
