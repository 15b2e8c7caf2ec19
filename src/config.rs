//! Drill configuration.
//!
//! A `QuizConfig` is built once at startup and validated before any
//! concurrent work begins. The single-fact mode is a `FactSet` of length one.

use crate::{DrillError, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Session length used when none is given
pub const DEFAULT_DURATION_MINUTES: u64 = 5;

/// Results log used when none is given
pub const DEFAULT_LOG_PATH: &str = "./results.csv";

/// Highest fact drilled by default
pub const DEFAULT_HIGHEST_FACT: u32 = 12;

/// Non-empty ordered set of positive facts to drill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactSet(Vec<u32>);

impl FactSet {
    pub fn new(facts: Vec<u32>) -> Result<Self> {
        if facts.is_empty() {
            return Err(DrillError::EmptyFactSet);
        }
        if let Some(&zero) = facts.iter().find(|&&fact| fact == 0) {
            return Err(DrillError::InvalidFact(zero));
        }
        Ok(Self(facts))
    }

    /// Drill a single fact. Zero is rejected like in `new`.
    pub fn single(fact: u32) -> Result<Self> {
        Self::new(vec![fact])
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn min(&self) -> u32 {
        self.0.iter().copied().min().unwrap_or(1)
    }

    pub fn max(&self) -> u32 {
        self.0.iter().copied().max().unwrap_or(1)
    }

    /// Space-joined facts as stored in the `fact` column, e.g. `"2 3 4"`
    pub fn descriptor(&self) -> String {
        self.0
            .iter()
            .map(|fact| fact.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for FactSet {
    fn default() -> Self {
        Self((1..=DEFAULT_HIGHEST_FACT).collect())
    }
}

/// Immutable drill settings
#[derive(Debug, Clone, PartialEq)]
pub struct QuizConfig {
    pub facts: FactSet,
    pub max_multiplier: u32,
    pub duration: Duration,
    pub log_path: PathBuf,
}

impl QuizConfig {
    /// Build a validated configuration.
    ///
    /// # Errors
    ///
    /// `InvalidMaxMultiplier` when `max_multiplier` is 0 and
    /// `InvalidDuration` when `duration` is zero.
    pub fn new<P: AsRef<Path>>(
        facts: FactSet,
        max_multiplier: u32,
        duration: Duration,
        log_path: P,
    ) -> Result<Self> {
        if max_multiplier == 0 {
            return Err(DrillError::InvalidMaxMultiplier);
        }
        if duration.is_zero() {
            return Err(DrillError::InvalidDuration);
        }

        Ok(Self {
            facts,
            max_multiplier,
            duration,
            log_path: log_path.as_ref().to_path_buf(),
        })
    }

    /// Session length from a number of minutes, the unit used on the command line
    pub fn minutes(minutes: u64) -> Duration {
        Duration::from_secs(minutes.saturating_mul(60))
    }
}
