//! # Math Facts Drill Library
//!
//! Timed multiplication drills for the terminal, with every session appended
//! to a CSV results log.
//!
//! ## Features
//!
//! - **Quiz**: question generation, interactive answer reading and scoring
//! - **Session**: deadline and signal driven controller collecting answers
//! - **Recording**: session summary and the append-only results log
//!
//! ## Usage
//!
//! ```rust,no_run
//! use math_facts::{config::{FactSet, QuizConfig}, quiz::QuestionGenerator};
//! use std::time::Duration;
//!
//! let config = QuizConfig::new(
//!     FactSet::single(7).unwrap(),
//!     10,
//!     Duration::from_secs(60),
//!     "./results.csv",
//! )
//! .unwrap();
//! let mut generator = QuestionGenerator::new(&config, rand::rng());
//! println!("{}", generator.next_question());
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Drill configuration and validation
pub mod config;

/// Question generation, console I/O and the quiz worker loop
pub mod quiz;

/// Session controller and lifecycle signals
pub mod session;

/// Session summary and the CSV results log
pub mod recording;

/// Logger setup
pub mod logging;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use config::{FactSet, QuizConfig};
pub use quiz::{Console, Question, QuestionGenerator};
pub use recording::{CsvWriter, ResultRow, SessionSummary};
pub use session::{run_session, Interruption, SessionEnd, ShutdownSignals};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the drill library
#[derive(Debug, thiserror::Error)]
pub enum DrillError {
    #[error("max must be greater than 0")]
    InvalidMaxMultiplier,

    #[error("duration must be greater than 0")]
    InvalidDuration,

    #[error("at least one fact is required")]
    EmptyFactSet,

    #[error("{0} is not a valid fact, facts must be greater than 0")]
    InvalidFact(u32),

    #[error("results log {path}: {source}")]
    ResultsLog {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("results log {path}: unexpected header {found:?}")]
    UnexpectedHeader { path: String, found: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DrillError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
