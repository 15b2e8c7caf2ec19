//! Session recording.
//!
//! Everything that happens once a session is over: the summary shown to
//! the user and the row appended to the results log.
//!
//! # Components
//!
//! - `session_record`: summary statistics and the persisted row
//! - `csv_writer`: append-only CSV results log
//! - `session_recorder`: finalization of a session

pub mod csv_writer;
pub mod session_record;
pub mod session_recorder;

pub use csv_writer::CsvWriter;
pub use session_record::{format_elapsed, ResultRow, SessionSummary};
pub use session_recorder::finalize;
