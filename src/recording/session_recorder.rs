use crate::config::QuizConfig;
use crate::recording::csv_writer::CsvWriter;
use crate::recording::session_record::SessionSummary;
use crate::Result;
use chrono::NaiveDate;
use std::io::Write;
use std::time::Duration;

/// Summarize a finished session, print the report and append it to the results log.
///
/// Runs once per session. Any failure to write the log is returned to the
/// caller, which aborts the program.
pub fn finalize<W: Write>(
    out: &mut W,
    results: &[bool],
    config: &QuizConfig,
    elapsed: Duration,
    date: NaiveDate,
) -> Result<SessionSummary> {
    let summary = SessionSummary::new(results, elapsed, date);
    summary.write_report(out)?;

    let row = summary.to_row(config.facts.descriptor());
    CsvWriter::new(&config.log_path).append(&row)?;

    log::info!(
        "Session finalized: {}/{} correct ({}%), {:.2} per minute",
        summary.correct,
        summary.total,
        summary.percent_correct,
        summary.correct_per_minute
    );
    Ok(summary)
}
