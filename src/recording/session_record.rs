//! Session summary and the persisted results row.
//!
//! A summary is derived once from the answers collected during a session;
//! its `ResultRow` is what lands in the CSV results log.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};
use std::io::{self, Write};
use std::time::Duration;

/// Statistics of a finished session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub correct: usize,
    pub total: usize,
    /// Truncated percentage, 0 for a session without answers
    pub percent_correct: u32,
    pub elapsed: Duration,
    /// 0.0 when no time elapsed
    pub correct_per_minute: f64,
    pub date: NaiveDate,
}

impl SessionSummary {
    pub fn new(results: &[bool], elapsed: Duration, date: NaiveDate) -> Self {
        let correct = results.iter().filter(|&&correct| correct).count();
        let total = results.len();

        let percent_correct = if total == 0 {
            0
        } else {
            (correct * 100 / total) as u32
        };

        let minutes = elapsed.as_secs_f64() / 60.0;
        let correct_per_minute = if minutes > 0.0 {
            correct as f64 / minutes
        } else {
            0.0
        };

        Self {
            correct,
            total,
            percent_correct,
            elapsed,
            correct_per_minute,
            date,
        }
    }

    /// Print the end-of-session report
    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "\n\nRESULTS")?;
        writeln!(
            out,
            "{} / {} = {}% in {}: ",
            self.correct,
            self.total,
            self.percent_correct,
            format_elapsed(self.elapsed)
        )?;
        writeln!(out, "{:.6} problems per minute", self.correct_per_minute)?;
        out.flush()
    }

    pub fn to_row(&self, fact: String) -> ResultRow {
        ResultRow {
            date: self.date,
            fact,
            correct: self.correct,
            total: self.total,
            time: format_elapsed(self.elapsed),
            correct_per_minute: self.correct_per_minute,
        }
    }
}

/// One line of the results log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub date: NaiveDate,
    /// Single fact or space-joined list of facts
    pub fact: String,
    pub correct: usize,
    pub total: usize,
    /// Human readable session length, see `format_elapsed`
    pub time: String,
    #[serde(rename = "correct per minute", serialize_with = "six_decimals")]
    pub correct_per_minute: f64,
}

fn six_decimals<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{:.6}", value))
}

/// Compact duration such as `1h2m3.5s`, `5m0s`, `42.125s` or `350ms`.
///
/// Millisecond precision, trailing fractional zeros dropped.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_ms = elapsed.as_millis();
    if total_ms == 0 {
        return "0s".to_string();
    }
    if total_ms < 1000 {
        return format!("{}ms", total_ms);
    }

    let hours = total_ms / 3_600_000;
    let minutes = (total_ms / 60_000) % 60;
    let seconds = (total_ms / 1000) % 60;
    let millis = total_ms % 1000;

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{}h", hours));
    }
    if hours > 0 || minutes > 0 {
        out.push_str(&format!("{}m", minutes));
    }
    out.push_str(&seconds.to_string());
    if millis > 0 {
        let fraction = format!("{:03}", millis);
        out.push('.');
        out.push_str(fraction.trim_end_matches('0'));
    }
    out.push('s');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
    }

    #[test]
    fn test_summary_three_of_five() {
        let results = [true, false, true, true, false];
        let summary = SessionSummary::new(&results, Duration::from_secs(60), date());

        assert_eq!(summary.correct, 3);
        assert_eq!(summary.total, 5);
        assert_eq!(summary.percent_correct, 60);
        assert!((summary.correct_per_minute - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_percent_is_truncated() {
        let summary = SessionSummary::new(&[true, true, false], Duration::from_secs(30), date());
        assert_eq!(summary.percent_correct, 66);
        assert!((summary.correct_per_minute - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_session_reports_zero() {
        for _ in 0..3 {
            let summary = SessionSummary::new(&[], Duration::from_secs(90), date());
            assert_eq!(summary.total, 0);
            assert_eq!(summary.percent_correct, 0);
            assert_eq!(summary.correct_per_minute, 0.0);
        }

        let instant = SessionSummary::new(&[true], Duration::ZERO, date());
        assert_eq!(instant.percent_correct, 100);
        assert_eq!(instant.correct_per_minute, 0.0);
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::ZERO), "0s");
        assert_eq!(format_elapsed(Duration::from_millis(350)), "350ms");
        assert_eq!(format_elapsed(Duration::from_millis(42_125)), "42.125s");
        assert_eq!(format_elapsed(Duration::from_secs(300)), "5m0s");
        assert_eq!(format_elapsed(Duration::from_millis(60_500)), "1m0.5s");
        assert_eq!(format_elapsed(Duration::from_millis(3_723_500)), "1h2m3.5s");
        assert_eq!(format_elapsed(Duration::from_secs(3600)), "1h0m0s");
    }

    #[test]
    fn test_report() {
        let summary = SessionSummary::new(
            &[true, false, true, true, false],
            Duration::from_secs(60),
            date(),
        );
        let mut out = Vec::new();
        summary.write_report(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\n\nRESULTS\n3 / 5 = 60% in 1m0s: \n3.000000 problems per minute\n"
        );
    }

    #[test]
    fn test_to_row() {
        let summary = SessionSummary::new(&[true, true], Duration::from_secs(120), date());
        let row = summary.to_row("2 3 4".to_string());

        assert_eq!(row.date, date());
        assert_eq!(row.fact, "2 3 4");
        assert_eq!(row.correct, 2);
        assert_eq!(row.total, 2);
        assert_eq!(row.time, "2m0s");
        assert!((row.correct_per_minute - 1.0).abs() < 1e-9);
    }
}
