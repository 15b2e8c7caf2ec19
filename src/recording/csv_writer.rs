//! CSV writer for the results log.
//!
//! One row per session, appended to a file that is kept across runs.
//! Format: date,fact,correct,total,time,correct per minute

use crate::recording::session_record::ResultRow;
use crate::{DrillError, Result};
use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

const COLUMNS: [&str; 6] = [
    "date",
    "fact",
    "correct",
    "total",
    "time",
    "correct per minute",
];

/// Append-only writer for the results log
#[derive(Debug, Clone)]
pub struct CsvWriter {
    path: PathBuf,
}

impl CsvWriter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every row of the log. A missing or blank file has no rows.
    pub fn load_rows(&self) -> Result<Vec<ResultRow>> {
        match self.read_existing()? {
            Some(contents) if !is_blank(&contents) => self.parse_rows(&contents),
            _ => Ok(Vec::new()),
        }
    }

    /// Append one row, writing the header first when the log has none.
    ///
    /// The existing content is parsed before anything is written, so a
    /// corrupt log is reported instead of being extended. A log holding only
    /// whitespace has no header record and is started over.
    pub fn append(&self, row: &ResultRow) -> Result<()> {
        let existing = self
            .read_existing()?
            .filter(|contents| !is_blank(contents));
        if let Some(contents) = &existing {
            self.parse_rows(contents)?;
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let write_header = existing.is_none();
        let missing_newline = existing
            .as_ref()
            .is_some_and(|contents| !contents.ends_with(b"\n"));

        let file = if write_header {
            OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&self.path)?
        } else {
            OpenOptions::new().append(true).open(&self.path)?
        };
        let mut out = BufWriter::new(file);

        if missing_newline {
            out.write_all(b"\n")?;
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(write_header)
            .from_writer(out);
        writer.serialize(row).map_err(|e| self.log_error(e))?;
        writer.flush()?;

        log::info!(
            "Appended session {} ({}/{}) to {}",
            row.date,
            row.correct,
            row.total,
            self.path.display()
        );
        Ok(())
    }

    fn read_existing(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Parse a non-blank log. Its first record must be the expected header.
    fn parse_rows(&self, contents: &[u8]) -> Result<Vec<ResultRow>> {
        let mut reader = csv::Reader::from_reader(contents);
        let headers = reader.headers().map_err(|e| self.log_error(e))?;
        if !headers.iter().eq(COLUMNS) {
            return Err(DrillError::UnexpectedHeader {
                path: self.path.display().to_string(),
                found: headers.iter().collect::<Vec<_>>().join(","),
            });
        }

        reader
            .deserialize::<ResultRow>()
            .map(|row| row.map_err(|e| self.log_error(e)))
            .collect()
    }

    fn log_error(&self, source: csv::Error) -> DrillError {
        DrillError::ResultsLog {
            path: self.path.display().to_string(),
            source,
        }
    }
}

fn is_blank(contents: &[u8]) -> bool {
    contents.iter().all(u8::is_ascii_whitespace)
}
