//! Streaming validation of delimited files.
//!
//! Walks a whole stream through a reader, counting rows that decode cleanly
//! and sampling the ones that do not, without stopping at the first bad row.
//! The keyed variant additionally enforces the header's column count.

use std::fmt;

use crate::error::DelimitError;
use crate::keyed::KeyedRecordReader;
use crate::reader::RecordReader;
use crate::source::LineSource;

/// One sampled invalid row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// 1-based line number of the offending row.
    pub line_number: u64,
    /// Rendered decode/shape error.
    pub message: String,
    /// Original text of the row, when available.
    pub raw: Option<String>,
}

/// Outcome of checking a whole stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Data rows examined (the header row is not counted in keyed mode).
    pub total_rows: u64,
    /// Rows that decoded (and, in keyed mode, matched the header width).
    pub valid_rows: u64,
    /// Rows that did not.
    pub invalid_rows: u64,
    /// Up to `max_errors` samples of invalid rows, in input order.
    pub errors: Vec<RowError>,
    /// Whether invalid rows beyond the sample cap were dropped.
    pub truncated: bool,
}

impl CheckReport {
    /// Whether every row checked out.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.invalid_rows == 0
    }

    fn record_failure(&mut self, max_errors: usize, error: RowError) {
        self.invalid_rows += 1;
        if self.errors.len() < max_errors {
            self.errors.push(error);
        } else {
            self.truncated = true;
        }
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "checked {} rows: {} valid, {} invalid",
            self.total_rows, self.valid_rows, self.invalid_rows
        )?;
        for error in &self.errors {
            write!(f, "  line {}: {}", error.line_number, error.message)?;
            if let Some(raw) = &error.raw {
                write!(f, " (raw: {raw:?})")?;
            }
            writeln!(f)?;
        }
        if self.truncated {
            writeln!(f, "  ... further errors omitted")?;
        }
        Ok(())
    }
}

/// Checks every row of an unkeyed stream.
///
/// Rows that fail to decode are counted and sampled; reading continues with
/// the next line. The reader is closed before returning.
pub fn check_records<S: LineSource>(
    mut reader: RecordReader<S>,
    max_errors: usize,
) -> Result<CheckReport, DelimitError> {
    let mut report = CheckReport::default();

    while reader.has_next() {
        report.total_rows += 1;
        match reader.next_record() {
            Ok(_) => report.valid_rows += 1,
            Err(error) => report.record_failure(
                max_errors,
                RowError {
                    line_number: reader.line_number(),
                    message: error.to_string(),
                    raw: reader.last_raw_line().map(str::to_string),
                },
            ),
        }
    }

    reader.close()?;
    Ok(report)
}

/// Checks every data row of a keyed stream against its header.
///
/// Header problems (missing header, null header column) are fatal and
/// returned as errors; per-row column-count mismatches are counted like
/// decode failures, and reading continues.
pub fn check_keyed<S: LineSource>(
    reader: RecordReader<S>,
    max_errors: usize,
) -> Result<CheckReport, DelimitError> {
    let mut keyed = KeyedRecordReader::new(reader)?;
    let mut report = CheckReport::default();

    while keyed.has_next() {
        report.total_rows += 1;
        match keyed.next_map() {
            Ok(_) => report.valid_rows += 1,
            Err(error) => report.record_failure(
                max_errors,
                RowError {
                    line_number: keyed.line_number(),
                    message: error.to_string(),
                    raw: keyed.last_raw_line().map(str::to_string),
                },
            ),
        }
    }

    keyed.close()?;
    Ok(report)
}
