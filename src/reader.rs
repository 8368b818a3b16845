//! Record reading: couples a line source with the codec.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::codec::{CsvConfig, Record};
use crate::error::DelimitError;
use crate::source::{BufLineSource, LineSource};

/// Reads one decoded record per line from a [`LineSource`].
///
/// The reader buffers at most one raw line so that [`has_next`] can peek
/// without consuming, keeps the most recently consumed line for diagnostics,
/// and delegates line counting to the source. It owns the source and releases
/// it through [`close`], which is safe to call repeatedly and after partial
/// consumption.
///
/// Not safe for concurrent use: the buffered line, last-raw-line, and line
/// counter are mutable cursor state for a single consumer.
///
/// # I/O error policy
///
/// [`has_next`] and [`next_record`] treat source failures differently, on
/// purpose. A failure while *peeking* is logged and reported as "no more
/// input", so a `while reader.has_next()` loop never panics or lies mid-poll;
/// a failure during an explicit [`next_record`] propagates, so a mandatory
/// read never fakes success. Callers that must distinguish real end-of-input
/// from a swallowed peek failure should call [`next_record`] directly.
///
/// [`has_next`]: RecordReader::has_next
/// [`next_record`]: RecordReader::next_record
/// [`close`]: RecordReader::close
pub struct RecordReader<S> {
    config: CsvConfig,
    source: S,
    buffered: Option<String>,
    last_raw: Option<String>,
}

impl RecordReader<BufLineSource<BufReader<File>>> {
    /// Opens a file-backed reader.
    pub fn open(config: CsvConfig, path: &Path) -> Result<Self, DelimitError> {
        Ok(Self::new(config, BufLineSource::open(path)?))
    }
}

impl<S: LineSource> RecordReader<S> {
    /// Creates a reader over an already-open line source.
    pub fn new(config: CsvConfig, source: S) -> Self {
        Self {
            config,
            source,
            buffered: None,
            last_raw: None,
        }
    }

    /// The codec configuration this reader decodes with.
    #[must_use]
    pub fn config(&self) -> &CsvConfig {
        &self.config
    }

    /// 1-based number of the last line pulled from the source.
    ///
    /// A line buffered by [`has_next`](RecordReader::has_next) counts as
    /// pulled even before [`next_record`](RecordReader::next_record) decodes
    /// it.
    #[must_use]
    pub fn line_number(&self) -> u64 {
        self.source.line_number()
    }

    /// The original text of the most recently consumed line.
    ///
    /// Useful after a decode failure, when the record itself never
    /// materialized.
    #[must_use]
    pub fn last_raw_line(&self) -> Option<&str> {
        self.last_raw.as_deref()
    }

    /// Whether another line is available, buffering it if needed.
    ///
    /// An I/O failure while peeking is logged and treated as end of input.
    pub fn has_next(&mut self) -> bool {
        if self.buffered.is_none() {
            match self.source.next_line() {
                Ok(line) => self.buffered = line,
                Err(error) => {
                    tracing::error!(
                        line_number = self.source.line_number(),
                        %error,
                        "I/O error while peeking for the next line; treating input as exhausted"
                    );
                }
            }
        }
        self.buffered.is_some()
    }

    /// Decodes and returns the next record.
    ///
    /// Fails with [`DelimitError::NoMoreInput`] when the input is exhausted
    /// and propagates source I/O errors. A decode failure consumes the bad
    /// line — it is recorded as the last raw line, not retried — and the
    /// error propagates so the caller can decide whether to continue.
    pub fn next_record(&mut self) -> Result<Record, DelimitError> {
        if self.buffered.is_none() {
            self.buffered = self.source.next_line()?;
        }
        let line = self.buffered.take().ok_or(DelimitError::NoMoreInput)?;

        let decoded = self.config.decode(&line);
        if let Err(error) = &decoded {
            tracing::error!(
                line_number = self.source.line_number(),
                raw = %line,
                %error,
                "failed to decode line"
            );
        }
        self.last_raw = Some(line);
        decoded
    }

    /// Releases the underlying line source. Idempotent.
    pub fn close(&mut self) -> Result<(), DelimitError> {
        self.source.close()?;
        Ok(())
    }
}

impl<S: LineSource> Iterator for RecordReader<S> {
    type Item = Result<Record, DelimitError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.has_next() {
            Some(self.next_record())
        } else {
            None
        }
    }
}
