//! Error module
//!
//! Defines the unified error type for the delimit crate using `thiserror`.
//! Decode errors, reader errors, and CLI configuration errors all share this
//! enum so that `?` composes across the codec, the readers, and the binary.

use thiserror::Error;

/// The main error type for the delimit crate.
///
/// # Error Categories
///
/// - **Configuration errors**: invalid separator/quote combinations and CLI
///   argument problems, raised before any input is consumed
/// - **Decode errors**: a single line could not be tokenized; the line is
///   unrecoverable but the reader remains usable
/// - **Reader errors**: exhausted input, missing or malformed header rows,
///   and per-row column-count mismatches
/// - **I/O errors**: failures from the underlying line source
#[derive(Error, Debug)]
pub enum DelimitError {
    /// The separator and quote characters are equal.
    ///
    /// Raised at configuration construction time; a config where the two
    /// characters collide cannot tokenize anything unambiguously.
    #[error("separator {0:?} can not equal quote")]
    SeparatorEqualsQuote(char),

    /// A quoted field was still open when the line ended.
    ///
    /// The offending line cannot be decoded. Callers may log it (see
    /// [`RecordReader::last_raw_line`](crate::reader::RecordReader::last_raw_line))
    /// and continue with the next line.
    #[error("was expecting closing {quote:?} at index {index}")]
    UnterminatedQuote {
        /// The quote character the decoder was waiting for.
        quote: char,
        /// Character index (0-based) at which end-of-line was hit.
        index: usize,
    },

    /// `next_record` was called on an exhausted reader.
    ///
    /// Expected and recoverable; callers polling `has_next` first never see it.
    #[error("there are no more lines to retrieve")]
    NoMoreInput,

    /// A keyed reader was constructed over input with no first line.
    #[error("no header")]
    MissingHeader,

    /// A header column decoded to the null sentinel instead of text.
    ///
    /// Header entries name columns and must be plain text; this is a keyed
    /// reader construction error, not a silent coercion.
    #[error("header column {index} is null, not text")]
    NullHeaderColumn {
        /// 0-based position of the offending header column.
        index: usize,
    },

    /// A data row's column count differs from the header's.
    ///
    /// Per-row and recoverable: the row is consumed, and the caller may skip
    /// it and continue reading.
    #[error("line does not have the same number of columns ({actual}) as the header ({expected})")]
    ColumnCountMismatch {
        /// Column count of the header.
        expected: usize,
        /// Column count of the offending row.
        actual: usize,
    },

    /// General I/O error from the underlying line source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error.
    ///
    /// Raised by the CLI's encode mode when an input line is not a valid
    /// JSON array of strings and nulls.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid command-line argument combination.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
