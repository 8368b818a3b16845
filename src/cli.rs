//! CLI argument parsing module
//!
//! Handles command-line argument parsing using `clap` derive macros, plus the
//! cross-flag validation that runs before any I/O. All of this is
//! configuration plumbing: flags end up as a [`CsvConfig`] and a line source.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::codec::{CsvConfig, DEFAULT_QUOTE, DEFAULT_SEPARATOR};
use crate::error::DelimitError;

/// Operation mode for the delimit binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Decode delimited text to JSON lines
    Decode,
    /// Encode JSON lines to delimited text
    Encode,
    /// Validate a delimited file and print a report
    Check,
}

/// Command-line arguments for the delimit binary.
///
/// Use [`Args::validate`] after parsing to reject flag combinations clap
/// cannot express.
#[derive(Parser, Debug)]
#[command(name = "delimit")]
#[command(about = "Decode, encode, and check delimited text files")]
#[command(version)]
pub struct Args {
    /// Operation mode: decode, encode, or check
    #[arg(long, value_enum)]
    pub mode: Mode,

    /// Input file (stdin when omitted)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Field separator character
    #[arg(long, default_value_t = DEFAULT_SEPARATOR)]
    pub separator: char,

    /// Quote character
    #[arg(long, default_value_t = DEFAULT_QUOTE)]
    pub quote: char,

    /// Map the unquoted literal NULL to the null sentinel (and back)
    #[arg(long)]
    pub map_nulls: bool,

    /// Treat the first row as a header and key rows by column name
    #[arg(long)]
    pub keyed: bool,

    /// Maximum number of error samples shown by check mode
    #[arg(long, default_value = "20")]
    pub max_errors: usize,
}

impl Args {
    /// Validates flag combinations after parsing.
    pub fn validate(&self) -> Result<(), DelimitError> {
        if self.separator == self.quote {
            return Err(DelimitError::InvalidArgument(format!(
                "--separator and --quote must differ (both are {:?})",
                self.separator
            )));
        }
        if self.keyed && self.mode == Mode::Encode {
            return Err(DelimitError::InvalidArgument(
                "--keyed is not supported in encode mode; input arrays already carry their order"
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// Builds the codec configuration these arguments describe.
    pub fn csv_config(&self) -> Result<CsvConfig, DelimitError> {
        CsvConfig::new(self.separator, self.quote, self.map_nulls)
    }
}
