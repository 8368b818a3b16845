//! delimit - decode, encode, and check delimited text files
//!
//! The binary wires CLI flags into a [`CsvConfig`] and a line source, then
//! dispatches to one of three modes:
//! - **decode**: delimited text in, one JSON value per line out
//! - **encode**: JSON arrays in, one delimited line each out
//! - **check**: validate a file, print a report, fail on invalid rows
//!
//! # Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Success |
//! | 1 | Configuration/argument error |
//! | 3 | File I/O error or check failure |
//! | 4 | Runtime (data) error |

use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use delimit::check::{check_keyed, check_records};
use delimit::cli::{Args, Mode};
use delimit::codec::{CsvConfig, Record};
use delimit::error::DelimitError;
use delimit::keyed::KeyedRecordReader;
use delimit::reader::RecordReader;
use delimit::source::{BufLineSource, LineSource};

/// Exit code for success
const EXIT_SUCCESS: u8 = 0;
/// Exit code for configuration/argument errors
const EXIT_CONFIG_ERROR: u8 = 1;
/// Exit code for file I/O errors
const EXIT_IO_ERROR: u8 = 3;
/// Exit code for check failure (same as I/O error)
const EXIT_CHECK_FAILURE: u8 = 3;
/// Exit code for runtime (data) errors
const EXIT_RUNTIME_ERROR: u8 = 4;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    if let Err(e) = args.validate() {
        eprintln!("Error: {e}");
        eprintln!("  Hint: use --help for usage information");
        return ExitCode::from(EXIT_CONFIG_ERROR);
    }

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(error_exit_code(&e))
        }
    }
}

fn run(args: &Args) -> Result<ExitCode, DelimitError> {
    let config = args.csv_config()?;
    match args.mode {
        Mode::Decode => run_decode(config, args),
        Mode::Encode => run_encode(config, args),
        Mode::Check => run_check(config, args),
    }
}

/// Maps an error to the documented exit codes.
fn error_exit_code(error: &DelimitError) -> u8 {
    match error {
        DelimitError::Io(_) => EXIT_IO_ERROR,
        DelimitError::InvalidArgument(_) | DelimitError::SeparatorEqualsQuote(_) => {
            EXIT_CONFIG_ERROR
        }
        _ => EXIT_RUNTIME_ERROR,
    }
}

/// The input file, or stdin when no file was given.
fn open_input(args: &Args) -> Result<BufLineSource<Box<dyn BufRead>>, DelimitError> {
    let reader: Box<dyn BufRead> = match &args.file {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };
    Ok(BufLineSource::new(reader))
}

/// The output file, or stdout when no file was given.
fn open_output(args: &Args) -> Result<Box<dyn Write>, DelimitError> {
    Ok(match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    })
}

/// Decode mode: one JSON value per input line.
///
/// Strict: the first decode failure aborts. Lenient scanning is what check
/// mode is for.
fn run_decode(config: CsvConfig, args: &Args) -> Result<ExitCode, DelimitError> {
    let reader = RecordReader::new(config, open_input(args)?);
    let mut out = open_output(args)?;

    if args.keyed {
        let mut keyed = KeyedRecordReader::new(reader)?;
        while keyed.has_next() {
            let map = keyed.next_map()?;
            serde_json::to_writer(&mut out, &map)?;
            out.write_all(b"\n")?;
        }
        keyed.close()?;
    } else {
        let mut reader = reader;
        while reader.has_next() {
            let record = reader.next_record()?;
            serde_json::to_writer(&mut out, &record)?;
            out.write_all(b"\n")?;
        }
        reader.close()?;
    }

    out.flush()?;
    Ok(ExitCode::from(EXIT_SUCCESS))
}

/// Encode mode: each input line is a JSON array of strings and nulls.
fn run_encode(config: CsvConfig, args: &Args) -> Result<ExitCode, DelimitError> {
    let mut source = open_input(args)?;
    let mut out = open_output(args)?;

    while let Some(line) = source.next_line()? {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Record = serde_json::from_str(&line)?;
        writeln!(out, "{}", config.encode(&fields))?;
    }

    source.close()?;
    out.flush()?;
    Ok(ExitCode::from(EXIT_SUCCESS))
}

/// Check mode: lenient full-file validation with a printed report.
fn run_check(config: CsvConfig, args: &Args) -> Result<ExitCode, DelimitError> {
    let reader = RecordReader::new(config, open_input(args)?);
    let report = if args.keyed {
        check_keyed(reader, args.max_errors)?
    } else {
        check_records(reader, args.max_errors)?
    };

    print!("{report}");
    if report.is_ok() {
        Ok(ExitCode::from(EXIT_SUCCESS))
    } else {
        Ok(ExitCode::from(EXIT_CHECK_FAILURE))
    }
}
