//! Delimited-text codec with null-aware line readers.
//!
//! The core is a character-level state machine that decodes one delimited
//! line into an ordered sequence of [`Field`]s — handling quoting, escaped
//! quotes, configurable separator/quote characters, and an optional `NULL`
//! sentinel — plus the inverse encoder with correct re-quoting. On top of it
//! sit two line-oriented readers: [`RecordReader`] for positional records
//! and [`KeyedRecordReader`] for header-keyed rows.
//!
//! ```
//! use delimit::{CsvConfig, Field};
//!
//! let config = CsvConfig::default();
//! let record = config.decode(r#"a,"b,c",d"#).unwrap();
//! assert_eq!(record[1], Field::text("b,c"));
//! assert_eq!(config.encode(&record), r#"a,"b,c",d"#);
//! ```

pub mod check;
pub mod cli;
pub mod codec;
pub mod error;
pub mod keyed;
pub mod reader;
pub mod source;

pub use codec::{CsvConfig, Field, Record, DEFAULT_QUOTE, DEFAULT_SEPARATOR, NULL_LITERAL};
pub use error::DelimitError;
pub use keyed::{KeyedRecordReader, RecordMap};
pub use reader::RecordReader;
pub use source::{BufLineSource, LineSource};
