//! Delimited-text codec
//!
//! Stateless per call: one [`CsvConfig`] can be shared read-only across
//! threads and drives both [`decode`](CsvConfig::decode) and
//! [`encode`](CsvConfig::encode).

pub mod config;
pub mod field;

mod decode;
mod encode;

pub use config::{CsvConfig, DEFAULT_QUOTE, DEFAULT_SEPARATOR, NULL_LITERAL};
pub use field::{Field, Record};
