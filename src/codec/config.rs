//! Codec configuration: separator, quote, and null-mapping policy.

use crate::error::DelimitError;

/// The reserved literal standing for the null sentinel on the wire.
///
/// Only meaningful when null-mapping is enabled: an *unquoted* token equal to
/// this literal decodes to [`Field::Null`](crate::codec::Field::Null), and the
/// sentinel encodes back to it. A quoted `"NULL"` is always real text.
pub const NULL_LITERAL: &str = "NULL";

/// Default field separator.
pub const DEFAULT_SEPARATOR: char = ',';

/// Default quote character.
pub const DEFAULT_QUOTE: char = '"';

/// Configuration shared by every decode and encode call.
///
/// Immutable once built and cheap to copy; one instance is typically created
/// up front and reused for a whole stream. The only invariant is that the
/// separator and quote characters differ, enforced by [`CsvConfig::new`].
///
/// # Example
///
/// ```
/// use delimit::codec::{CsvConfig, Field};
///
/// let config = CsvConfig::new(';', '\'', false).unwrap();
/// let record = config.decode("a;'b;c'").unwrap();
/// assert_eq!(record, vec![Field::text("a"), Field::text("b;c")]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvConfig {
    separator: char,
    quote: char,
    map_nulls: bool,
}

impl CsvConfig {
    /// Creates a configuration, rejecting `separator == quote`.
    pub fn new(separator: char, quote: char, map_nulls: bool) -> Result<Self, DelimitError> {
        if separator == quote {
            return Err(DelimitError::SeparatorEqualsQuote(separator));
        }
        Ok(Self {
            separator,
            quote,
            map_nulls,
        })
    }

    /// Creates a configuration with the given separator, the default quote,
    /// and null-mapping off.
    pub fn with_separator(separator: char) -> Result<Self, DelimitError> {
        Self::new(separator, DEFAULT_QUOTE, false)
    }

    /// The field separator character.
    #[must_use]
    pub fn separator(&self) -> char {
        self.separator
    }

    /// The quote character.
    #[must_use]
    pub fn quote(&self) -> char {
        self.quote
    }

    /// Whether the `NULL` literal maps to the null sentinel.
    #[must_use]
    pub fn map_nulls(&self) -> bool {
        self.map_nulls
    }
}

impl Default for CsvConfig {
    /// Comma separator, double-quote quote, null-mapping off.
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            quote: DEFAULT_QUOTE,
            map_nulls: false,
        }
    }
}
