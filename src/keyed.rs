//! Keyed reading: header-driven mapping of rows to column names.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::codec::Field;
use crate::error::DelimitError;
use crate::reader::RecordReader;
use crate::source::LineSource;

/// One data row keyed by header name.
///
/// Iteration order follows header order. A repeated header name collapses to
/// a single entry whose value is the later column's (last-write-wins); no
/// deduplication or validation is performed.
pub type RecordMap = IndexMap<String, Field>;

/// Reads a delimited stream with a header row, yielding one [`RecordMap`]
/// per data row.
///
/// Construction immediately consumes the first record as the header, which
/// becomes the fixed key set for every subsequent row. Rows whose column
/// count differs from the header's fail with
/// [`DelimitError::ColumnCountMismatch`] — surfaced to the caller, never
/// silently truncated or padded — and are consumed, so reading can continue.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use delimit::codec::{CsvConfig, Field};
/// use delimit::keyed::KeyedRecordReader;
/// use delimit::reader::RecordReader;
/// use delimit::source::BufLineSource;
///
/// let source = BufLineSource::new(Cursor::new("id,name\n1,Alice\n"));
/// let reader = RecordReader::new(CsvConfig::default(), source);
/// let mut keyed = KeyedRecordReader::new(reader).unwrap();
///
/// let row = keyed.next_map().unwrap();
/// assert_eq!(row["id"], Field::text("1"));
/// assert_eq!(row["name"], Field::text("Alice"));
/// ```
pub struct KeyedRecordReader<S> {
    reader: RecordReader<S>,
    header: Vec<String>,
}

impl<S: LineSource> KeyedRecordReader<S> {
    /// Wraps a reader and consumes its first record as the header.
    ///
    /// Fails with [`DelimitError::MissingHeader`] on empty input and with
    /// [`DelimitError::NullHeaderColumn`] when a header entry decoded to the
    /// null sentinel instead of text.
    pub fn new(mut reader: RecordReader<S>) -> Result<Self, DelimitError> {
        if !reader.has_next() {
            return Err(DelimitError::MissingHeader);
        }
        let first = reader.next_record()?;

        let mut header = Vec::with_capacity(first.len());
        for (index, field) in first.into_iter().enumerate() {
            match field {
                Field::Text(name) => header.push(name),
                Field::Null => return Err(DelimitError::NullHeaderColumn { index }),
            }
        }

        Ok(Self { reader, header })
    }

    /// The header names in column order, duplicates included.
    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// The distinct key set of the resulting maps.
    #[must_use]
    pub fn keys(&self) -> HashSet<&str> {
        self.header.iter().map(String::as_str).collect()
    }

    /// 1-based number of the last line pulled from the source.
    #[must_use]
    pub fn line_number(&self) -> u64 {
        self.reader.line_number()
    }

    /// The original text of the most recently consumed line.
    #[must_use]
    pub fn last_raw_line(&self) -> Option<&str> {
        self.reader.last_raw_line()
    }

    /// Whether another data row is available. Delegates to the wrapped
    /// reader, including its peek-failure policy.
    pub fn has_next(&mut self) -> bool {
        self.reader.has_next()
    }

    /// Reads the next data row and zips it with the header.
    pub fn next_map(&mut self) -> Result<RecordMap, DelimitError> {
        let record = self.reader.next_record()?;
        if record.len() != self.header.len() {
            return Err(DelimitError::ColumnCountMismatch {
                expected: self.header.len(),
                actual: record.len(),
            });
        }

        let mut map = RecordMap::with_capacity(self.header.len());
        for (name, field) in self.header.iter().zip(record) {
            map.insert(name.clone(), field);
        }
        Ok(map)
    }

    /// Releases the underlying line source. Idempotent.
    pub fn close(&mut self) -> Result<(), DelimitError> {
        self.reader.close()
    }
}

impl<S: LineSource> Iterator for KeyedRecordReader<S> {
    type Item = Result<RecordMap, DelimitError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.has_next() {
            Some(self.next_map())
        } else {
            None
        }
    }
}
