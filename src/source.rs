//! Line sources: the collaborator that feeds raw lines to the readers.
//!
//! The codec itself never does I/O. A [`LineSource`] hands over one line of
//! already-decoded text at a time; [`BufLineSource`] is the shipping
//! implementation over any [`BufRead`], which covers files, stdin, and
//! in-memory cursors in tests.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Supplies one raw line of text at a time.
///
/// `line_number` is 1-based and counts lines handed out so far, including a
/// line a reader has pulled but not yet decoded. `close` releases the
/// underlying resource; it is safe to call multiple times and after partial
/// consumption, and a closed source reports end-of-input.
pub trait LineSource {
    /// The next line without its terminator, or `None` at end of input.
    fn next_line(&mut self) -> io::Result<Option<String>>;

    /// Number of lines read so far.
    fn line_number(&self) -> u64;

    /// Releases the underlying resource. Idempotent.
    fn close(&mut self) -> io::Result<()>;
}

/// [`LineSource`] over any buffered reader.
///
/// Strips a trailing `\n` or `\r\n` from each line. The text is whatever the
/// reader produced; this source reads UTF-8 and performs no transcoding.
pub struct BufLineSource<R> {
    inner: Option<R>,
    line_number: u64,
}

impl<R: BufRead> BufLineSource<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            inner: Some(reader),
            line_number: 0,
        }
    }
}

impl BufLineSource<BufReader<File>> {
    /// Opens a file as a line source.
    pub fn open(path: &Path) -> io::Result<Self> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: BufRead> LineSource for BufLineSource<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let Some(reader) = self.inner.as_mut() else {
            return Ok(None);
        };

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        self.line_number += 1;
        Ok(Some(line))
    }

    fn line_number(&self) -> u64 {
        self.line_number
    }

    fn close(&mut self) -> io::Result<()> {
        self.inner = None;
        Ok(())
    }
}
