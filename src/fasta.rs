//! Streaming FASTA line reader.
//!
//! The reader does not parse records; it hands out one physical line at a
//! time, already classified as header or body, so that region extraction can
//! run in a single pass with a single reusable line buffer.

use crate::config::{DEFAULT_INPUT_BUFFER, DEFAULT_LINE_BUFFER};
use crate::error::Result;
use std::io::{BufRead, BufReader, Read};

/// One physical line of a FASTA file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEvent<'a> {
    /// A `>` line, carrying the record name.
    Header(&'a [u8]),
    /// A sequence line with trailing whitespace removed. May be empty.
    Body(&'a [u8]),
}

impl<'a> LineEvent<'a> {
    /// Classify a raw line, trimming trailing whitespace and the line terminator.
    #[inline]
    pub fn from_line(line: &'a [u8]) -> Self {
        let line = trim_line(line);
        if line.first() == Some(&b'>') {
            LineEvent::Header(record_name(line))
        } else {
            LineEvent::Body(line)
        }
    }
}

/// Strip trailing whitespace, including `\n` and `\r\n` terminators.
#[inline]
pub fn trim_line(line: &[u8]) -> &[u8] {
    line.trim_ascii_end()
}

/// Extract the record name from a header line.
///
/// The name is everything before the first whitespace, minus the leading
/// `>`. A header such as `"> chr1"` therefore has an empty name.
#[inline]
pub fn record_name(header: &[u8]) -> &[u8] {
    let token_end = header
        .iter()
        .position(u8::is_ascii_whitespace)
        .unwrap_or(header.len());
    let token = &header[..token_end];
    token.strip_prefix(b">").unwrap_or(token)
}

/// A streaming FASTA reader yielding one line event at a time.
pub struct FastaReader<R: Read> {
    reader: BufReader<R>,
    buffer: Vec<u8>,
}

impl<R: Read> FastaReader<R> {
    /// Create a new FASTA reader from any readable source.
    pub fn new(reader: R) -> Self {
        Self::with_capacity(DEFAULT_INPUT_BUFFER, reader)
    }

    /// Create a FASTA reader with custom buffer capacity.
    pub fn with_capacity(capacity: usize, reader: R) -> Self {
        Self {
            reader: BufReader::with_capacity(capacity, reader),
            buffer: Vec::with_capacity(DEFAULT_LINE_BUFFER),
        }
    }

    /// Read the next raw line, terminator included.
    ///
    /// Returns `None` at end of input. The slice borrows the reader's
    /// internal buffer and is overwritten by the next call.
    pub fn read_line(&mut self) -> Result<Option<&[u8]>> {
        self.buffer.clear();
        let bytes_read = self.reader.read_until(b'\n', &mut self.buffer)?;
        if bytes_read == 0 {
            return Ok(None);
        }
        Ok(Some(&self.buffer))
    }

    /// Read and classify the next line.
    pub fn read_event(&mut self) -> Result<Option<LineEvent<'_>>> {
        Ok(self.read_line()?.map(LineEvent::from_line))
    }
}
