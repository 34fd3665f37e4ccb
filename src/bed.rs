//! BED3 output.
//!
//! Uses itoa for integer formatting to avoid allocation per interval.

use crate::config::DEFAULT_OUTPUT_BUFFER;
use crate::error::Result;
use crate::interval::Interval;
use std::io::{BufWriter, Write};

/// Buffered BED3 writer.
pub struct BedWriter<W: Write> {
    writer: BufWriter<W>,
    itoa_buf: itoa::Buffer,
}

impl<W: Write> BedWriter<W> {
    /// Create a new BedWriter with the default output buffer.
    pub fn new(output: W) -> Self {
        Self::with_capacity(DEFAULT_OUTPUT_BUFFER, output)
    }

    /// Create a new BedWriter with specified buffer size.
    pub fn with_capacity(capacity: usize, output: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(capacity, output),
            itoa_buf: itoa::Buffer::new(),
        }
    }

    /// Write a BED3 record (chrom, start, end) followed by newline.
    #[inline]
    pub fn write_bed3_line(&mut self, chrom: &[u8], start: u64, end: u64) -> Result<()> {
        self.writer.write_all(chrom)?;
        self.writer.write_all(b"\t")?;
        self.writer.write_all(self.itoa_buf.format(start).as_bytes())?;
        self.writer.write_all(b"\t")?;
        self.writer.write_all(self.itoa_buf.format(end).as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    /// Write an interval as a BED3 line.
    #[inline]
    pub fn write_interval(&mut self, interval: &Interval) -> Result<()> {
        self.write_bed3_line(&interval.chrom, interval.start, interval.end)
    }

    /// Flush the output buffer.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_bed3() {
        let mut output = Vec::new();
        {
            let mut writer = BedWriter::new(&mut output);
            writer.write_bed3_line(b"chr1", 100, 200).unwrap();
            writer.flush().unwrap();
        }
        assert_eq!(output, b"chr1\t100\t200\n");
    }

    fn write_bed(intervals: &[Interval]) -> Vec<u8> {
        let mut output = Vec::new();
        {
            let mut writer = BedWriter::new(&mut output);
            for interval in intervals {
                writer.write_interval(interval).unwrap();
            }
            writer.flush().unwrap();
        }
        output
    }

    #[test]
    fn test_write_intervals() {
        let output = write_bed(&[Interval::new("chr1", 0, 4), Interval::new("chr1", 8, 12)]);
        assert_eq!(output, b"chr1\t0\t4\nchr1\t8\t12\n");
    }

    #[test]
    fn test_empty_chrom_name() {
        assert_eq!(write_bed(&[Interval::new("", 0, 4)]), b"\t0\t4\n");
    }

    #[test]
    fn test_chrom_bytes_written_verbatim() {
        let output = write_bed(&[Interval::new(&b"chr\xff1"[..], 0, 4)]);
        assert_eq!(output, b"chr\xff1\t0\t4\n");
    }

    #[test]
    fn test_small_buffer_flushes() {
        let mut output = Vec::new();
        {
            let mut writer = BedWriter::with_capacity(4, &mut output);
            for i in 0..100u64 {
                writer.write_bed3_line(b"scaffold_1", i * 10, i * 10 + 5).unwrap();
            }
            writer.flush().unwrap();
        }
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.lines().count(), 100);
        assert_eq!(text.lines().last(), Some("scaffold_1\t990\t995"));
    }
}
