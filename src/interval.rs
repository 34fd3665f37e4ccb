//! Interval type for informative sequence regions.

use std::fmt;

/// A region of one FASTA record with chromosome, start, and end positions.
/// Uses 0-based, half-open coordinates (BED format), measured in raw
/// sequence bytes including any `N`s.
///
/// The chromosome is kept as the exact bytes of the FASTA record name, so
/// names that are not valid UTF-8 reach the BED output unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    pub chrom: Vec<u8>,
    pub start: u64,
    pub end: u64,
}

impl Interval {
    /// Create a new interval.
    #[inline]
    pub fn new(chrom: impl Into<Vec<u8>>, start: u64, end: u64) -> Self {
        Self {
            chrom: chrom.into(),
            start,
            end,
        }
    }

    /// Returns the length of the interval.
    #[inline]
    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the interval has zero length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Lossy for display only; [`BedWriter`](crate::bed::BedWriter) writes the raw bytes.
impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}",
            String::from_utf8_lossy(&self.chrom),
            self.start,
            self.end
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_len() {
        let iv = Interval::new("chr1", 4, 12);
        assert_eq!(iv.len(), 8);
        assert!(!iv.is_empty());

        let empty = Interval::new("chr1", 8, 8);
        assert_eq!(empty.len(), 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_display_is_bed3() {
        let iv = Interval::new("scaffold_7", 0, 60);
        assert_eq!(iv.to_string(), "scaffold_7\t0\t60");

        // Body lines before any header are reported under an empty name
        let unnamed = Interval::new("", 0, 4);
        assert_eq!(unnamed.to_string(), "\t0\t4");
    }

    #[test]
    fn test_chrom_bytes_preserved() {
        let iv = Interval::new(&b"chr\xff1"[..], 0, 4);
        assert_eq!(iv.chrom, b"chr\xff1");
    }
}
