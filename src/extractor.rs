//! Region extraction: the single-pass N-line boundary detector.
//!
//! # Algorithm
//!
//! Every body line is classified as a whole:
//! 1. A line made only of uppercase `N` (or empty) is an *N-line*
//! 2. Any other line is *informative*
//!
//! A running position counts raw bytes of the current record. An
//! informative block opens at the position of its first informative line
//! and closes at the next N-line, the next header, or end of input. Each
//! closed block is reported as one half-open interval.
//!
//! Lowercase `n` is not treated as N. Soft-masked gaps (`nnnn`) are
//! reported as informative.
//!
//! # Memory Complexity
//!
//! O(1) - the state is the current record name and three scalars.

use crate::fasta::{record_name, trim_line, LineEvent};
use crate::interval::Interval;

/// Classification of a single body line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// At least one character other than uppercase `N`.
    Informative,
    /// Only uppercase `N`, or nothing at all.
    AllN,
}

/// Classify a trimmed body line.
#[inline]
pub fn classify_line(line: &[u8]) -> LineClass {
    if line.iter().all(|&b| b == b'N') {
        LineClass::AllN
    } else {
        LineClass::Informative
    }
}

/// Streaming state machine turning FASTA lines into informative intervals.
///
/// Feed lines in file order with [`push_line`](Self::push_line) or
/// [`push_event`](Self::push_event), then call [`finish`](Self::finish) to
/// flush a block still open at end of input.
#[derive(Debug, Clone, Default)]
pub struct RegionExtractor {
    current_chrom: Vec<u8>,
    position: u64,
    in_informative_block: bool,
    block_start: u64,
}

impl RegionExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one raw line (terminator optional).
    ///
    /// A line can close at most one block, so at most one interval is returned.
    #[inline]
    pub fn push_line(&mut self, line: &[u8]) -> Option<Interval> {
        let line = trim_line(line);
        if line.first() == Some(&b'>') {
            self.start_record(record_name(line))
        } else {
            self.push_body(line)
        }
    }

    /// Process one already-classified line.
    #[inline]
    pub fn push_event(&mut self, event: LineEvent<'_>) -> Option<Interval> {
        match event {
            LineEvent::Header(name) => self.start_record(name),
            LineEvent::Body(line) => self.push_body(line),
        }
    }

    /// Flush the block still open at end of input, if any.
    pub fn finish(mut self) -> Option<Interval> {
        self.close_block()
    }

    /// Name of the record currently being scanned (empty before the first header).
    #[inline]
    pub fn current_chrom(&self) -> &[u8] {
        &self.current_chrom
    }

    /// Bytes consumed so far in the current record.
    #[inline]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// True while an informative block is open.
    #[inline]
    pub fn in_informative_block(&self) -> bool {
        self.in_informative_block
    }

    fn start_record(&mut self, name: &[u8]) -> Option<Interval> {
        let closed = self.close_block();
        self.current_chrom.clear();
        self.current_chrom.extend_from_slice(name);
        self.position = 0;
        self.block_start = 0;
        closed
    }

    /// Advance over one trimmed body line.
    ///
    /// Positions are in bytes, which equals bases for ASCII sequence.
    fn push_body(&mut self, line: &[u8]) -> Option<Interval> {
        let line_start = self.position;
        let emitted = match classify_line(line) {
            LineClass::AllN => {
                let closed = self.close_block();
                self.block_start = line_start;
                closed
            }
            LineClass::Informative => {
                if !self.in_informative_block {
                    self.in_informative_block = true;
                    self.block_start = line_start;
                }
                None
            }
        };
        self.position += line.len() as u64;
        emitted
    }

    #[inline]
    fn close_block(&mut self) -> Option<Interval> {
        if !self.in_informative_block {
            return None;
        }
        self.in_informative_block = false;
        Some(emit(&self.current_chrom, self.block_start, self.position))
    }
}

/// Build the interval for a closed block.
#[inline]
fn emit(chrom: &[u8], start: u64, end: u64) -> Interval {
    debug_assert!(start <= end);
    Interval::new(chrom, start, end)
}

/// Lazy iterator of intervals over a sequence of raw lines.
pub struct Regions<I> {
    lines: I,
    extractor: Option<RegionExtractor>,
}

impl<I, L> Regions<I>
where
    I: Iterator<Item = L>,
    L: AsRef<[u8]>,
{
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            extractor: Some(RegionExtractor::new()),
        }
    }
}

impl<I, L> Iterator for Regions<I>
where
    I: Iterator<Item = L>,
    L: AsRef<[u8]>,
{
    type Item = Interval;

    fn next(&mut self) -> Option<Interval> {
        loop {
            let extractor = self.extractor.as_mut()?;
            match self.lines.next() {
                Some(line) => {
                    if let Some(interval) = extractor.push_line(line.as_ref()) {
                        return Some(interval);
                    }
                }
                None => return self.extractor.take()?.finish(),
            }
        }
    }
}

/// Extract informative intervals from raw FASTA lines.
///
/// ```
/// use nregions::extract_regions;
///
/// let fasta = ">chr1\nACGT\nNNNN\nACGT\n";
/// let regions: Vec<String> = extract_regions(fasta.lines())
///     .map(|iv| iv.to_string())
///     .collect();
/// assert_eq!(regions, ["chr1\t0\t4", "chr1\t8\t12"]);
/// ```
pub fn extract_regions<I, L>(lines: I) -> Regions<I::IntoIter>
where
    I: IntoIterator<Item = L>,
    L: AsRef<[u8]>,
{
    Regions::new(lines.into_iter())
}
