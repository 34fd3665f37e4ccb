//! Extract command: FASTA in, BED3 of informative regions out.
//!
//! Streams the FASTA once, line by line, and writes each interval as soon
//! as the line that closes it has been read. Memory use is one line buffer
//! plus the I/O buffers, regardless of genome size.

use crate::bed::BedWriter;
use crate::config::{input_buffer_size, output_buffer_size};
use crate::error::Result;
use crate::extractor::RegionExtractor;
use crate::fasta::{FastaReader, LineEvent};
use crate::interval::Interval;
use log::{debug, info};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

/// Extract command configuration.
#[derive(Debug, Clone, Default)]
pub struct ExtractCommand {
    /// Use smaller I/O buffers
    pub low_memory: bool,
}

impl ExtractCommand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set low-memory mode (builder pattern).
    pub fn with_low_memory(mut self, low_memory: bool) -> Self {
        self.low_memory = low_memory;
        self
    }

    /// Convert a FASTA file into a BED file.
    ///
    /// Either path may be `-` for stdin/stdout. The input is opened before
    /// the output is created, so a missing input leaves the output untouched.
    pub fn run_files<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<ExtractStats> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        let input: Box<dyn Read> = if is_stdio(input_path) {
            Box::new(io::stdin().lock())
        } else {
            Box::new(File::open(input_path)?)
        };
        let output: Box<dyn Write> = if is_stdio(output_path) {
            Box::new(io::stdout().lock())
        } else {
            Box::new(File::create(output_path)?)
        };

        info!(
            "Extracting informative regions: {} -> {}",
            input_path.display(),
            output_path.display()
        );
        self.run_reader(input, output)
    }

    /// Execute on any readable source with the configured buffer size.
    pub fn run_reader<R: Read, W: Write>(&self, input: R, output: W) -> Result<ExtractStats> {
        let reader = FastaReader::with_capacity(input_buffer_size(self.low_memory), input);
        self.run_streaming(reader, output)
    }

    /// Core streaming loop.
    pub fn run_streaming<R: Read, W: Write>(
        &self,
        mut reader: FastaReader<R>,
        output: W,
    ) -> Result<ExtractStats> {
        let mut stats = ExtractStats::default();
        let mut writer = BedWriter::with_capacity(output_buffer_size(self.low_memory), output);
        let mut extractor = RegionExtractor::new();
        let mut record_intervals = 0usize;

        while let Some(event) = reader.read_event()? {
            stats.lines += 1;

            // A header ends the previous record; capture it before the reset
            let finished = match event {
                LineEvent::Header(_) => {
                    stats.records += 1;
                    Some((extractor.current_chrom().to_owned(), extractor.position()))
                }
                LineEvent::Body(line) => {
                    stats.total_bases += line.len() as u64;
                    None
                }
            };

            if let Some(interval) = extractor.push_event(event) {
                write_region(&mut writer, &interval, &mut stats)?;
                record_intervals += 1;
            }

            if let Some((chrom, length)) = finished {
                if stats.lines > 1 {
                    log_record(&chrom, length, record_intervals);
                }
                record_intervals = 0;
            }
        }

        let chrom = extractor.current_chrom().to_owned();
        let length = extractor.position();
        if let Some(interval) = extractor.finish() {
            write_region(&mut writer, &interval, &mut stats)?;
            record_intervals += 1;
        }
        if stats.lines > 0 {
            log_record(&chrom, length, record_intervals);
        }

        writer.flush()?;
        info!("{}", stats);
        Ok(stats)
    }
}

#[inline]
fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

#[inline]
fn write_region<W: Write>(
    writer: &mut BedWriter<W>,
    interval: &Interval,
    stats: &mut ExtractStats,
) -> Result<()> {
    writer.write_interval(interval)?;
    stats.intervals_written += 1;
    stats.informative_bases += interval.len();
    Ok(())
}

fn log_record(chrom: &[u8], length: u64, intervals: usize) {
    debug!(
        "Record '{}': {} bp, {} informative intervals",
        String::from_utf8_lossy(chrom),
        length,
        intervals
    );
}

/// Statistics from an extract run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExtractStats {
    /// Number of header lines seen
    pub records: usize,
    /// Number of physical lines read
    pub lines: usize,
    /// Number of BED intervals written
    pub intervals_written: usize,
    /// Bases covered by the written intervals
    pub informative_bases: u64,
    /// Bases across all body lines
    pub total_bases: u64,
}

impl ExtractStats {
    /// Fraction of sequence reported as informative.
    pub fn informative_fraction(&self) -> f64 {
        if self.total_bases == 0 {
            0.0
        } else {
            self.informative_bases as f64 / self.total_bases as f64
        }
    }
}

impl std::fmt::Display for ExtractStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Records: {}, Lines: {}, Intervals: {}, Informative: {}/{} bp ({:.2}%)",
            self.records,
            self.lines,
            self.intervals_written,
            self.informative_bases,
            self.total_bases,
            self.informative_fraction() * 100.0
        )
    }
}
