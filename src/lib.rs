//! nregions: informative regions of a FASTA file as BED
//!
//! Scans a FASTA file once and reports, per record, the runs of lines that
//! are not made entirely of `N`. Assembly gaps padded with whole lines of
//! `N` fall between the reported intervals; short N runs inside a line do
//! not split a region.
//!
//! # Example
//!
//! ```rust,no_run
//! use nregions::commands::ExtractCommand;
//!
//! let stats = ExtractCommand::new()
//!     .run_files("genome.fa", "informative.bed")
//!     .unwrap();
//! eprintln!("{}", stats);
//! ```
//!
//! Only uppercase `N` marks a gap line. Soft-masked `n` is treated as
//! sequence.

pub mod bed;
pub mod commands;
pub mod config;
pub mod error;
pub mod extractor;
pub mod fasta;
pub mod interval;

// Re-export commonly used types
pub use bed::BedWriter;
pub use error::{Error, Result};
pub use extractor::{classify_line, extract_regions, LineClass, RegionExtractor, Regions};
pub use fasta::{FastaReader, LineEvent};
pub use interval::Interval;
