//! Error types for nregions.

use std::io;
use thiserror::Error;

/// Errors that can occur while converting FASTA to BED.
///
/// Region extraction itself never fails; the only failures come from
/// opening, reading or writing files.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
