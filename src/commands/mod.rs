//! Command implementations for nregions.

pub mod extract;

pub use extract::{ExtractCommand, ExtractStats};
