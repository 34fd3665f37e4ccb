//! Buffer sizing for FASTA input and BED output.
//!
//! A FASTA scan touches every byte once, so throughput is dominated by
//! read/write syscalls. The defaults favour throughput; `low_memory`
//! shrinks both buffers for constrained environments.

/// Default input buffer size (256 KB).
pub const DEFAULT_INPUT_BUFFER: usize = 256 * 1024;

/// Low-memory input buffer size (64 KB).
pub const LOW_MEMORY_INPUT_BUFFER: usize = 64 * 1024;

/// Default output buffer size (1 MB).
/// BED output is tiny relative to the FASTA, so this rarely fills.
pub const DEFAULT_OUTPUT_BUFFER: usize = 1024 * 1024;

/// Low-memory output buffer size (64 KB).
pub const LOW_MEMORY_OUTPUT_BUFFER: usize = 64 * 1024;

/// Default line buffer capacity.
/// Wrapped FASTA lines are 60-80 bases; unwrapped records grow the buffer as needed.
pub const DEFAULT_LINE_BUFFER: usize = 1024;

/// Returns the appropriate input buffer size based on low_memory flag.
#[inline]
pub const fn input_buffer_size(low_memory: bool) -> usize {
    if low_memory {
        LOW_MEMORY_INPUT_BUFFER
    } else {
        DEFAULT_INPUT_BUFFER
    }
}

/// Returns the appropriate output buffer size based on low_memory flag.
#[inline]
pub const fn output_buffer_size(low_memory: bool) -> usize {
    if low_memory {
        LOW_MEMORY_OUTPUT_BUFFER
    } else {
        DEFAULT_OUTPUT_BUFFER
    }
}
