//! Configuration module
//!
//! Handles CLI argument parsing and validation.

pub mod cli;
pub mod cli_convert;

/// Upper bound on the array size accepted from the command line
///
/// Validation rule only; the array itself is sized dynamically.
pub const MAX_ARRAY_SIZE: usize = 100_000_000;

/// Upper bound on the worker thread count
pub const MAX_THREADS: usize = 16;

/// Resolved run configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Number of elements in the input array
    pub array_size: usize,
    /// Number of worker threads (and divisions) per concurrent phase
    pub thread_count: usize,
    /// Index forced to zero in the generated array, if any
    pub zero_index: Option<usize>,
}
