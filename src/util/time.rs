//! Millisecond timing utilities
//!
//! Each strategy is timed with a simple mark-and-elapse stopwatch; the report
//! only needs whole milliseconds.

use std::time::{Duration, Instant};

/// Millisecond-resolution stopwatch for phase timing
#[derive(Debug, Clone, Copy)]
pub struct PhaseTimer {
    mark: Instant,
}

impl PhaseTimer {
    /// Mark the start of a phase
    #[inline]
    pub fn start() -> Self {
        Self {
            mark: Instant::now(),
        }
    }

    /// Elapsed time since the mark
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.mark.elapsed()
    }

    /// Elapsed whole milliseconds since the mark
    #[inline]
    pub fn elapsed_millis(&self) -> u64 {
        self.elapsed().as_millis() as u64
    }
}

impl Default for PhaseTimer {
    fn default() -> Self {
        Self::start()
    }
}
