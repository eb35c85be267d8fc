//! Array partitioning
//!
//! Splits `[0, N)` into `T` contiguous, near-equal index ranges, one per
//! worker thread. The remainder of `N / T` is spread one element at a time
//! over the earliest divisions, so sizes never differ by more than one.

use std::ops::Range;

/// Inclusive index range assigned to one worker
///
/// When the thread count exceeds the array size, trailing divisions are empty
/// and hold `start == end + 1`; `range()` then yields an empty range so no
/// out-of-bounds read is possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Division {
    /// Division number, which is also the worker's result slot index
    pub index: usize,
    /// First array index owned by this division
    pub start: usize,
    /// Last array index owned by this division (inclusive)
    pub end: usize,
}

impl Division {
    /// Number of elements in this division
    pub fn len(&self) -> usize {
        self.end + 1 - self.start
    }

    /// Whether this division owns no elements
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Half-open view of the owned indices, suitable for slicing
    pub fn range(&self) -> Range<usize> {
        self.start..self.end + 1
    }
}

/// Split `array_size` elements into `thread_count` contiguous divisions
///
/// The caller validates `array_size >= 1` and `thread_count >= 1`; with those
/// bounds every empty division starts at or past index 1, so the inclusive
/// `end` never underflows.
pub fn partition(array_size: usize, thread_count: usize) -> Vec<Division> {
    debug_assert!(array_size >= 1);
    debug_assert!(thread_count >= 1);

    let base = array_size / thread_count;
    let remainder = array_size % thread_count;

    let mut divisions = Vec::with_capacity(thread_count);
    let mut start = 0;
    for index in 0..thread_count {
        let len = base + usize::from(index < remainder);
        divisions.push(Division {
            index,
            start,
            end: start + len - 1,
        });
        start += len;
    }

    divisions
}
