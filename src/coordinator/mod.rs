//! Completion coordinators
//!
//! The three concurrent strategies compute the same partitioned modular
//! product and differ only in how the parent learns that every worker has
//! finished:
//!
//! - **Join**: block on each worker handle in launch order
//! - **Poll**: round-robin scan with blocking per-worker waits and idempotent
//!   completion marking
//! - **Semaphore**: workers count themselves in under a mutex; the last one
//!   fans out a counting-semaphore release that unblocks the parent
//!
//! All strategies share a [`PhaseContext`]: the read-only array, the division
//! table, and one result slot per division. Shared state is reset before each
//! phase; workers are created fresh per phase and never reused.

pub mod semaphore;

use self::semaphore::Semaphore;
use crate::partition::Division;
use crate::reduce;
use crate::Result;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

/// Completion-detection strategy for one phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Single-threaded baseline, no coordination
    Sequential,
    /// Parent blocks on every worker handle in launch order
    Join,
    /// Parent repeatedly scans the worker list, joining stragglers
    Poll,
    /// Last-finishing worker releases the parent via a counting semaphore
    Semaphore,
}

impl Strategy {
    /// Report order: sequential baseline first, then the concurrent variants
    pub const ALL: [Strategy; 4] = [
        Strategy::Sequential,
        Strategy::Join,
        Strategy::Poll,
        Strategy::Semaphore,
    ];
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strategy::Sequential => "Sequential multiplication",
            Strategy::Join => "Threaded multiplication with parent waiting for all children",
            Strategy::Poll => {
                "Threaded multiplication with parent continually checking on children"
            }
            Strategy::Semaphore => "Threaded multiplication with parent waiting on a semaphore",
        };
        f.write_str(label)
    }
}

/// Shared state for one coordination phase
///
/// Owned by the phase driver and passed to workers by `Arc`. The array is
/// read-only during concurrent phases; each worker writes exactly one result
/// slot, and the parent reads a slot only after that worker is known to have
/// finished.
pub struct PhaseContext {
    data: Arc<Vec<u32>>,
    divisions: Vec<Division>,
    results: Arc<Vec<AtomicU64>>,
}

impl PhaseContext {
    /// Create a context for the given array and division table
    ///
    /// The array and divisions are built once and reused across all four
    /// strategies; only the result slots and completion state are per-phase.
    pub fn new(data: Arc<Vec<u32>>, divisions: Vec<Division>) -> Self {
        let results = Arc::new(
            (0..divisions.len())
                .map(|_| AtomicU64::new(1))
                .collect::<Vec<_>>(),
        );
        Self {
            data,
            divisions,
            results,
        }
    }

    /// Number of workers (one per division)
    pub fn thread_count(&self) -> usize {
        self.divisions.len()
    }

    /// Run one phase under the given strategy and return its product
    pub fn run(&self, strategy: Strategy) -> Result<u64> {
        match strategy {
            Strategy::Sequential => Ok(self.run_sequential()),
            Strategy::Join => self.run_join(),
            Strategy::Poll => self.run_poll(),
            Strategy::Semaphore => self.run_semaphore(),
        }
    }

    /// Single-threaded baseline over the whole array
    pub fn run_sequential(&self) -> u64 {
        reduce::sequential_product(&self.data)
    }

    /// Join-based coordination: wait on each worker handle in launch order
    ///
    /// Each join is a blocking wait that returns only once that specific
    /// worker has terminated; the join itself synchronizes the worker's result
    /// store with the parent's later read.
    pub fn run_join(&self) -> Result<u64> {
        self.reset();
        let handles = self.spawn_workers();

        for handle in handles {
            handle
                .join()
                .map_err(|_| anyhow::anyhow!("Worker thread panicked"))?;
        }

        Ok(self.total_product())
    }

    /// Poll-based coordination: round-robin scan with blocking inner waits
    ///
    /// The outer loop re-evaluates the completion count until it reaches the
    /// worker total; the inner scan performs a real blocking join on each
    /// worker not yet marked done. Taking the handle out of its slot makes the
    /// completion marking idempotent, so a worker can never be joined twice.
    /// The flags and count live on the parent's stack and need no locking.
    pub fn run_poll(&self) -> Result<u64> {
        self.reset();
        let mut handles: Vec<Option<thread::JoinHandle<()>>> =
            self.spawn_workers().into_iter().map(Some).collect();

        let mut done = vec![false; handles.len()];
        let mut done_count = 0;

        while done_count < handles.len() {
            for slot in 0..handles.len() {
                if done[slot] {
                    continue;
                }
                if let Some(handle) = handles[slot].take() {
                    handle
                        .join()
                        .map_err(|_| anyhow::anyhow!("Worker thread panicked"))?;
                    done[slot] = true;
                    done_count += 1;
                }
            }
        }

        Ok(self.total_product())
    }

    /// Semaphore-based coordination: the last worker releases the parent
    ///
    /// Workers publish their result and increment the shared completion
    /// counter under one mutex; the worker that brings the counter to the
    /// thread total deposits one permit per worker while still holding the
    /// mutex. Holding the mutex across the decision and the fan-out means
    /// exactly one worker can ever observe the terminal count, so a double or
    /// missed fan-out is impossible. The parent acquires one permit per worker
    /// and only then reads the result slots: every store happened before the
    /// final permit was deposited.
    pub fn run_semaphore(&self) -> Result<u64> {
        self.reset();
        let thread_count = self.thread_count();
        let completed = Arc::new(Semaphore::new(0));
        let done_count = Arc::new(Mutex::new(0usize));

        let mut handles = Vec::with_capacity(thread_count);
        for &division in &self.divisions {
            let data = Arc::clone(&self.data);
            let results = Arc::clone(&self.results);
            let completed = Arc::clone(&completed);
            let done_count = Arc::clone(&done_count);

            handles.push(thread::spawn(move || {
                let product = reduce::modular_product(&data[division.range()]);

                let mut count = done_count.lock().expect("completion counter poisoned");
                results[division.index].store(product, Ordering::Release);
                *count += 1;
                if *count == thread_count {
                    completed.release_n(thread_count);
                }
            }));
        }

        for _ in 0..thread_count {
            completed.acquire();
        }
        let product = self.total_product();

        // The product is already final once the parent is released; the
        // handles still need reaping so no phase leaks threads.
        for handle in handles {
            handle
                .join()
                .map_err(|_| anyhow::anyhow!("Worker thread panicked"))?;
        }

        Ok(product)
    }

    /// Reset per-division result slots to the multiplicative identity
    ///
    /// Runs before every concurrent phase so a prior phase's products are
    /// never carried over.
    fn reset(&self) {
        for slot in self.results.iter() {
            slot.store(1, Ordering::Relaxed);
        }
    }

    /// Spawn one worker per division running the division reducer
    ///
    /// The worker body is identical for the join and poll strategies: compute
    /// the division's modular product and publish it into the owned slot.
    fn spawn_workers(&self) -> Vec<thread::JoinHandle<()>> {
        self.divisions
            .iter()
            .map(|&division| {
                let data = Arc::clone(&self.data);
                let results = Arc::clone(&self.results);
                thread::spawn(move || {
                    let product = reduce::modular_product(&data[division.range()]);
                    results[division.index].store(product, Ordering::Release);
                })
            })
            .collect()
    }

    /// Combine the per-division products in division-index order
    fn total_product(&self) -> u64 {
        let products: Vec<u64> = self
            .results
            .iter()
            .map(|slot| slot.load(Ordering::Acquire))
            .collect();
        reduce::combine(&products)
    }
}
