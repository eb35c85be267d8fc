//! ModPulse - thread coordination benchmark
//!
//! ModPulse computes the modular product of a large integer array four times:
//! once sequentially and three times concurrently, with each concurrent run
//! using a different discipline for detecting that all worker threads have
//! finished.
//!
//! # Architecture
//!
//! - **Partitioner**: splits the array into contiguous, near-equal divisions
//! - **Reducers**: per-division and sequential modular products
//! - **Completion coordinators**: blocking join, round-robin polling, and
//!   semaphore fan-out by the last-finishing worker
//! - **Report**: elapsed milliseconds and product per strategy on stdout

pub mod config;
pub mod coordinator;
pub mod input;
pub mod partition;
pub mod reduce;
pub mod util;

// Re-export commonly used types
pub use config::Config;
pub use coordinator::{PhaseContext, Strategy};
pub use partition::Division;

/// Result type used throughout ModPulse
pub type Result<T> = anyhow::Result<T>;
