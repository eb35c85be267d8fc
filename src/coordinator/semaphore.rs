//! Counting semaphore built on a mutex and condition variable

use std::sync::{Condvar, Mutex};

/// Counting semaphore
///
/// `acquire` blocks until a permit is available and takes it; `release_n`
/// deposits permits and wakes blocked acquirers. The semaphore-based
/// coordinator starts the permit count at zero and has the last-finishing
/// worker deposit one permit per worker in a single fan-out.
pub struct Semaphore {
    permits: Mutex<usize>,
    available: Condvar,
}

impl Semaphore {
    /// Create a semaphore holding `permits` initial permits
    pub fn new(permits: usize) -> Self {
        Self {
            permits: Mutex::new(permits),
            available: Condvar::new(),
        }
    }

    /// Block until a permit can be taken
    pub fn acquire(&self) {
        let mut permits = self.permits.lock().expect("semaphore mutex poisoned");
        while *permits == 0 {
            permits = self
                .available
                .wait(permits)
                .expect("semaphore mutex poisoned");
        }
        *permits -= 1;
    }

    /// Deposit a single permit
    pub fn release(&self) {
        self.release_n(1);
    }

    /// Deposit `n` permits and wake every blocked acquirer
    pub fn release_n(&self, n: usize) {
        let mut permits = self.permits.lock().expect("semaphore mutex poisoned");
        *permits += n;
        self.available.notify_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_initial_permits_are_consumable() {
        let semaphore = Semaphore::new(3);
        semaphore.acquire();
        semaphore.acquire();
        semaphore.acquire();
    }

    #[test]
    fn test_release_unblocks_acquire() {
        let semaphore = Arc::new(Semaphore::new(0));
        let releaser = Arc::clone(&semaphore);

        let handle = thread::spawn(move || {
            releaser.release();
        });

        semaphore.acquire();
        handle.join().unwrap();
    }

    #[test]
    fn test_fan_out_release_unblocks_all_waiters() {
        let semaphore = Arc::new(Semaphore::new(0));

        let waiters: Vec<_> = (0..4)
            .map(|_| {
                let semaphore = Arc::clone(&semaphore);
                thread::spawn(move || semaphore.acquire())
            })
            .collect();

        semaphore.release_n(4);
        for waiter in waiters {
            waiter.join().unwrap();
        }
    }
}
