//! One-shot termination latch.

use std::sync::{Condvar, Mutex, PoisonError};

/// A one-shot event: set at most meaningfully once, observed by one waiter.
///
/// This is the building block for platforms without native blocking signal
/// consumption: a control-event handler calls [`ShutdownLatch::notify`] and
/// the waiter blocks in [`ShutdownLatch::wait`]. A notification delivered
/// before the waiter arrives is not lost. There is deliberately no timeout
/// and no way to clear the flag.
pub struct ShutdownLatch {
    fired: Mutex<bool>,
    cond: Condvar,
}

impl ShutdownLatch {
    pub const fn new() -> ShutdownLatch {
        ShutdownLatch {
            fired: Mutex::new(false),
            cond: Condvar::new(),
        }
    }

    /// Sets the latch and wakes the waiter. Further calls are no-ops.
    pub fn notify(&self) {
        let mut fired = self.fired.lock().unwrap_or_else(PoisonError::into_inner);
        *fired = true;
        self.cond.notify_one();
    }

    /// Blocks until the latch is set. Returns immediately if it already is.
    pub fn wait(&self) {
        let mut fired = self.fired.lock().unwrap_or_else(PoisonError::into_inner);
        while !*fired {
            fired = self
                .cond
                .wait(fired)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Whether the latch has been set.
    pub fn is_notified(&self) -> bool {
        *self.fired.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ShutdownLatch {
    fn default() -> ShutdownLatch {
        ShutdownLatch::new()
    }
}
