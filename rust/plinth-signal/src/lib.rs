//! Blocking wait for an external termination request.
//!
//! [`wait_for_termination`] parks the calling thread — typically a dedicated
//! control thread — until the process is asked to shut down, then returns so
//! the host can run its graceful teardown. There is no timeout and no
//! cancellation other than the event itself; callers needing a cancellable
//! wait must layer their own mechanism above this one.
//!
//! On Unix the two recognized termination signals (SIGINT, SIGTERM) are
//! blocked from default handling and the next occurrence is consumed
//! synchronously. On Windows, console control events are routed into a
//! one-shot [`ShutdownLatch`]. On platforms with no native signal delivery
//! at all, the host wires its own control-event handler to
//! `notify_termination`.
//!
//! The contract assumes a single waiter per process; the interleaving of a
//! second concurrent call is unspecified, and on the latch-based platforms a
//! second call after the first returned will block forever.

#[cfg_attr(unix, path = "signal_unix.rs")]
#[cfg_attr(windows, path = "signal_win.rs")]
#[cfg_attr(not(any(unix, windows)), path = "signal_fallback.rs")]
mod sys;

pub mod latch;

#[cfg(test)]
mod tests;

pub use latch::ShutdownLatch;

#[cfg(not(any(unix, windows)))]
pub use sys::notify_termination;

/// Blocks the calling thread until a termination request arrives.
pub fn wait_for_termination() {
    sys::wait()
}
