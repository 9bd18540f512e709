//! Monotonic timestamp source with platform fallback.
//!
//! [`now`] returns an ever-increasing timestamp wherever the platform offers
//! a true monotonic source, abstracting over the available time APIs:
//!
//! 1. On Linux, `clock_gettime(CLOCK_MONOTONIC)`. This is the same clock the
//!    platform's condvar timed waits can be attached to, so interval math
//!    here and timed blocking elsewhere in a host stay on one time source.
//! 2. On Windows, the tick count since boot (`GetTickCount64`).
//! 3. Everywhere else, the wall clock — which is NOT monotonic and can jump
//!    backward on clock adjustment; callers must tolerate this. Whether the
//!    selected source is truly monotonic is reported by [`is_monotonic`].
//!
//! The only failure path is the wall-clock query itself failing, surfaced as
//! `ClockUnavailable`. It is never retried.

use plinth_common::Result;

#[cfg_attr(target_os = "linux", path = "clock_linux.rs")]
#[cfg_attr(windows, path = "clock_win.rs")]
#[cfg_attr(not(any(target_os = "linux", windows)), path = "clock_fallback.rs")]
mod sys;

#[cfg(test)]
mod tests;

/// A clock sample: whole seconds plus microseconds within the second.
///
/// The derived ordering is chronological, since `usec` is kept normalized to
/// `0..1_000_000`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonotonicSample {
    /// Whole seconds since the source's epoch (boot time or Unix epoch,
    /// depending on the platform source).
    pub sec: i64,
    /// Microseconds within the second, `0..1_000_000`.
    pub usec: i64,
}

impl MonotonicSample {
    /// Advances the sample by `ms` milliseconds, carrying microsecond
    /// overflow into the seconds component.
    ///
    /// Used for deadline math: sample the clock, add the timeout, hand the
    /// result to a timed wait.
    pub fn add_millis(&mut self, ms: u64) {
        self.sec += (ms / 1000) as i64;
        self.usec += ((ms % 1000) * 1000) as i64;
        if self.usec >= 1_000_000 {
            self.usec -= 1_000_000;
            self.sec += 1;
        }
    }

    /// Converts the sample into a `Duration` from the source's epoch.
    ///
    /// Negative samples (possible only via the wall-clock fallback before
    /// 1970) clamp to zero.
    pub fn to_duration(self) -> std::time::Duration {
        if self.sec < 0 {
            return std::time::Duration::ZERO;
        }
        std::time::Duration::new(self.sec as u64, (self.usec as u32) * 1000)
    }
}

/// Samples the platform time source.
///
/// # Errors
///
/// `ClockUnavailable` if the wall-clock fallback query fails; the monotonic
/// and tick-count sources do not fail.
pub fn now() -> Result<MonotonicSample> {
    sys::now()
}

/// Samples the platform time source, returning whole seconds only.
pub fn now_sec() -> Result<i64> {
    sys::now_sec()
}

/// Whether the compiled-in time source is guaranteed non-decreasing.
pub const fn is_monotonic() -> bool {
    sys::IS_MONOTONIC
}
