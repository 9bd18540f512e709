use plinth_common::Result;
use plinth_common::error::Error;

use crate::MonotonicSample;

pub(crate) const IS_MONOTONIC: bool = true;

/// Samples `CLOCK_MONOTONIC`.
///
/// `clock_gettime` on a valid clock id does not fail on Linux; should it
/// ever, the wall clock is used instead of reporting an error, matching the
/// source-priority contract (monotonic, then wall-clock fallback).
pub(crate) fn now() -> Result<MonotonicSample> {
    let mut ts: libc::timespec = unsafe { std::mem::zeroed() };
    let rc = unsafe { libc::clock_gettime(libc::CLOCK_MONOTONIC, &mut ts) };
    if rc == 0 {
        return Ok(MonotonicSample {
            sec: ts.tv_sec as i64,
            usec: (ts.tv_nsec / 1000) as i64,
        });
    }
    wall_clock()
}

pub(crate) fn now_sec() -> Result<i64> {
    now().map(|sample| sample.sec)
}

fn wall_clock() -> Result<MonotonicSample> {
    let mut tv: libc::timeval = unsafe { std::mem::zeroed() };
    let rc = unsafe { libc::gettimeofday(&mut tv, std::ptr::null_mut()) };
    if rc != 0 {
        return Err(Error::clock_unavailable(std::io::Error::last_os_error()));
    }
    Ok(MonotonicSample {
        sec: tv.tv_sec as i64,
        usec: tv.tv_usec as i64,
    })
}
