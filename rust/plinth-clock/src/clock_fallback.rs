use std::time::{SystemTime, UNIX_EPOCH};

use plinth_common::Result;
use plinth_common::error::Error;

use crate::MonotonicSample;

// Wall-clock timestamps: can jump backward on clock adjustment.
pub(crate) const IS_MONOTONIC: bool = false;

pub(crate) fn now() -> Result<MonotonicSample> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| Error::clock_unavailable(std::io::Error::other(e)))?;
    Ok(MonotonicSample {
        sec: elapsed.as_secs() as i64,
        usec: elapsed.subsec_micros() as i64,
    })
}

pub(crate) fn now_sec() -> Result<i64> {
    now().map(|sample| sample.sec)
}
