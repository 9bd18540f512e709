use windows_sys::Win32::System::SystemInformation::GetTickCount64;

use plinth_common::Result;

use crate::MonotonicSample;

pub(crate) const IS_MONOTONIC: bool = true;

/// Samples the millisecond tick count since boot.
pub(crate) fn now() -> Result<MonotonicSample> {
    let ms = unsafe { GetTickCount64() };
    Ok(MonotonicSample {
        sec: (ms / 1000) as i64,
        usec: ((ms % 1000) * 1000) as i64,
    })
}

pub(crate) fn now_sec() -> Result<i64> {
    now().map(|sample| sample.sec)
}
