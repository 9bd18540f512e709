use windows_sys::Win32::Foundation::{BOOL, FALSE, TRUE};
use windows_sys::Win32::System::Console::{
    CTRL_BREAK_EVENT, CTRL_C_EVENT, CTRL_CLOSE_EVENT, SetConsoleCtrlHandler,
};

use crate::latch::ShutdownLatch;

static LATCH: ShutdownLatch = ShutdownLatch::new();

unsafe extern "system" fn handler(ctrl_type: u32) -> BOOL {
    match ctrl_type {
        CTRL_C_EVENT | CTRL_BREAK_EVENT | CTRL_CLOSE_EVENT => {
            LATCH.notify();
            TRUE
        }
        _ => FALSE,
    }
}

/// Windows variant: console control events (Ctrl+C, Ctrl+Break, close) are
/// routed into a process-wide one-shot latch. Single use.
pub(crate) fn wait() {
    unsafe {
        SetConsoleCtrlHandler(Some(handler), TRUE);
    }
    LATCH.wait();
}
