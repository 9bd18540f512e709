use crate::latch::ShutdownLatch;

static LATCH: ShutdownLatch = ShutdownLatch::new();

/// Releases the waiter. Hosts on platforms without native signal delivery
/// call this from whatever control-event mechanism the platform offers.
pub fn notify_termination() {
    LATCH.notify();
}

pub(crate) fn wait() {
    LATCH.wait();
}
