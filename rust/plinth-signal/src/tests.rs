use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use crate::ShutdownLatch;

#[test]
fn test_latch_notify_before_wait_is_not_lost() {
    let latch = ShutdownLatch::new();
    latch.notify();
    assert!(latch.is_notified());
    latch.wait();
}

#[test]
fn test_latch_notify_is_idempotent() {
    let latch = ShutdownLatch::new();
    latch.notify();
    latch.notify();
    latch.wait();
}

#[test]
fn test_latch_releases_waiter_after_notify() {
    let latch = Arc::new(ShutdownLatch::new());
    let notified = Arc::new(AtomicBool::new(false));

    let waiter = {
        let latch = Arc::clone(&latch);
        let notified = Arc::clone(&notified);
        thread::spawn(move || {
            latch.wait();
            // The flag is set before notify(), so a wait that returned
            // because of the notification must observe it.
            assert!(notified.load(Ordering::SeqCst), "wait returned spuriously");
        })
    };

    thread::sleep(Duration::from_millis(50));
    notified.store(true, Ordering::SeqCst);
    latch.notify();
    waiter.join().expect("waiter");
}

#[test]
fn test_latch_starts_unset() {
    let latch = ShutdownLatch::default();
    assert!(!latch.is_notified());
}

#[cfg(unix)]
#[test]
fn test_wait_consumes_pending_sigterm() {
    // Block SIGTERM on a dedicated thread, make one pending for that thread,
    // then wait_for_termination() must consume it and return. Keeping the
    // signal thread-directed and blocked makes this safe to run alongside
    // the other tests.
    let waiter = thread::spawn(|| {
        unsafe {
            let mut set: libc::sigset_t = std::mem::zeroed();
            libc::sigemptyset(&mut set);
            libc::sigaddset(&mut set, libc::SIGTERM);
            libc::pthread_sigmask(libc::SIG_BLOCK, &set, std::ptr::null_mut());
            libc::raise(libc::SIGTERM);
        }
        crate::wait_for_termination();
    });
    waiter.join().expect("waiter returns after the pending signal");
}
