/// Unix variant: mask SIGINT/SIGTERM away from default handling, then
/// synchronously consume the next occurrence of either. The kernel holds the
/// pending state, so a signal arriving between the mask and the wait is not
/// lost.
pub(crate) fn wait() {
    unsafe {
        let mut set: libc::sigset_t = std::mem::zeroed();
        libc::sigemptyset(&mut set);
        libc::sigaddset(&mut set, libc::SIGINT);
        libc::sigaddset(&mut set, libc::SIGTERM);
        libc::pthread_sigmask(libc::SIG_BLOCK, &set, std::ptr::null_mut());

        let mut sig: libc::c_int = 0;
        while libc::sigwait(&set, &mut sig) != 0 {}
    }
}
