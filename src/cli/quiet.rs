//! Global quiet mode state for CLI.

use std::sync::atomic::{AtomicBool, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Check if stderr is a tty, i.e. the meter can be coloured.
pub fn stderr_is_terminal() -> bool {
    unsafe { libc::isatty(2) == 1 }
}
