//! Graceful termination for the watch loop.
//!
//! A process-wide flag records that SIGINT or SIGTERM arrived; the loop
//! checks it between phases, and the interval sleep is a chunked wait on the
//! same flag so an interrupt during sleep is observed within the wait
//! granularity rather than at the next poll boundary.

use anyhow::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Process-wide termination flag, set from the signal handler.
static TERMINATE: AtomicBool = AtomicBool::new(false);

/// Granularity of the cancellable interval wait.
const WAIT_SLICE: Duration = Duration::from_millis(100);

#[cfg(unix)]
extern "C" fn handle_terminate(_signal: libc::c_int) {
    TERMINATE.store(true, Ordering::SeqCst);
}

/// Handle to the process-wide shutdown flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct Shutdown {
    _private: (),
}

impl Shutdown {
    /// Create a handle without registering signal handlers.
    ///
    /// Used by tests that trigger shutdown programmatically.
    #[must_use]
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Register SIGINT and SIGTERM handlers and return a handle.
    ///
    /// # Errors
    ///
    /// Returns an error if a handler cannot be installed.
    pub fn install_handlers() -> Result<Self> {
        #[cfg(unix)]
        {
            use anyhow::Context;
            use nix::sys::signal::{SaFlags, SigAction, SigHandler, SigSet, Signal, sigaction};

            let action = SigAction::new(
                SigHandler::Handler(handle_terminate),
                SaFlags::empty(),
                SigSet::empty(),
            );

            // SAFETY: the handler only performs an atomic store, which is
            // async-signal-safe.
            unsafe {
                sigaction(Signal::SIGINT, &action).context("Failed to install SIGINT handler")?;
                sigaction(Signal::SIGTERM, &action)
                    .context("Failed to install SIGTERM handler")?;
            }
        }

        Ok(Self::new())
    }

    /// Whether termination has been requested.
    #[must_use]
    pub fn is_triggered(self) -> bool {
        TERMINATE.load(Ordering::SeqCst)
    }

    /// Request termination.
    ///
    /// Called by the signal handler; also the hook tests use to stop the
    /// loop from a scripted fake.
    pub fn trigger() {
        TERMINATE.store(true, Ordering::SeqCst);
    }

    /// Clear the flag. Tests that drive the loop in-process call this before
    /// each run; the binary never does.
    pub fn reset() {
        TERMINATE.store(false, Ordering::SeqCst);
    }

    /// Sleep for `interval`, waking early if termination is requested.
    ///
    /// Returns `true` if the full interval elapsed, `false` if the wait was
    /// cut short by shutdown.
    #[must_use]
    pub fn wait(self, interval: Duration) -> bool {
        let deadline = Instant::now() + interval;
        loop {
            if self.is_triggered() {
                return false;
            }
            let now = Instant::now();
            if now >= deadline {
                return true;
            }
            std::thread::sleep((deadline - now).min(WAIT_SLICE));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_wait_elapses_when_not_triggered() {
        Shutdown::reset();
        let shutdown = Shutdown::new();
        let start = Instant::now();
        assert!(shutdown.wait(Duration::from_millis(50)));
        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    #[serial]
    fn test_wait_returns_early_when_triggered() {
        Shutdown::reset();
        Shutdown::trigger();
        let shutdown = Shutdown::new();
        let start = Instant::now();
        assert!(!shutdown.wait(Duration::from_secs(60)));
        assert!(start.elapsed() < Duration::from_secs(1));
        Shutdown::reset();
    }

    #[test]
    #[serial]
    fn test_trigger_is_observed() {
        Shutdown::reset();
        let shutdown = Shutdown::new();
        assert!(!shutdown.is_triggered());
        Shutdown::trigger();
        assert!(shutdown.is_triggered());
        Shutdown::reset();
    }
}
