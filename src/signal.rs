//! Module: signal
//!
//! Purpose: Synchronization between the input side (interrupt context)
//! and the game loop. The ready flag is the sole primitive: the input
//! side raises it when a candidate finalizes, the game loop blocks on it.
//! No game logic executes while waiting; the watchdog keep-alive is fed
//! on every iteration so the wait never trips the liveness timer.
//!
//! Safety: Safe. Single-writer/single-reader atomic boolean.

use core::sync::atomic::{AtomicBool, Ordering};

/// Liveness sink: external watchdog keep-alive.
///
/// Must be invoked at least once within the watchdog period while any
/// blocking wait is active.
pub trait Liveness {
    fn feed(&mut self);
}

/// Single-writer/single-reader candidate-ready flag.
pub struct ReadyFlag {
    ready: AtomicBool,
}

impl ReadyFlag {
    /// Create a lowered flag.
    pub const fn new() -> Self {
        Self {
            ready: AtomicBool::new(false),
        }
    }

    /// Raise the flag (input side, one writer).
    #[inline]
    pub fn raise(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Consume the flag if raised (game loop, one reader).
    #[inline]
    pub fn take(&self) -> bool {
        self.ready.swap(false, Ordering::AcqRel)
    }

    /// Peek without consuming.
    #[inline]
    pub fn is_raised(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }
}

impl Default for ReadyFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// Block until the flag is raised.
///
/// Feeds the liveness sink and runs the `idle` hook on every iteration.
/// The hook is the stand-in for interrupt-side work (edge pumping in the
/// firmware, scripted input in tests); no game logic runs here.
pub fn wait_ready<F: FnMut()>(flag: &ReadyFlag, liveness: &mut dyn Liveness, mut idle: F) {
    loop {
        liveness.feed();
        if flag.take() {
            return;
        }
        idle();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingWatchdog {
        feeds: u32,
    }

    impl Liveness for CountingWatchdog {
        fn feed(&mut self) {
            self.feeds += 1;
        }
    }

    #[test]
    fn test_raise_take() {
        let flag = ReadyFlag::new();
        assert!(!flag.take());

        flag.raise();
        assert!(flag.is_raised());
        assert!(flag.take());
        // Consumed: second take sees it lowered.
        assert!(!flag.take());
    }

    #[test]
    fn test_wait_returns_when_raised() {
        let flag = ReadyFlag::new();
        flag.raise();

        let mut wdt = CountingWatchdog { feeds: 0 };
        wait_ready(&flag, &mut wdt, || {});

        assert!(wdt.feeds >= 1);
        assert!(!flag.is_raised());
    }

    #[test]
    fn test_wait_runs_idle_hook_until_raised() {
        let flag = ReadyFlag::new();
        let mut wdt = CountingWatchdog { feeds: 0 };

        let mut polls = 0;
        wait_ready(&flag, &mut wdt, || {
            polls += 1;
            if polls == 5 {
                flag.raise();
            }
        });

        assert_eq!(polls, 5);
        assert!(wdt.feeds >= 5);
    }
}
