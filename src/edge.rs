//! Edge timer finite state machine.
//!
//! Pure logic, no hardware dependencies. Consumes button edge
//! timestamps, produces classified Morse symbols. Fully testable
//! on host.
//!
//! # Classification
//!
//! - Press held `< 250 ms` → [`MorseSymbol::Dot`]
//! - Press held `>= 250 ms` → [`MorseSymbol::Dash`]
//! - Released `>= 1000 ms` → [`MorseSymbol::Space`] (once per release)
//! - Released `>= 2000 ms` → [`MorseSymbol::Submit`] (once, then idle)
//!
//! Presses shorter than the debounce floor are contact bounce and
//! classify as nothing.

use crate::symbol::MorseSymbol;

/// Press duration below this is a dot, at or above a dash.
pub const DOT_MAX_MS: i64 = 250;

/// Release duration at which a letter gap is emitted.
pub const SPACE_MS: i64 = 1000;

/// Release duration at which the candidate is submitted.
pub const SUBMIT_MS: i64 = 2000;

/// Presses shorter than this are ignored as contact bounce.
pub const DEBOUNCE_MS: i64 = 20;

/// FSM state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// Nothing to measure. Entered at start and after each Submit.
    Idle,
    /// Button is down since the recorded timestamp.
    Pressed { since_ms: i64 },
    /// Button is up since the recorded timestamp. `space_sent` latches
    /// the one-shot Space emission for this release period.
    Released { since_ms: i64, space_sent: bool },
}

/// Button timing classifier.
///
/// Converts raw press/release edges (monotonic millisecond timestamps
/// from the edge source) plus periodic polling into [`MorseSymbol`]s.
///
/// # Example
///
/// ```
/// use morse_trainer::edge::EdgeTimer;
/// use morse_trainer::symbol::MorseSymbol;
///
/// let mut timer = EdgeTimer::new();
/// timer.on_press(0);
/// assert_eq!(timer.on_release(100), Some(MorseSymbol::Dot));
/// assert_eq!(timer.poll(1100), Some(MorseSymbol::Space));
/// assert_eq!(timer.poll(2100), Some(MorseSymbol::Submit));
/// ```
pub struct EdgeTimer {
    state: State,
}

impl EdgeTimer {
    /// Create a new timer in the idle state.
    pub const fn new() -> Self {
        Self { state: State::Idle }
    }

    /// Falling edge: button pressed at `now_ms`.
    ///
    /// Duplicate press edges (bounce while already pressed) are ignored.
    pub fn on_press(&mut self, now_ms: i64) {
        match self.state {
            State::Pressed { .. } => {}
            _ => self.state = State::Pressed { since_ms: now_ms },
        }
    }

    /// Rising edge: button released at `now_ms`.
    ///
    /// Classifies the completed press as dot or dash. Presses shorter
    /// than the debounce floor classify as nothing. A release without a
    /// preceding press (stale edge) is ignored.
    pub fn on_release(&mut self, now_ms: i64) -> Option<MorseSymbol> {
        let State::Pressed { since_ms } = self.state else {
            return None;
        };

        self.state = State::Released {
            since_ms: now_ms,
            space_sent: false,
        };

        let held_ms = now_ms - since_ms;
        if held_ms < DEBOUNCE_MS {
            return None;
        }
        if held_ms < DOT_MAX_MS {
            Some(MorseSymbol::Dot)
        } else {
            Some(MorseSymbol::Dash)
        }
    }

    /// Periodic poll while the button may be released.
    ///
    /// Emits Space once per release period, then Submit once, after which
    /// the timer goes idle and measures nothing until the next press.
    /// Submit is checked first so a late poll lands on Submit directly.
    pub fn poll(&mut self, now_ms: i64) -> Option<MorseSymbol> {
        let State::Released {
            since_ms,
            space_sent,
        } = self.state
        else {
            return None;
        };

        let released_ms = now_ms - since_ms;
        if released_ms >= SUBMIT_MS {
            self.state = State::Idle;
            return Some(MorseSymbol::Submit);
        }
        if released_ms >= SPACE_MS && !space_sent {
            self.state = State::Released {
                since_ms,
                space_sent: true,
            };
            return Some(MorseSymbol::Space);
        }
        None
    }

    /// Reset to idle (discard any in-flight measurement).
    pub fn reset(&mut self) {
        self.state = State::Idle;
    }

    /// Check if the timer is idle (pre-first-press or post-Submit).
    pub fn is_idle(&self) -> bool {
        self.state == State::Idle
    }
}

impl Default for EdgeTimer {
    fn default() -> Self {
        Self::new()
    }
}
