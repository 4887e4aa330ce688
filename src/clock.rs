//! Monotonic clock capability.
//!
//! The engine never sleeps; all timing comes from polling a free-running
//! millisecond counter that wraps at 2^29 (the CircuitPython
//! `supervisor.ticks_ms` width). Implementations only have to be monotonic
//! modulo that wrap; [`TickTimer`](crate::TickTimer) handles the rollover.

use std::cell::Cell;
use std::time::Instant;

use crate::tick::TICKS_MAX;

/// A free-running millisecond counter wrapping at 2^29.
pub trait MonotonicClock {
    /// Current counter value in milliseconds, modulo 2^29.
    ///
    /// Must tolerate being read arbitrarily often.
    fn now_ms(&self) -> u32;
}

/// Host clock backed by [`std::time::Instant`], masked to the 2^29 wrap
/// width.
#[derive(Debug, Clone)]
pub struct StdClock {
    epoch: Instant,
}

impl StdClock {
    /// Create a clock whose counter starts near zero.
    pub fn new() -> Self {
        StdClock {
            epoch: Instant::now(),
        }
    }
}

impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock for StdClock {
    fn now_ms(&self) -> u32 {
        (self.epoch.elapsed().as_millis() as u32) & TICKS_MAX
    }
}

/// Manually advanced clock for tests and simulations.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u32>,
}

impl ManualClock {
    /// Create a clock reading `now_ms`.
    pub fn new(now_ms: u32) -> Self {
        ManualClock {
            now: Cell::new(now_ms & TICKS_MAX),
        }
    }

    /// Set the counter to an absolute value (wrapped to 2^29).
    pub fn set(&self, now_ms: u32) {
        self.now.set(now_ms & TICKS_MAX);
    }

    /// Advance the counter, wrapping at 2^29.
    pub fn advance(&self, delta_ms: u32) {
        self.now.set(self.now.get().wrapping_add(delta_ms) & TICKS_MAX);
    }
}

impl MonotonicClock for ManualClock {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_wraps_at_period() {
        let clock = ManualClock::new(TICKS_MAX);
        assert_eq!(clock.now_ms(), TICKS_MAX);

        clock.advance(1);
        assert_eq!(clock.now_ms(), 0);

        clock.advance(100);
        assert_eq!(clock.now_ms(), 100);
    }

    #[test]
    fn std_clock_starts_near_zero() {
        let clock = StdClock::new();
        assert!(clock.now_ms() < 1000);
    }
}
