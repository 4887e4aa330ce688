//! Wraparound-Safe Countdown Timer
//!
//! A polled single-shot/repeat countdown built on a fixed-width millisecond
//! counter that overflows at [`TICKS_PERIOD`]. No blocking, no sleeping:
//! timing fidelity comes entirely from how often [`TickTimer::read`] is
//! called.

use crate::clock::MonotonicClock;

/// Wrap period of the underlying millisecond counter.
pub const TICKS_PERIOD: u32 = 1 << 29;
/// Mask for values in `[0, TICKS_PERIOD)`.
pub const TICKS_MAX: u32 = TICKS_PERIOD - 1;
/// Half the wrap period; the pivot of the signed-distance remap.
pub const TICKS_HALF_PERIOD: u32 = TICKS_PERIOD / 2;
/// Longest armable duration. Durations are clamped below half the wrap
/// period so elapsed time is never sign-ambiguous.
pub const TICKS_DURATION_MAX: u32 = TICKS_HALF_PERIOD - 1;

/// Polled countdown timer, safe across counter wraparound.
#[derive(Debug, Clone, Copy)]
pub struct TickTimer {
    enabled: bool,
    duration_ms: u32,
    repeat: bool,
    start: u32,
    fired: bool,
}

impl TickTimer {
    /// Create a disarmed timer.
    pub fn new() -> Self {
        TickTimer {
            enabled: false,
            duration_ms: 0,
            repeat: false,
            start: 0,
            fired: false,
        }
    }

    /// Arm (or disarm) the timer.
    ///
    /// `duration_ms` is clamped to [`TICKS_DURATION_MAX`]; a zero duration
    /// disarms. The countdown starts at the clock's current value. Returns
    /// whether the timer is now armed.
    pub fn write(&mut self, clock: &impl MonotonicClock, duration_ms: u32, repeat: bool) -> bool {
        self.duration_ms = duration_ms.min(TICKS_DURATION_MAX);
        self.repeat = repeat;
        self.enabled = self.duration_ms > 0;
        self.start = clock.now_ms() & TICKS_MAX;
        self.enabled
    }

    /// Poll the timer; returns whether it fired on this call.
    ///
    /// Elapsed time is the signed distance
    /// `(((now - start) mod P) + P/2) mod P - P/2` with `P = TICKS_PERIOD`,
    /// which stays correct when `now` has wrapped past the counter width,
    /// given that armed durations never reach `P/2`. On fire a repeating
    /// timer re-arms with the same duration (from `now`, not from the exact
    /// deadline); a single-shot disarms.
    pub fn read(&mut self, clock: &impl MonotonicClock) -> bool {
        self.fired = false;
        if self.enabled {
            let now = clock.now_ms() & TICKS_MAX;
            let raw = now.wrapping_sub(self.start) & TICKS_MAX;
            let elapsed = ((raw.wrapping_add(TICKS_HALF_PERIOD) & TICKS_MAX) as i32)
                - TICKS_HALF_PERIOD as i32;
            if elapsed >= self.duration_ms as i32 {
                self.fired = true;
                if self.repeat {
                    let (duration_ms, repeat) = (self.duration_ms, self.repeat);
                    self.write(clock, duration_ms, repeat);
                } else {
                    self.write(clock, 0, false);
                }
            }
        }
        self.fired
    }

    /// Whether the timer is currently armed.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Armed duration in milliseconds (0 when disarmed).
    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }
}

impl Default for TickTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    #[test]
    fn zero_duration_disarms() {
        let clock = ManualClock::new(0);
        let mut timer = TickTimer::new();

        assert!(!timer.write(&clock, 0, false));
        assert!(!timer.is_enabled());
        assert!(!timer.read(&clock));
    }

    #[test]
    fn single_shot_fires_once_then_disarms() {
        let clock = ManualClock::new(1_000);
        let mut timer = TickTimer::new();
        assert!(timer.write(&clock, 200, false));

        clock.set(1_199);
        assert!(!timer.read(&clock));

        clock.set(1_200);
        assert!(timer.read(&clock));
        assert!(!timer.is_enabled());

        clock.set(2_000);
        assert!(!timer.read(&clock));
    }

    #[test]
    fn repeat_rearms_from_read_time() {
        let clock = ManualClock::new(0);
        let mut timer = TickTimer::new();
        timer.write(&clock, 100, true);

        clock.set(150);
        assert!(timer.read(&clock));
        assert!(timer.is_enabled());

        // Re-armed at 150, so the next deadline is 250.
        clock.set(249);
        assert!(!timer.read(&clock));
        clock.set(250);
        assert!(timer.read(&clock));
    }

    #[test]
    fn duration_clamped_below_half_period() {
        let clock = ManualClock::new(0);
        let mut timer = TickTimer::new();
        timer.write(&clock, u32::MAX, false);
        assert_eq!(timer.duration_ms(), TICKS_DURATION_MAX);
    }

    #[test]
    fn fires_across_counter_wrap() {
        let clock = ManualClock::new(TICKS_PERIOD - 50);
        let mut timer = TickTimer::new();
        timer.write(&clock, 200, false);

        // Counter has wrapped; only 150 ms have really passed.
        clock.set(100);
        assert!(!timer.read(&clock));

        clock.set(150);
        assert!(timer.read(&clock));
    }

    #[test]
    fn does_not_fire_prematurely_near_wrap() {
        let clock = ManualClock::new(TICKS_PERIOD - 1);
        let mut timer = TickTimer::new();
        timer.write(&clock, TICKS_DURATION_MAX, false);

        clock.set(TICKS_HALF_PERIOD - 3);
        assert!(!timer.read(&clock));

        clock.set(TICKS_HALF_PERIOD - 2);
        assert!(timer.read(&clock));
    }
}
