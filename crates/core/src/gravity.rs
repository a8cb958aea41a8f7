//! Gravity timer - wall-clock pacing of the automatic fall
//!
//! Independent of how often the loop polls for input: the caller passes in
//! the current monotonic [`Instant`] and the timer says whether a gravity
//! step is due.

use std::time::{Duration, Instant};

use crate::types::{DELAY_STEP_MS, MIN_DELAY_MS};

/// Lowest reachable gravity delay.
pub const MIN_DELAY: Duration = Duration::from_millis(MIN_DELAY_MS);

/// Delay change per speed-up / slow-down.
pub const DELAY_STEP: Duration = Duration::from_millis(DELAY_STEP_MS);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GravityTimer {
    delay: Duration,
    last_tick: Instant,
}

impl GravityTimer {
    /// Start timing from `now` with the given delay.
    ///
    /// The starting delay is taken as is, even when below [`MIN_DELAY`]; the
    /// floor only bounds speed-ups.
    pub fn new(delay: Duration, now: Instant) -> Self {
        Self {
            delay,
            last_tick: now,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Shorten the delay by one step, never below [`MIN_DELAY`].
    pub fn speed_up(&mut self) {
        self.delay = self.delay.saturating_sub(DELAY_STEP).max(MIN_DELAY);
    }

    /// Lengthen the delay by one step.
    pub fn slow_down(&mut self) {
        self.delay = self.delay.saturating_add(DELAY_STEP);
    }

    /// Whether at least one delay has elapsed since the last tick.
    pub fn is_due(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.last_tick) >= self.delay
    }

    /// Consume a due tick: returns `true` and restarts timing from `now` when
    /// one was due.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.is_due(now) {
            return false;
        }
        self.last_tick = now;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn due_after_delay() {
        let t0 = Instant::now();
        let mut timer = GravityTimer::new(Duration::from_millis(500), t0);

        assert!(!timer.poll(t0 + Duration::from_millis(499)));
        assert!(timer.poll(t0 + Duration::from_millis(500)));
        // Reference moved to 500ms.
        assert!(!timer.poll(t0 + Duration::from_millis(900)));
        assert!(timer.poll(t0 + Duration::from_millis(1000)));
    }

    #[test]
    fn speed_up_is_floored() {
        let mut timer = GravityTimer::new(Duration::from_millis(200), Instant::now());
        for _ in 0..100 {
            timer.speed_up();
        }
        assert_eq!(timer.delay(), MIN_DELAY);
    }

    #[test]
    fn speed_up_from_between_steps_lands_on_floor() {
        let mut timer = GravityTimer::new(Duration::from_millis(70), Instant::now());
        timer.speed_up();
        assert_eq!(timer.delay(), MIN_DELAY);
    }

    #[test]
    fn slow_down_is_unbounded() {
        let mut timer = GravityTimer::new(Duration::from_millis(500), Instant::now());
        for _ in 0..10 {
            timer.slow_down();
        }
        assert_eq!(timer.delay(), Duration::from_millis(1000));
    }
}
