use std::time::Duration;

use super::clamp_percent;

/// Reveal progress snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RevealTick {
    /// Progress to feed into `GlobalParameters::filled_percent`, in `[0, 1]`.
    pub filled_percent: f32,

    /// Monotonic tick counter.
    pub frame_index: u64,

    /// True once a non-looping reveal has reached the end.
    pub finished: bool,
}

/// Turns frame deltas into reveal progress over a fixed duration.
///
/// Time is pushed in by the caller rather than sampled, so the same sequence of
/// deltas always produces the same sequence of progress values.
///
/// Each delta is clamped to `dt_max` to avoid the reveal jumping ahead after a
/// stall (debugger pause, minimized window).
#[derive(Debug, Clone)]
pub struct RevealClock {
    duration: Duration,
    elapsed: Duration,
    dt_max: Duration,
    looping: bool,
    frame_index: u64,
}

impl RevealClock {
    /// Creates a one-shot reveal lasting `duration`.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            elapsed: Duration::ZERO,
            dt_max: Duration::from_millis(250),
            looping: false,
            frame_index: 0,
        }
    }

    /// Restarts from zero after reaching the end instead of holding at 1.
    pub fn looping(mut self) -> Self {
        self.looping = true;
        self
    }

    /// Overrides the per-tick delta clamp.
    pub fn with_dt_max(mut self, dt_max: Duration) -> Self {
        self.dt_max = dt_max;
        self
    }

    /// Rewinds to the start.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    /// Current progress without advancing.
    pub fn percent(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        clamp_percent(self.elapsed.as_secs_f32() / self.duration.as_secs_f32())
    }

    /// Advances by `dt` and returns the new progress.
    pub fn tick(&mut self, dt: Duration) -> RevealTick {
        let dt = dt.min(self.dt_max);
        self.elapsed = self.elapsed.saturating_add(dt);

        if self.elapsed >= self.duration {
            if self.looping && !self.duration.is_zero() {
                let d = self.duration.as_nanos();
                self.elapsed = Duration::from_nanos((self.elapsed.as_nanos() % d) as u64);
            } else {
                self.elapsed = self.duration;
            }
        }

        let tick = RevealTick {
            filled_percent: self.percent(),
            frame_index: self.frame_index,
            finished: !self.looping && self.elapsed >= self.duration,
        };

        self.frame_index = self.frame_index.wrapping_add(1);
        tick
    }
}
