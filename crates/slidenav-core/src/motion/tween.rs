//! Eased interpolation of a single offset
//!
//! A tween is sampled once per frame with the host's current time.

use std::time::{Duration, Instant};

use super::clock::{lerp, progress};
use super::easing::{EasingType, EasingTypeExt};

#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    /// Start time
    start: Instant,
    /// Starting value
    from: f64,
    /// Target value
    to: f64,
    duration: Duration,
    easing: EasingType,
}

impl Tween {
    pub fn new(start: Instant, from: f64, to: f64, duration: Duration, easing: EasingType) -> Self {
        Self {
            start,
            from,
            to,
            duration,
            easing,
        }
    }

    #[inline]
    pub fn to(&self) -> f64 {
        self.to
    }

    /// Check if the tween has reached its end at `now`
    #[inline]
    pub fn is_complete(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.duration
    }

    /// Eased value at `now`, exactly `to` once complete
    pub fn sample(&self, now: Instant) -> f64 {
        if self.is_complete(now) {
            return self.to;
        }
        let t = progress(self.start, now, self.duration);
        lerp(self.from, self.to, self.easing.apply(t))
    }

    /// Restart from the value at `now` towards a new target
    pub fn retarget(&mut self, now: Instant, to: f64) {
        self.from = self.sample(now);
        self.to = to;
        self.start = now;
    }
}
