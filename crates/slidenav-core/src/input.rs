//! Raw input reduction: wheel accumulation, touch swipes, navigation keys

/// Named keys the navigator reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    ArrowUp,
    ArrowDown,
    PageUp,
    PageDown,
    Space,
    Home,
    End,
    Escape,
}

impl NavKey {
    /// Step direction for single-slide keys
    pub fn step(&self) -> Option<i32> {
        match self {
            NavKey::ArrowDown | NavKey::PageDown | NavKey::Space => Some(1),
            NavKey::ArrowUp | NavKey::PageUp => Some(-1),
            _ => None,
        }
    }
}

/// Sums wheel deltas until they exceed a threshold
#[derive(Debug, Clone, Default)]
pub struct WheelAccumulator {
    accumulated: f64,
}

impl WheelAccumulator {
    /// Add a delta; returns the step direction once the sum exceeds `threshold`
    ///
    /// The sum resets to zero whenever a step fires.
    pub fn push(&mut self, delta_y: f64, threshold: f64) -> Option<i32> {
        self.accumulated += delta_y;
        if self.accumulated.abs() > threshold {
            let direction = if self.accumulated > 0.0 { 1 } else { -1 };
            self.accumulated = 0.0;
            Some(direction)
        } else {
            None
        }
    }

    #[inline]
    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }

    pub fn reset(&mut self) {
        self.accumulated = 0.0;
    }
}

/// Tracks one touch gesture; a gesture fires at most one step
#[derive(Debug, Clone, Default)]
pub struct TouchTracker {
    start_y: Option<f64>,
}

impl TouchTracker {
    pub fn start(&mut self, y: f64) {
        self.start_y = Some(y);
    }

    /// Travel since the gesture started; positive when the finger moved up
    pub fn travel(&self, y: f64) -> Option<f64> {
        self.start_y.map(|start| start - y)
    }

    /// Feed a move; returns the step direction once travel exceeds `threshold`
    ///
    /// Dragging the finger up (y decreasing) moves to the next slide. The
    /// gesture is spent once it fires, so later moves return `None` until the
    /// next [`TouchTracker::start`].
    pub fn moved(&mut self, y: f64, threshold: f64) -> Option<i32> {
        let travel = self.travel(y)?;
        if travel.abs() <= threshold {
            return None;
        }
        self.start_y = None;
        Some(if travel > 0.0 { 1 } else { -1 })
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.start_y.is_some()
    }

    pub fn cancel(&mut self) {
        self.start_y = None;
    }
}
