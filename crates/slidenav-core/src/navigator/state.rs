//! Re-entrancy guards: transition state, cooldown and pending frame work

use std::time::{Duration, Instant};

use crate::motion::Tween;

/// Desktop transition state; at most one tween is ever in flight
#[derive(Debug, Clone, Default)]
pub(crate) enum Transition {
    #[default]
    Idle,
    Transitioning {
        tween: Tween,
        target: usize,
        /// Started by a single step; the cooldown restarts when it lands
        step: bool,
    },
}

impl Transition {
    #[inline]
    pub(crate) fn is_idle(&self) -> bool {
        matches!(self, Transition::Idle)
    }
}

/// Minimum spacing between accepted step navigations, stamped when a step
/// starts and again when its transition completes
#[derive(Debug, Clone)]
pub(crate) struct Cooldown {
    window: Duration,
    last: Option<Instant>,
}

impl Cooldown {
    pub(crate) fn new(window: Duration) -> Self {
        Self { window, last: None }
    }

    pub(crate) fn is_cooling(&self, now: Instant) -> bool {
        self.last
            .is_some_and(|last| now.saturating_duration_since(last) < self.window)
    }

    pub(crate) fn mark(&mut self, now: Instant) {
        self.last = Some(now);
    }
}

/// Kind of resize waiting for the next frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum ResizeKind {
    /// Window resize; may be browser chrome
    Resize,
    /// Rotation; always real
    Orientation,
}

/// Work coalesced into the next animation frame
#[derive(Debug, Clone, Default)]
pub(crate) struct PendingFrames {
    resize: Option<ResizeKind>,
    scroll: bool,
}

impl PendingFrames {
    /// Queue a resize; repeated requests collapse, orientation wins over resize
    pub(crate) fn request_resize(&mut self, kind: ResizeKind) {
        self.resize = Some(self.resize.map_or(kind, |pending| pending.max(kind)));
    }

    pub(crate) fn request_scroll(&mut self) {
        self.scroll = true;
    }

    pub(crate) fn take_resize(&mut self) -> Option<ResizeKind> {
        self.resize.take()
    }

    pub(crate) fn take_scroll(&mut self) -> bool {
        std::mem::take(&mut self.scroll)
    }

    pub(crate) fn cancel_scroll(&mut self) {
        self.scroll = false;
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.resize.is_some() || self.scroll
    }
}
