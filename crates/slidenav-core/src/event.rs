//! Messages delivered to the navigator by the host event loop

use crate::input::NavKey;

/// One input or environment signal
#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent {
    /// Mouse wheel, positive delta scrolls down
    Wheel { delta_y: f64 },
    TouchStart { y: f64 },
    /// Finger moved; a desktop swipe fires here once it travels far enough
    TouchMove { y: f64 },
    TouchEnd,
    Key(NavKey),
    /// Window size changed; the navigator re-reads the viewport on the next frame
    Resize,
    /// Device rotated; always treated as a real resize
    OrientationChange,
    /// Document scrolled
    Scroll,
    /// Visibility observer entry for one slide
    Visibility { index: usize, ratio: f64 },
    /// Indicator button pressed
    DotClicked(usize),
    /// Menu trigger element activated
    MenuTrigger,
    /// Intro subtitle finished its reveal transition
    SubtitleTransitionEnd,
}

/// Whether the host should suppress its default handling of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Handled; suppress native behaviour
    Consumed,
    /// Not handled; let native scrolling or key handling run
    PassThrough,
}

impl EventOutcome {
    #[inline]
    pub fn is_consumed(&self) -> bool {
        matches!(self, EventOutcome::Consumed)
    }
}

/// Result of a transition request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenOutcome {
    /// A transition is now running
    Started,
    /// Target is already the current slide
    AlreadyThere,
    /// Another transition is in flight
    Busy,
    /// Transitions only run in desktop mode
    Inactive,
}
