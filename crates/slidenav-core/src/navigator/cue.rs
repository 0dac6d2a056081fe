//! Scroll cue: a one-shot hint hidden by the first sign of navigation

use super::SlideNavigator;
use crate::motion::Clock;
use crate::surface::{Element, Surface};

/// Wheel deltas above this count as deliberate scrolling
pub(crate) const CUE_WHEEL_DELTA: f64 = 1.0;
/// Touch travel above this counts as a drag
pub(crate) const CUE_DRAG_TRAVEL: f64 = 8.0;
/// Native scroll position past which the cue is hidden in mobile mode
pub(crate) const CUE_SCROLL_Y: f64 = 20.0;

impl<S: Surface, C: Clock> SlideNavigator<S, C> {
    #[inline]
    pub fn is_cue_dismissed(&self) -> bool {
        self.cue_dismissed
    }

    /// Hide the scroll cue; later calls do nothing
    pub(crate) fn dismiss_cue(&mut self) {
        if self.cue_dismissed || !self.surface.has_element(Element::ScrollCue) {
            return;
        }
        self.cue_dismissed = true;
        self.surface.hide_scroll_cue();
    }
}
