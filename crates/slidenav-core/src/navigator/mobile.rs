//! Mobile native-scroll mode: observe scrolling, infer the current slide

use tracing::debug;

use super::SlideNavigator;
use crate::motion::Clock;
use crate::surface::{FrameDecoration, ScrollBehavior, Surface};
use crate::viewport::Mode;

/// Opacity lost by a frame at full distance from the viewport centre
const MAX_FADE: f64 = 0.55;
/// Vertical shift of a frame at full distance, in pixels
const MAX_SHIFT: f64 = 28.0;

impl<S: Surface, C: Clock> SlideNavigator<S, C> {
    /// Slide whose top is closest to the scroll anchor point
    /// (`scroll_y + anchor_ratio * viewport_height`). Ties go to the earlier slide.
    pub fn nearest_slide(&self) -> usize {
        let anchor = self.surface.scroll_y() + self.config.anchor_ratio * self.height();
        let mut best = 0;
        let mut best_distance = f64::INFINITY;
        for i in 0..self.slide_count {
            let distance = (self.surface.slide_rect(i).top - anchor).abs();
            if distance < best_distance {
                best = i;
                best_distance = distance;
            }
        }
        best
    }

    pub(crate) fn enter_mobile(&mut self) {
        // Flow layout shows every slide, none may stay dimmed
        for i in 0..self.slide_count {
            self.reveal(i);
        }
        if self.surface.supports_visibility_observer() {
            self.surface
                .observe_visibility(&self.config.visibility_thresholds);
            self.observer_attached = true;
        } else {
            debug!("visibility observer unavailable, using scroll anchor");
        }
        self.surface.set_scroll_listener(true);
        self.surface
            .scroll_into_view(self.index, ScrollBehavior::Instant);
        self.set_current(self.index);
        if self.config.frame_fade {
            self.decorate_frames();
        }
    }

    pub(crate) fn exit_mobile(&mut self) {
        self.surface.set_scroll_listener(false);
        if self.observer_attached {
            self.surface.disconnect_visibility();
            self.observer_attached = false;
        }
        self.frames.cancel_scroll();
        self.touch.cancel();
        self.clear_decorations();
    }

    /// Observer entry: reveal any intersecting slide, promote one that fills
    /// enough of the viewport
    pub(crate) fn on_visibility(&mut self, index: usize, ratio: f64) {
        if self.mode != Some(Mode::Mobile) || !self.observer_attached {
            return;
        }
        if index >= self.slide_count || ratio <= 0.0 {
            return;
        }
        self.reveal(index);
        if ratio >= self.config.promote_ratio() {
            self.set_current(index);
        }
    }

    /// Scroll sample: locate the current slide unless the observer owns it,
    /// then refresh frame decoration
    pub(crate) fn sync_mobile(&mut self) {
        if self.mode != Some(Mode::Mobile) {
            return;
        }
        if !self.observer_attached {
            let nearest = self.nearest_slide();
            self.set_current(nearest);
        }
        if self.config.frame_fade {
            self.decorate_frames();
        }
    }

    /// Fade and shift each frame by its distance from the viewport centre
    pub(crate) fn decorate_frames(&mut self) {
        let height = self.height();
        let falloff = self.config.fade_falloff_ratio * height;
        let centre = self.surface.scroll_y() + height / 2.0;
        for i in 0..self.slide_count {
            let rect = self.surface.slide_rect(i);
            let offset = rect.top + rect.height / 2.0 - centre;
            let p = if falloff > 0.0 {
                (offset.abs() / falloff).min(1.0)
            } else {
                0.0
            };
            self.surface.set_frame_decoration(
                i,
                Some(FrameDecoration {
                    opacity: 1.0 - MAX_FADE * p,
                    translate_y: offset.signum() * MAX_SHIFT * p,
                }),
            );
        }
    }

    pub(crate) fn clear_decorations(&mut self) {
        for i in 0..self.slide_count {
            self.surface.set_frame_decoration(i, None);
        }
    }
}
