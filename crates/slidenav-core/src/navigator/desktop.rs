//! Desktop paginated mode: stacked slides and a tweened track offset

use tracing::debug;

use super::state::Transition;
use super::SlideNavigator;
use crate::event::TweenOutcome;
use crate::motion::{Clock, Tween};
use crate::surface::{ScrollBehavior, SlideLayout, Surface};
use crate::viewport::Mode;

impl<S: Surface, C: Clock> SlideNavigator<S, C> {
    /// Move one slide forward (`delta > 0`) or back (`delta < 0`).
    ///
    /// Ignored outside desktop mode, while a transition runs, within the
    /// cooldown of the last step (counted from when it started and again from
    /// when it landed), and at either end of the deck. Returns whether a
    /// transition started.
    pub fn advance(&mut self, delta: i32) -> bool {
        if self.mode != Some(Mode::Desktop) || !self.transition.is_idle() {
            return false;
        }
        let now = self.clock.now();
        if self.cooldown.is_cooling(now) {
            debug!("step dropped during cooldown");
            return false;
        }

        let target = (self.index as i64 + delta.signum() as i64)
            .clamp(0, self.last_index() as i64) as usize;
        if target == self.index {
            return false;
        }

        self.cooldown.mark(now);
        self.start_transition(target, true) == TweenOutcome::Started
    }

    /// Animate the track to `target`.
    ///
    /// Requests while a transition runs, or for the current slide, resolve
    /// immediately without touching the track.
    pub fn tween_to(&mut self, target: usize) -> TweenOutcome {
        self.start_transition(target, false)
    }

    fn start_transition(&mut self, target: usize, step: bool) -> TweenOutcome {
        if self.mode != Some(Mode::Desktop) {
            return TweenOutcome::Inactive;
        }
        if !self.transition.is_idle() {
            return TweenOutcome::Busy;
        }
        let target = target.min(self.last_index());
        if target == self.index {
            return TweenOutcome::AlreadyThere;
        }

        let to = -(target as f64) * self.height();
        debug!(from = self.index, to = target, "starting transition");
        self.transition = Transition::Transitioning {
            tween: Tween::new(
                self.clock.now(),
                self.offset,
                to,
                self.config.tween_duration(),
                self.config.easing,
            ),
            target,
            step,
        };
        TweenOutcome::Started
    }

    /// Sample the running tween; finishes the transition on its last frame
    pub(crate) fn step_tween(&mut self) {
        let Transition::Transitioning { tween, target, step } = &self.transition else {
            return;
        };
        let now = self.clock.now();
        let complete = tween.is_complete(now);
        let (target, step) = (*target, *step);
        self.offset = tween.sample(now);
        self.surface.set_track_offset(Some(self.offset));

        if complete {
            if step {
                self.cooldown.mark(now);
            }
            self.finish_transition(target);
        }
    }

    fn finish_transition(&mut self, target: usize) {
        self.transition = Transition::Idle;
        self.set_current(target);
        if std::mem::take(&mut self.layout_stale) {
            self.layout_desktop();
        } else {
            self.snap_offset();
        }
        debug!(index = self.index, "transition complete");
    }

    pub(crate) fn enter_desktop(&mut self) {
        self.wheel.reset();
        self.surface.scroll_to(0.0, ScrollBehavior::Instant);
        self.layout_desktop();
        self.set_current(self.index);
    }

    pub(crate) fn exit_desktop(&mut self) {
        if let Transition::Transitioning { target, .. } = self.transition {
            debug!(target, "transition cut short by mode change");
            self.transition = Transition::Idle;
            self.index = target;
        }
        self.wheel.reset();
        self.touch.cancel();
        for i in 0..self.slide_count {
            self.surface.set_slide_layout(i, SlideLayout::Flow);
        }
        self.surface.set_track_height(None);
        self.surface.set_track_offset(None);
        self.offset = 0.0;
    }

    /// Stack every slide at its page offset and snap the track to the current one
    pub(crate) fn layout_desktop(&mut self) {
        self.layout_stale = false;
        let height = self.height();
        for i in 0..self.slide_count {
            self.surface.set_slide_layout(
                i,
                SlideLayout::Absolute {
                    top: i as f64 * height,
                    height,
                },
            );
        }
        self.surface
            .set_track_height(Some(self.slide_count as f64 * height));
        self.snap_offset();
    }

    fn snap_offset(&mut self) {
        self.offset = -(self.index as f64) * self.height();
        self.surface.set_track_offset(Some(self.offset));
    }
}
