//! Slide navigator
//!
//! Owns the current slide index, the Desktop/Mobile mode and every guard that
//! keeps transitions from overlapping. Hosts feed it `NavEvent`s, call
//! `on_frame` once per animation frame, and render whatever it wrote to the
//! surface.
//!
//! ```
//! use slidenav_core::{ManualClock, MemorySurface, NavigatorConfig, SlideNavigator};
//!
//! let surface = MemorySurface::new(4, 1280.0, 800.0);
//! let config = NavigatorConfig::default();
//! let mut nav = SlideNavigator::new(surface, ManualClock::new(), config).unwrap();
//! nav.start();
//! assert_eq!(nav.index(), 0);
//! ```

mod cue;
mod desktop;
mod intro;
mod mobile;
mod resize;
mod state;

#[cfg(test)]
mod tests;

use tracing::debug;

use crate::config::NavigatorConfig;
use crate::error::{Error, Result};
use crate::event::{EventOutcome, NavEvent};
use crate::input::{NavKey, TouchTracker, WheelAccumulator};
use crate::motion::{Clock, SystemClock};
use crate::surface::{BodyClass, ScrollBehavior, Surface};
use crate::viewport::{Mode, Viewport};

use cue::{CUE_DRAG_TRAVEL, CUE_SCROLL_Y, CUE_WHEEL_DELTA};
use intro::IntroSequencer;
use resize::ViewportCache;
use state::{Cooldown, PendingFrames, ResizeKind, Transition};

pub struct SlideNavigator<S: Surface, C: Clock = SystemClock> {
    surface: S,
    clock: C,
    config: NavigatorConfig,
    slide_count: usize,
    /// Always within `0..slide_count`
    index: usize,
    /// `None` until the first mode is applied
    mode: Option<Mode>,
    viewport: Viewport,
    cache: ViewportCache,
    transition: Transition,
    cooldown: Cooldown,
    /// Desktop layout must be rebuilt when the running transition ends
    layout_stale: bool,
    /// Track translation in desktop mode
    offset: f64,
    wheel: WheelAccumulator,
    touch: TouchTracker,
    frames: PendingFrames,
    intro: IntroSequencer,
    revealed: Vec<bool>,
    observer_attached: bool,
    dots_built: bool,
    menu_armed: bool,
    menu_open: bool,
    cue_dismissed: bool,
}

impl<S: Surface, C: Clock> SlideNavigator<S, C> {
    /// Create a navigator over a surface with at least one slide
    pub fn new(surface: S, clock: C, config: NavigatorConfig) -> Result<Self> {
        let slide_count = surface.slide_count();
        if slide_count == 0 {
            return Err(Error::EmptyDeck);
        }
        let viewport = surface.viewport();
        Ok(Self {
            cooldown: Cooldown::new(config.cooldown()),
            cache: ViewportCache::from_viewport(&viewport),
            surface,
            clock,
            config,
            slide_count,
            index: 0,
            mode: None,
            viewport,
            transition: Transition::Idle,
            layout_stale: false,
            offset: 0.0,
            wheel: WheelAccumulator::default(),
            touch: TouchTracker::default(),
            frames: PendingFrames::default(),
            intro: IntroSequencer::default(),
            revealed: vec![false; slide_count],
            observer_attached: false,
            dots_built: false,
            menu_armed: false,
            menu_open: false,
            cue_dismissed: false,
        })
    }

    // Accessors

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    #[inline]
    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    /// Slide a running transition is heading to
    pub fn target_index(&self) -> usize {
        match &self.transition {
            Transition::Transitioning { target, .. } => *target,
            Transition::Idle => self.index,
        }
    }

    #[inline]
    pub fn is_transitioning(&self) -> bool {
        !self.transition.is_idle()
    }

    /// Current desktop track offset
    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Viewport seen on the last mode evaluation
    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Intro finished and input is accepted
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.intro.is_done()
    }

    #[inline]
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    #[inline]
    pub fn frame_fade(&self) -> bool {
        self.config.frame_fade
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access for hosts that emulate native behaviour on the surface
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Viewport height the layout is built on
    #[inline]
    pub(crate) fn height(&self) -> f64 {
        self.cache.height
    }

    #[inline]
    fn last_index(&self) -> usize {
        self.slide_count - 1
    }

    /// Frame work is pending; hosts should keep delivering frames at full rate
    pub fn needs_frame(&self) -> bool {
        self.is_transitioning() || self.frames.is_pending()
    }

    /// Dispatch one input or environment signal
    pub fn handle_event(&mut self, event: NavEvent) -> EventOutcome {
        match event {
            NavEvent::Resize => {
                self.frames.request_resize(ResizeKind::Resize);
                EventOutcome::PassThrough
            }
            NavEvent::OrientationChange => {
                self.frames.request_resize(ResizeKind::Orientation);
                EventOutcome::PassThrough
            }
            NavEvent::Scroll => {
                if self.mode == Some(Mode::Mobile) {
                    if self.surface.scroll_y() > CUE_SCROLL_Y {
                        self.dismiss_cue();
                    }
                    self.frames.request_scroll();
                }
                EventOutcome::PassThrough
            }
            NavEvent::Visibility { index, ratio } => {
                self.on_visibility(index, ratio);
                EventOutcome::PassThrough
            }
            NavEvent::SubtitleTransitionEnd => {
                self.subtitle_transition_end();
                EventOutcome::PassThrough
            }
            _ if !self.is_ready() => {
                // Page is scroll-locked until the intro finishes
                EventOutcome::Consumed
            }
            NavEvent::Wheel { delta_y } => self.on_wheel(delta_y),
            NavEvent::TouchStart { y } => {
                if self.mode == Some(Mode::Desktop) {
                    self.touch.start(y);
                }
                EventOutcome::PassThrough
            }
            NavEvent::TouchMove { y } => self.on_touch_move(y),
            NavEvent::TouchEnd => {
                self.touch.cancel();
                EventOutcome::PassThrough
            }
            NavEvent::Key(key) => self.on_key(key),
            NavEvent::DotClicked(index) => self.go_to(index),
            NavEvent::MenuTrigger => {
                if self.toggle_menu() {
                    EventOutcome::Consumed
                } else {
                    EventOutcome::PassThrough
                }
            }
        }
    }

    /// Run one animation frame: timers, coalesced resize and scroll work, the tween
    pub fn on_frame(&mut self) {
        self.poll_intro();
        if let Some(kind) = self.frames.take_resize() {
            self.handle_resize(kind);
        }
        if self.frames.take_scroll() {
            self.sync_mobile();
        }
        self.step_tween();
    }

    /// Navigate to a slide the way an indicator click does
    pub fn go_to(&mut self, index: usize) -> EventOutcome {
        if index >= self.slide_count {
            return EventOutcome::PassThrough;
        }
        match self.mode {
            Some(Mode::Desktop) => {
                self.tween_to(index);
            }
            Some(Mode::Mobile) => {
                self.surface.scroll_into_view(index, ScrollBehavior::Smooth);
            }
            None => return EventOutcome::PassThrough,
        }
        EventOutcome::Consumed
    }

    /// Turn the mobile frame fade on or off at runtime
    pub fn set_frame_fade(&mut self, on: bool) {
        self.config.frame_fade = on;
        if self.mode == Some(Mode::Mobile) {
            if on {
                self.decorate_frames();
            } else {
                self.clear_decorations();
            }
        }
    }

    /// Re-derive the mode; when it changed or `force` is set, tear down the
    /// outgoing mode and set up the incoming one. Returns whether a transition ran.
    pub fn apply_mode(&mut self, force: bool) -> bool {
        let viewport = self.surface.viewport();
        self.viewport = viewport;
        let next = Mode::detect(&viewport, &self.config);
        if !force && self.mode == Some(next) {
            return false;
        }

        let previous = self.mode;
        debug!(from = ?previous, to = %next, force, "applying mode");

        // Sample the scroll position before mobile teardown touches anything
        let resume_index = match previous {
            Some(Mode::Mobile) if next == Mode::Desktop => Some(self.nearest_slide()),
            _ => None,
        };

        match previous {
            Some(Mode::Desktop) => self.exit_desktop(),
            Some(Mode::Mobile) => self.exit_mobile(),
            None => {}
        }

        self.mode = Some(next);
        self.surface.set_body_class(BodyClass::Mobile, next == Mode::Mobile);

        match next {
            Mode::Desktop => {
                if let Some(index) = resume_index {
                    self.index = index;
                }
                self.enter_desktop();
            }
            Mode::Mobile => self.enter_mobile(),
        }
        self.refresh_dots();
        true
    }

    /// Make `index` current: reveal it once and refresh the indicator
    pub(crate) fn set_current(&mut self, index: usize) {
        let index = index.min(self.last_index());
        if index != self.index {
            debug!(from = self.index, to = index, "current slide changed");
            self.index = index;
            if index > 0 {
                self.dismiss_cue();
            }
        }
        self.reveal(index);
        self.refresh_dots();
    }

    pub(crate) fn reveal(&mut self, index: usize) {
        if !self.revealed[index] {
            self.revealed[index] = true;
            self.surface.mark_revealed(index);
        }
    }

    fn on_wheel(&mut self, delta_y: f64) -> EventOutcome {
        if self.mode != Some(Mode::Desktop) {
            return EventOutcome::PassThrough;
        }
        if delta_y.abs() > CUE_WHEEL_DELTA {
            self.dismiss_cue();
        }
        // Inertia arriving during a transition or its cooldown is dropped
        if self.is_transitioning() || self.cooldown.is_cooling(self.clock.now()) {
            self.wheel.reset();
            return EventOutcome::Consumed;
        }
        if let Some(direction) = self.wheel.push(delta_y, self.config.wheel_threshold) {
            self.advance(direction);
        }
        EventOutcome::Consumed
    }

    fn on_touch_move(&mut self, y: f64) -> EventOutcome {
        if self.mode != Some(Mode::Desktop) {
            return EventOutcome::PassThrough;
        }
        if self.is_transitioning() {
            return EventOutcome::Consumed;
        }
        if self.touch.travel(y).is_some_and(|travel| travel.abs() > CUE_DRAG_TRAVEL) {
            self.dismiss_cue();
        }
        if let Some(direction) = self.touch.moved(y, self.config.touch_threshold) {
            self.advance(direction);
        }
        EventOutcome::Consumed
    }

    fn on_key(&mut self, key: NavKey) -> EventOutcome {
        if key == NavKey::Escape {
            if self.menu_open {
                self.set_menu_open(false);
                return EventOutcome::Consumed;
            }
            return EventOutcome::PassThrough;
        }

        match self.mode {
            Some(Mode::Desktop) => {
                match key {
                    NavKey::Home => {
                        self.tween_to(0);
                    }
                    NavKey::End => {
                        self.dismiss_cue();
                        self.tween_to(self.last_index());
                    }
                    _ => {
                        if let Some(direction) = key.step() {
                            if direction > 0 {
                                self.dismiss_cue();
                            }
                            self.advance(direction);
                        }
                    }
                }
                EventOutcome::Consumed
            }
            Some(Mode::Mobile) => match key {
                NavKey::Home => {
                    self.surface.scroll_into_view(0, ScrollBehavior::Smooth);
                    EventOutcome::Consumed
                }
                NavKey::End => {
                    self.dismiss_cue();
                    self.surface
                        .scroll_into_view(self.last_index(), ScrollBehavior::Smooth);
                    EventOutcome::Consumed
                }
                _ => EventOutcome::PassThrough,
            },
            None => EventOutcome::PassThrough,
        }
    }
}
