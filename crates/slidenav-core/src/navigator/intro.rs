//! Intro sequence, indicator dots and the menu trigger

use std::time::{Duration, Instant};

use tracing::{debug, info};

use super::SlideNavigator;
use crate::motion::Clock;
use crate::surface::{BodyClass, Element, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum IntroPhase {
    #[default]
    NotStarted,
    /// Waiting to reveal the subtitle
    Waiting { reveal_at: Instant },
    /// Subtitle transition running; finalise on transition end or fallback
    Revealing { fallback_at: Instant },
    Done,
}

/// What the intro asks the navigator to do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IntroStep {
    Nothing,
    RevealSubtitle,
    Finalize,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct IntroSequencer {
    phase: IntroPhase,
}

impl IntroSequencer {
    pub(crate) fn begin(&mut self, now: Instant, delay: Duration) {
        if self.phase == IntroPhase::NotStarted {
            self.phase = IntroPhase::Waiting {
                reveal_at: now + delay,
            };
        }
    }

    /// Advance timers
    pub(crate) fn poll(
        &mut self,
        now: Instant,
        has_subtitle: bool,
        fallback: Duration,
    ) -> IntroStep {
        match self.phase {
            IntroPhase::Waiting { reveal_at } if now >= reveal_at => {
                if has_subtitle {
                    self.phase = IntroPhase::Revealing {
                        fallback_at: now + fallback,
                    };
                    IntroStep::RevealSubtitle
                } else {
                    self.phase = IntroPhase::Done;
                    IntroStep::Finalize
                }
            }
            IntroPhase::Revealing { fallback_at } if now >= fallback_at => {
                self.phase = IntroPhase::Done;
                IntroStep::Finalize
            }
            _ => IntroStep::Nothing,
        }
    }

    /// Subtitle reported the end of its transition
    pub(crate) fn transition_end(&mut self) -> IntroStep {
        if matches!(self.phase, IntroPhase::Revealing { .. }) {
            self.phase = IntroPhase::Done;
            IntroStep::Finalize
        } else {
            IntroStep::Nothing
        }
    }

    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        match self.phase {
            IntroPhase::Waiting { reveal_at } => Some(reveal_at),
            IntroPhase::Revealing { fallback_at } => Some(fallback_at),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn is_done(&self) -> bool {
        self.phase == IntroPhase::Done
    }
}

impl<S: Surface, C: Clock> SlideNavigator<S, C> {
    /// Initialise the page: publish the viewport height, lock scrolling,
    /// lay out the current mode and schedule the intro.
    pub fn start(&mut self) {
        let viewport = self.surface.viewport();
        self.viewport = viewport;
        self.cache.remember(&viewport);
        self.surface.set_app_height(self.cache.height);
        self.surface.set_body_class(BodyClass::ScrollLock, true);
        self.apply_mode(true);
        self.intro.begin(self.clock.now(), self.config.intro_delay());
        debug!(slides = self.slide_count, "navigator started");
    }

    /// Earliest pending timer, so hosts can sleep until it fires
    pub fn next_deadline(&self) -> Option<Instant> {
        self.intro.next_deadline()
    }

    pub(crate) fn poll_intro(&mut self) {
        let has_subtitle = self.surface.has_element(Element::Subtitle);
        let step = self
            .intro
            .poll(self.clock.now(), has_subtitle, self.config.intro_fallback());
        self.run_intro_step(step);
    }

    pub(crate) fn subtitle_transition_end(&mut self) {
        let step = self.intro.transition_end();
        self.run_intro_step(step);
    }

    fn run_intro_step(&mut self, step: IntroStep) {
        match step {
            IntroStep::Nothing => {}
            IntroStep::RevealSubtitle => {
                debug!("revealing intro subtitle");
                self.surface.reveal_subtitle();
            }
            IntroStep::Finalize => self.finalize_intro(),
        }
    }

    fn finalize_intro(&mut self) {
        if self.surface.has_element(Element::DotContainer) {
            self.build_dots();
        }
        if self.surface.has_element(Element::MenuTrigger) {
            self.surface.arm_menu_trigger();
            self.menu_armed = true;
        }
        self.surface.set_body_class(BodyClass::ScrollLock, false);
        self.apply_mode(true);
        self.set_current(self.index);
        info!(mode = ?self.mode, "intro finished, navigation ready");
    }

    fn build_dots(&mut self) {
        let labels: Vec<String> = (0..self.slide_count)
            .map(|i| match self.surface.slide_title(i) {
                Some(title) => format!("Go to slide {}: {}", i + 1, title),
                None => format!("Go to slide {}", i + 1),
            })
            .collect();
        self.surface.build_dots(&labels);
        self.dots_built = true;
        self.refresh_dots();
    }

    pub(crate) fn refresh_dots(&mut self) {
        if !self.dots_built {
            return;
        }
        for i in 0..self.slide_count {
            self.surface.set_dot_current(i, i == self.index);
        }
    }

    pub(crate) fn toggle_menu(&mut self) -> bool {
        if !self.menu_armed {
            return false;
        }
        self.set_menu_open(!self.menu_open);
        true
    }

    pub(crate) fn set_menu_open(&mut self, open: bool) {
        self.menu_open = open;
        self.surface.set_body_class(BodyClass::MenuActive, open);
    }
}
