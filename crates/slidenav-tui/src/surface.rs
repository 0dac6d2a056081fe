//! Terminal-backed presentation surface
//!
//! Stands in for the document: it converts terminal cells to CSS pixels,
//! emulates native scrolling (including smooth scroll-into-view) and plays the
//! visibility observer by reporting per-slide visibility ratios. Writes from
//! the navigator are stored and read back by the widgets at render time.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use slidenav_core::config::UiConfig;
use slidenav_core::motion::{Clock, EasingType, SystemClock, Tween};
use slidenav_core::surface::{
    BodyClass, Element, FrameDecoration, ScrollBehavior, SlideLayout, SlideRect, Surface,
};
use slidenav_core::{NavEvent, Pointer, Viewport};

use crate::deck::Deck;

/// Duration of a smooth native scroll
const SMOOTH_SCROLL: Duration = Duration::from_millis(360);
/// Duration of the subtitle fade-in
const SUBTITLE_FADE: Duration = Duration::from_millis(400);

/// Size of one terminal cell in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub width: f64,
    pub height: f64,
}

impl CellMetrics {
    pub fn from_config(ui: &UiConfig) -> Self {
        Self {
            width: ui.cell_width_px.max(1.0),
            height: ui.cell_height_px.max(1.0),
        }
    }

    /// Pixels to whole rows, rounded to the nearest row
    #[inline]
    pub fn rows(&self, px: f64) -> i32 {
        (px / self.height).round() as i32
    }

    #[inline]
    pub fn px(&self, rows: u16) -> f64 {
        rows as f64 * self.height
    }
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self::from_config(&UiConfig::default())
    }
}

pub struct TerminalSurface<C: Clock = SystemClock> {
    clock: C,
    deck: Deck,
    metrics: CellMetrics,
    cols: u16,
    rows: u16,
    pointer: Pointer,

    scroll_y: f64,
    scroll_anim: Option<Tween>,
    scroll_listener: bool,
    /// Thresholds while the visibility observer is attached
    observer: Option<Vec<f64>>,
    /// Threshold bucket last reported per slide
    visibility_buckets: Vec<Option<usize>>,
    subtitle_revealed_at: Option<Instant>,
    subtitle_settled: bool,

    app_height: Option<f64>,
    classes: HashSet<BodyClass>,
    layouts: Vec<SlideLayout>,
    track_height: Option<f64>,
    track_offset: Option<f64>,
    revealed: Vec<bool>,
    decorations: Vec<Option<FrameDecoration>>,
    dots: Vec<String>,
    dot_current: Vec<bool>,
    menu_armed: bool,
    cue_hidden: bool,

    events: Vec<NavEvent>,
}

impl<C: Clock> TerminalSurface<C> {
    /// Create a surface for `deck` filling a `cols` x `rows` slide area
    pub fn new(deck: Deck, clock: C, metrics: CellMetrics, cols: u16, rows: u16) -> Self {
        let count = deck.len();
        Self {
            clock,
            deck,
            metrics,
            cols,
            rows,
            pointer: Pointer::Fine,
            scroll_y: 0.0,
            scroll_anim: None,
            scroll_listener: false,
            observer: None,
            visibility_buckets: vec![None; count],
            subtitle_revealed_at: None,
            subtitle_settled: false,
            app_height: None,
            classes: HashSet::new(),
            layouts: vec![SlideLayout::Flow; count],
            track_height: None,
            track_offset: None,
            revealed: vec![false; count],
            decorations: vec![None; count],
            dots: Vec::new(),
            dot_current: Vec::new(),
            menu_armed: false,
            cue_hidden: false,
            events: Vec::new(),
        }
    }

    pub fn with_pointer(mut self, pointer: Pointer) -> Self {
        self.pointer = pointer;
        self
    }

    /// The slide area changed size
    pub fn set_terminal_size(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.set_scroll(self.scroll_y);
    }

    /// Flip between fine and coarse pointer, returning the new kind
    pub fn toggle_pointer(&mut self) -> Pointer {
        self.pointer = match self.pointer {
            Pointer::Fine => Pointer::Coarse,
            Pointer::Coarse => Pointer::Fine,
        };
        self.pointer
    }

    /// Native scroll by `dy` pixels, relative to where any running smooth
    /// scroll is heading
    pub fn scroll_by(&mut self, dy: f64, behavior: ScrollBehavior) {
        let base = self
            .scroll_anim
            .as_ref()
            .map_or(self.scroll_y, |anim| anim.to());
        self.scroll_to(base + dy, behavior);
    }

    /// Advance native animations and sample visibility; queued events are
    /// collected with [`TerminalSurface::drain_events`]
    pub fn tick(&mut self) {
        let now = self.clock.now();
        if let Some(anim) = &self.scroll_anim {
            let y = anim.sample(now);
            if anim.is_complete(now) {
                self.scroll_anim = None;
            }
            self.set_scroll(y);
        }

        if let Some(at) = self.subtitle_revealed_at {
            if !self.subtitle_settled && now.saturating_duration_since(at) >= SUBTITLE_FADE {
                self.subtitle_settled = true;
                self.events.push(NavEvent::SubtitleTransitionEnd);
            }
        }

        self.sample_visibility();
    }

    pub fn drain_events(&mut self) -> Vec<NavEvent> {
        std::mem::take(&mut self.events)
    }

    /// A native animation is running and needs frames
    pub fn is_animating(&self) -> bool {
        self.scroll_anim.is_some()
            || (self.subtitle_revealed_at.is_some() && !self.subtitle_settled)
    }

    // Render-side accessors

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[inline]
    pub fn metrics(&self) -> CellMetrics {
        self.metrics
    }

    #[inline]
    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    pub fn has_class(&self, class: BodyClass) -> bool {
        self.classes.contains(&class)
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn decoration(&self, index: usize) -> Option<FrameDecoration> {
        self.decorations.get(index).copied().flatten()
    }

    pub fn dots(&self) -> &[String] {
        &self.dots
    }

    pub fn is_dot_current(&self, index: usize) -> bool {
        self.dot_current.get(index).copied().unwrap_or(false)
    }

    pub fn subtitle_visible(&self) -> bool {
        self.subtitle_revealed_at.is_some()
    }

    pub fn is_menu_armed(&self) -> bool {
        self.menu_armed
    }

    pub fn is_cue_visible(&self) -> bool {
        !self.cue_hidden
    }

    /// Height of one page: the published app height, else the viewport
    pub fn page_height(&self) -> f64 {
        self.app_height
            .filter(|h| *h > 0.0)
            .unwrap_or_else(|| self.metrics.px(self.rows))
    }

    /// Top edge of a slide relative to the top of the slide area, in pixels
    pub fn screen_top(&self, index: usize) -> f64 {
        match self.layouts.get(index) {
            Some(SlideLayout::Absolute { top, .. }) => top + self.track_offset.unwrap_or(0.0),
            _ => {
                let shift = self.decoration(index).map_or(0.0, |d| d.translate_y);
                self.slide_rect(index).top - self.scroll_y + shift
            }
        }
    }

    fn max_scroll(&self) -> f64 {
        let document = self.deck.len() as f64 * self.page_height();
        (document - self.metrics.px(self.rows)).max(0.0)
    }

    fn set_scroll(&mut self, y: f64) {
        let y = y.clamp(0.0, self.max_scroll());
        if (y - self.scroll_y).abs() > f64::EPSILON {
            self.scroll_y = y;
            if self.scroll_listener {
                self.events.push(NavEvent::Scroll);
            }
        }
    }

    fn sample_visibility(&mut self) {
        let Some(thresholds) = &self.observer else {
            return;
        };
        let top = self.scroll_y;
        let bottom = top + self.metrics.px(self.rows);
        for i in 0..self.deck.len() {
            let rect = self.slide_rect(i);
            let overlap = (rect.top + rect.height).min(bottom) - rect.top.max(top);
            let ratio = if rect.height > 0.0 {
                (overlap.max(0.0) / rect.height).min(1.0)
            } else {
                0.0
            };
            let bucket = thresholds.iter().filter(|t| ratio >= **t).count();
            if self.visibility_buckets[i] != Some(bucket) {
                self.visibility_buckets[i] = Some(bucket);
                self.events.push(NavEvent::Visibility { index: i, ratio });
            }
        }
    }
}

impl<C: Clock> Surface for TerminalSurface<C> {
    fn slide_count(&self) -> usize {
        self.deck.len()
    }

    fn slide_title(&self, index: usize) -> Option<String> {
        self.deck.slides.get(index).and_then(|s| s.title.clone())
    }

    fn viewport(&self) -> Viewport {
        Viewport::new(self.cols as f64 * self.metrics.width, self.metrics.px(self.rows))
            .with_pointer(self.pointer)
    }

    fn slide_rect(&self, index: usize) -> SlideRect {
        let height = self.page_height();
        SlideRect {
            top: index as f64 * height,
            height,
        }
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn has_element(&self, element: Element) -> bool {
        match element {
            Element::Subtitle => self.deck.subtitle.is_some(),
            Element::DotContainer | Element::MenuTrigger | Element::ScrollCue => true,
        }
    }

    fn supports_visibility_observer(&self) -> bool {
        true
    }

    fn set_app_height(&mut self, px: f64) {
        self.app_height = Some(px);
    }

    fn set_body_class(&mut self, class: BodyClass, on: bool) {
        if on {
            self.classes.insert(class);
        } else {
            self.classes.remove(&class);
        }
    }

    fn set_slide_layout(&mut self, index: usize, layout: SlideLayout) {
        if let Some(slot) = self.layouts.get_mut(index) {
            *slot = layout;
        }
    }

    fn set_track_height(&mut self, height: Option<f64>) {
        self.track_height = height;
    }

    fn set_track_offset(&mut self, offset: Option<f64>) {
        self.track_offset = offset;
    }

    fn mark_revealed(&mut self, index: usize) {
        if let Some(slot) = self.revealed.get_mut(index) {
            *slot = true;
        }
    }

    fn set_frame_decoration(&mut self, index: usize, decoration: Option<FrameDecoration>) {
        if let Some(slot) = self.decorations.get_mut(index) {
            *slot = decoration;
        }
    }

    fn scroll_to(&mut self, y: f64, behavior: ScrollBehavior) {
        match behavior {
            ScrollBehavior::Instant => {
                self.scroll_anim = None;
                self.set_scroll(y);
            }
            ScrollBehavior::Smooth => {
                let target = y.clamp(0.0, self.max_scroll());
                let now = self.clock.now();
                match &mut self.scroll_anim {
                    Some(anim) => anim.retarget(now, target),
                    None => {
                        self.scroll_anim = Some(Tween::new(
                            now,
                            self.scroll_y,
                            target,
                            SMOOTH_SCROLL,
                            EasingType::EaseOutCubic,
                        ))
                    }
                }
            }
        }
    }

    fn scroll_into_view(&mut self, index: usize, behavior: ScrollBehavior) {
        let top = self.slide_rect(index).top;
        self.scroll_to(top, behavior);
    }

    fn build_dots(&mut self, labels: &[String]) {
        self.dots = labels.to_vec();
        self.dot_current = vec![false; labels.len()];
    }

    fn set_dot_current(&mut self, index: usize, current: bool) {
        if let Some(slot) = self.dot_current.get_mut(index) {
            *slot = current;
        }
    }

    fn reveal_subtitle(&mut self) {
        if self.subtitle_revealed_at.is_none() {
            self.subtitle_revealed_at = Some(self.clock.now());
        }
    }

    fn arm_menu_trigger(&mut self) {
        self.menu_armed = true;
    }

    fn hide_scroll_cue(&mut self) {
        self.cue_hidden = true;
    }

    fn observe_visibility(&mut self, thresholds: &[f64]) {
        self.observer = Some(thresholds.to_vec());
        // Fresh observers report every target once
        self.visibility_buckets.iter_mut().for_each(|b| *b = None);
    }

    fn disconnect_visibility(&mut self) {
        self.observer = None;
    }

    fn set_scroll_listener(&mut self, on: bool) {
        self.scroll_listener = on;
    }
}
