//! In-memory surface for testing.

use std::collections::HashSet;

use super::{
    BodyClass, Element, FrameDecoration, ScrollBehavior, SlideLayout, SlideRect, Surface,
};
use crate::viewport::{Pointer, Viewport};

/// A surface that records every write instead of rendering.
///
/// Slides default to a flow layout of equal heights matching the viewport.
/// Scroll requests apply instantly regardless of behaviour; the last
/// requested behaviour is kept for assertions.
///
/// # Example
///
/// ```
/// use slidenav_core::surface::{MemorySurface, Surface};
///
/// let surface = MemorySurface::new(3, 1280.0, 800.0);
/// assert_eq!(surface.slide_rect(2).top, 1600.0);
/// ```
#[derive(Debug, Clone)]
pub struct MemorySurface {
    pub viewport: Viewport,
    pub rects: Vec<SlideRect>,
    pub titles: Vec<Option<String>>,
    pub scroll_y: f64,
    pub elements: HashSet<Element>,
    pub observer_supported: bool,

    pub app_height: Option<f64>,
    pub body_classes: HashSet<BodyClass>,
    pub layouts: Vec<SlideLayout>,
    pub track_height: Option<f64>,
    pub track_offset: Option<f64>,
    pub revealed: Vec<bool>,
    pub decorations: Vec<Option<FrameDecoration>>,
    pub dots: Vec<String>,
    pub dot_current: Vec<bool>,
    pub subtitle_revealed: bool,
    pub menu_armed: bool,
    pub cue_hidden: bool,
    pub observed_thresholds: Option<Vec<f64>>,
    pub scroll_listener: bool,
    pub last_scroll_behavior: Option<ScrollBehavior>,

    /// Number of `set_app_height` calls, one per layout pass
    pub app_height_writes: usize,
    /// Number of `mark_revealed` calls
    pub reveal_writes: usize,
    /// Number of track offset writes
    pub offset_writes: usize,
    /// Number of `hide_scroll_cue` calls
    pub cue_writes: usize,
}

impl MemorySurface {
    /// Create a surface with `count` viewport-high slides
    pub fn new(count: usize, width: f64, height: f64) -> Self {
        let rects = (0..count)
            .map(|i| SlideRect {
                top: i as f64 * height,
                height,
            })
            .collect();
        Self::with_rects(rects, Viewport::new(width, height))
    }

    /// Create a surface with explicit flow-layout slide boxes
    pub fn with_rects(rects: Vec<SlideRect>, viewport: Viewport) -> Self {
        let count = rects.len();
        Self {
            viewport,
            rects,
            titles: vec![None; count],
            scroll_y: 0.0,
            elements: [
                Element::DotContainer,
                Element::Subtitle,
                Element::MenuTrigger,
                Element::ScrollCue,
            ]
            .into_iter()
            .collect(),
            observer_supported: true,
            app_height: None,
            body_classes: HashSet::new(),
            layouts: vec![SlideLayout::Flow; count],
            track_height: None,
            track_offset: None,
            revealed: vec![false; count],
            decorations: vec![None; count],
            dots: Vec::new(),
            dot_current: Vec::new(),
            subtitle_revealed: false,
            menu_armed: false,
            cue_hidden: false,
            observed_thresholds: None,
            scroll_listener: false,
            last_scroll_behavior: None,
            app_height_writes: 0,
            reveal_writes: 0,
            offset_writes: 0,
            cue_writes: 0,
        }
    }

    /// Report a different pointer kind
    pub fn with_pointer(mut self, pointer: Pointer) -> Self {
        self.viewport = self.viewport.with_pointer(pointer);
        self
    }

    /// Remove an optional element
    pub fn without(mut self, element: Element) -> Self {
        self.elements.remove(&element);
        self
    }

    /// Disable the visibility observer capability
    pub fn without_observer(mut self) -> Self {
        self.observer_supported = false;
        self
    }

    pub fn has_class(&self, class: BodyClass) -> bool {
        self.body_classes.contains(&class)
    }

    /// Index of the dot carrying `aria-current`, if exactly one does
    pub fn current_dot(&self) -> Option<usize> {
        let mut current = self.dot_current.iter().enumerate().filter(|(_, c)| **c);
        match (current.next(), current.next()) {
            (Some((i, _)), None) => Some(i),
            _ => None,
        }
    }
}

impl Surface for MemorySurface {
    fn slide_count(&self) -> usize {
        self.rects.len()
    }

    fn slide_title(&self, index: usize) -> Option<String> {
        self.titles.get(index).cloned().flatten()
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn slide_rect(&self, index: usize) -> SlideRect {
        self.rects[index]
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn has_element(&self, element: Element) -> bool {
        self.elements.contains(&element)
    }

    fn supports_visibility_observer(&self) -> bool {
        self.observer_supported
    }

    fn set_app_height(&mut self, px: f64) {
        self.app_height = Some(px);
        self.app_height_writes += 1;
    }

    fn set_body_class(&mut self, class: BodyClass, on: bool) {
        if on {
            self.body_classes.insert(class);
        } else {
            self.body_classes.remove(&class);
        }
    }

    fn set_slide_layout(&mut self, index: usize, layout: SlideLayout) {
        self.layouts[index] = layout;
    }

    fn set_track_height(&mut self, height: Option<f64>) {
        self.track_height = height;
    }

    fn set_track_offset(&mut self, offset: Option<f64>) {
        self.track_offset = offset;
        self.offset_writes += 1;
    }

    fn mark_revealed(&mut self, index: usize) {
        self.revealed[index] = true;
        self.reveal_writes += 1;
    }

    fn set_frame_decoration(&mut self, index: usize, decoration: Option<FrameDecoration>) {
        self.decorations[index] = decoration;
    }

    fn scroll_to(&mut self, y: f64, behavior: ScrollBehavior) {
        self.scroll_y = y.max(0.0);
        self.last_scroll_behavior = Some(behavior);
    }

    fn scroll_into_view(&mut self, index: usize, behavior: ScrollBehavior) {
        self.scroll_y = self.rects[index].top;
        self.last_scroll_behavior = Some(behavior);
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
        self.subtitle_revealed = true;
    }

    fn arm_menu_trigger(&mut self) {
        self.menu_armed = true;
    }

    fn hide_scroll_cue(&mut self) {
        self.cue_hidden = true;
        self.cue_writes += 1;
    }

    fn observe_visibility(&mut self, thresholds: &[f64]) {
        self.observed_thresholds = Some(thresholds.to_vec());
    }

    fn disconnect_visibility(&mut self) {
        self.observed_thresholds = None;
    }

    fn set_scroll_listener(&mut self, on: bool) {
        self.scroll_listener = on;
    }
}
