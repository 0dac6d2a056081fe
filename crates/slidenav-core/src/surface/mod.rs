//! The presentation tree the navigator drives
//!
//! A `Surface` is the DOM-like collaborator: it owns slide containers, the
//! track element, the dot strip and body classes. The navigator only reads
//! measurements from it and writes classes, styles and attributes back.

mod memory;

pub use memory::MemorySurface;

use crate::viewport::Viewport;

/// Presentation classes toggled on the document body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyClass {
    /// Native-scroll layout is active
    Mobile,
    /// Page scrolling is locked (intro still running)
    ScrollLock,
    /// Menu overlay is open
    MenuActive,
}

impl BodyClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyClass::Mobile => "is-mobile",
            BodyClass::ScrollLock => "no-scroll",
            BodyClass::MenuActive => "menu-active",
        }
    }
}

/// Optional page elements; features depending on them are skipped when absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    DotContainer,
    Subtitle,
    MenuTrigger,
    /// "Scroll down" hint shown until the visitor first navigates
    ScrollCue,
}

/// Slide box in document coordinates under flow layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideRect {
    pub top: f64,
    pub height: f64,
}

/// Positioning applied to one slide container
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlideLayout {
    /// Normal document flow
    Flow,
    /// Stacked inside the track
    Absolute { top: f64, height: f64 },
}

/// Fade/shift applied to a slide's inner frame in mobile mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameDecoration {
    pub opacity: f64,
    pub translate_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Instant,
    Smooth,
}

pub trait Surface {
    // Measurements

    fn slide_count(&self) -> usize;

    /// Human-readable slide title used in indicator labels
    fn slide_title(&self, _index: usize) -> Option<String> {
        None
    }

    /// Current viewport snapshot
    fn viewport(&self) -> Viewport;

    /// Slide box under flow layout
    fn slide_rect(&self, index: usize) -> SlideRect;

    /// Document scroll position
    fn scroll_y(&self) -> f64;

    fn has_element(&self, element: Element) -> bool;

    /// Whether per-slide visibility can be observed
    fn supports_visibility_observer(&self) -> bool;

    // Mutations

    /// Publish the usable viewport height (the `--app-vh` property)
    fn set_app_height(&mut self, px: f64);

    fn set_body_class(&mut self, class: BodyClass, on: bool);

    fn set_slide_layout(&mut self, index: usize, layout: SlideLayout);

    /// Size the track element; `None` removes the explicit height
    fn set_track_height(&mut self, height: Option<f64>);

    /// Translate the track; `None` detaches the transform
    fn set_track_offset(&mut self, offset: Option<f64>);

    /// Add the one-way `revealed` class
    fn mark_revealed(&mut self, index: usize);

    fn set_frame_decoration(&mut self, index: usize, decoration: Option<FrameDecoration>);

    fn scroll_to(&mut self, y: f64, behavior: ScrollBehavior);

    fn scroll_into_view(&mut self, index: usize, behavior: ScrollBehavior);

    /// Create one indicator button per label
    fn build_dots(&mut self, labels: &[String]);

    /// Set or clear `aria-current` on an indicator button
    fn set_dot_current(&mut self, index: usize, current: bool);

    fn reveal_subtitle(&mut self);

    /// Start listening for menu trigger activation
    fn arm_menu_trigger(&mut self);

    /// Hide the scroll cue for good
    fn hide_scroll_cue(&mut self);

    fn observe_visibility(&mut self, thresholds: &[f64]);

    fn disconnect_visibility(&mut self);

    fn set_scroll_listener(&mut self, on: bool);
}
