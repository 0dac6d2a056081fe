//! Viewport measurements and the Desktop/Mobile mode predicate

use serde::{Deserialize, Serialize};

use crate::config::NavigatorConfig;

/// Pointer capability reported by the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pointer {
    #[default]
    Fine,
    /// Touch screens and other imprecise pointers
    Coarse,
}

/// Snapshot of the environment's viewport, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    /// Visual viewport height, when the platform exposes one
    pub visual_height: Option<f64>,
    /// Window inner height, when known
    pub inner_height: Option<f64>,
    /// Document client height, always available
    pub client_height: f64,
    pub pointer: Pointer,
}

impl Viewport {
    /// Viewport with a single known height
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            visual_height: None,
            inner_height: Some(height),
            client_height: height,
            pointer: Pointer::Fine,
        }
    }

    pub fn with_pointer(mut self, pointer: Pointer) -> Self {
        self.pointer = pointer;
        self
    }

    pub fn with_visual_height(mut self, height: f64) -> Self {
        self.visual_height = Some(height);
        self
    }

    /// Height used for layout: visual viewport, then inner height, then client height
    pub fn height(&self) -> f64 {
        [self.visual_height, self.inner_height]
            .into_iter()
            .flatten()
            .find(|h| *h > 0.0)
            .unwrap_or(self.client_height)
    }
}

/// Navigation paradigm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Absolutely positioned slides, tweened track offset
    Desktop,
    /// Slides in normal flow, native scroll
    Mobile,
}

impl Mode {
    /// A coarse pointer on a viewport no wider than `mobile_max_width`
    /// selects mobile mode; everything else is desktop
    pub fn detect(viewport: &Viewport, config: &NavigatorConfig) -> Self {
        let coarse = viewport.pointer == Pointer::Coarse;
        if coarse && viewport.width <= config.mobile_max_width {
            Mode::Mobile
        } else {
            Mode::Desktop
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Desktop => "desktop",
            Mode::Mobile => "mobile",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
