//! Resize and orientation handling

use tracing::debug;

use super::state::ResizeKind;
use super::SlideNavigator;
use crate::motion::Clock;
use crate::surface::Surface;
use crate::viewport::{Mode, Viewport};

/// Sub-pixel jitter below this is not a size change
const SIZE_EPSILON: f64 = 0.5;

/// Last accepted viewport size
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ViewportCache {
    pub(crate) width: f64,
    pub(crate) height: f64,
}

impl ViewportCache {
    pub(crate) fn from_viewport(viewport: &Viewport) -> Self {
        Self {
            width: viewport.width,
            height: viewport.height(),
        }
    }

    pub(crate) fn remember(&mut self, viewport: &Viewport) {
        *self = Self::from_viewport(viewport);
    }
}

impl<S: Surface, C: Clock> SlideNavigator<S, C> {
    pub(crate) fn handle_resize(&mut self, kind: ResizeKind) {
        let viewport = self.surface.viewport();
        let width_changed = (viewport.width - self.cache.width).abs() > SIZE_EPSILON;
        let height_delta = (viewport.height() - self.cache.height).abs();

        let real = match kind {
            ResizeKind::Orientation => true,
            ResizeKind::Resize if width_changed => true,
            // Address bar show/hide only changes the height a little
            ResizeKind::Resize if self.mode == Some(Mode::Mobile) => {
                height_delta > self.config.chrome_epsilon
            }
            ResizeKind::Resize => height_delta > SIZE_EPSILON,
        };
        if !real {
            debug!(height_delta, "ignoring browser chrome resize");
            return;
        }

        debug!(
            width = viewport.width,
            height = viewport.height(),
            ?kind,
            "viewport resized"
        );
        self.cache.remember(&viewport);
        self.surface.set_app_height(self.cache.height);

        if self.apply_mode(false) {
            return;
        }
        match self.mode {
            Some(Mode::Desktop) if self.transition.is_idle() => self.layout_desktop(),
            Some(Mode::Desktop) => {
                debug!("transition running, deferring layout to its final frame");
                self.layout_stale = true;
            }
            Some(Mode::Mobile) => {
                self.sync_mobile();
            }
            None => {}
        }
    }
}
