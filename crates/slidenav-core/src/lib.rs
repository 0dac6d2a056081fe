pub mod config;
pub mod error;
pub mod event;
pub mod input;
pub mod motion;
pub mod navigator;
pub mod surface;
pub mod viewport;

pub use config::{AppConfig, EasingType, NavigatorConfig};
pub use error::{Error, Result};
pub use event::{EventOutcome, NavEvent, TweenOutcome};
pub use input::NavKey;
pub use motion::{Clock, ManualClock, SystemClock};
pub use navigator::SlideNavigator;
pub use surface::{MemorySurface, Surface};
pub use viewport::{Mode, Pointer, Viewport};
