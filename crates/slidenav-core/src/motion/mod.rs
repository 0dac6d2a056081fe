//! Time-based motion primitives
//!
//! ## Atoms
//! - `easing` - Pure easing curves mapping [0, 1] to [0, 1]
//! - `clock` - Injected time source plus progress/interpolation helpers
//!
//! ## Molecule
//! - `tween` - One eased interpolation of a single offset

pub mod clock;
pub mod easing;
pub mod tween;

pub use clock::{lerp, progress, Clock, ManualClock, SystemClock};
pub use easing::{EasingType, EasingTypeExt};
pub use tween::Tween;
