//! Kinema Animation Engine
//!
//! Interval interpolation driven by a monotonically increasing progress value.
//!
//! # Features
//!
//! - **Easing Curves**: The full Penner set (sine through bounce), looked up
//!   by name or used directly as enum values
//! - **Interval Interpolation**: Registered [start, end) windows with
//!   per-frame callbacks and a finish-once guarantee
//! - **Frame Scheduling**: Wall-clock driven ticking with restart/replay
//!
//! # Example
//!
//! ```rust
//! use kinema_animation::{Easing, Interpolator};
//!
//! let mut interpolator = Interpolator::new();
//! interpolator
//!     .register(0.0, 1000.0, Easing::EaseOutQuad, |value, animating| {
//!         if animating {
//!             println!("progress: {value}");
//!         } else {
//!             println!("done at {value}");
//!         }
//!     })
//!     .unwrap();
//!
//! interpolator.initialize(0.0);
//! interpolator.update(500.0);
//! assert!(interpolator.is_running());
//! ```

pub mod easing;
pub mod error;
pub mod interpolator;
pub mod scheduler;

pub use easing::Easing;
pub use error::{AnimationError, Result};
pub use interpolator::{lerp, scaled_progress, InterpolationCallback, Interpolator};
pub use scheduler::{AnimationScheduler, InterpolatorId};
