//! Motion system for pagewire
//!
//! Stands in for the tweening engine and the scroll smoother a browser page
//! would load: easing curves, timing helpers, sequenced timelines and a
//! frame-driven smooth scroller.
//!
//! ## L4 Atomic Layer
//! - `easing` - Pure easing functions
//! - `timing` - Time calculation utilities (progress, interpolation)
//! - `config` - Configuration types and duration helpers
//! - `clock` - Page time sources
//!
//! ## L3 Molecular Layer
//! - `timeline` - Sequenced tweens and cues
//! - `smooth_scroll` - Eased page scrolling

// L4 Atomic Layer
pub mod clock;
pub mod config;
pub mod easing;
pub mod timing;

// L3 Molecular Layer
pub mod smooth_scroll;
pub mod timeline;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ScrollConfigExt, TabTiming};
pub use easing::{EasingType, EasingTypeExt};
pub use smooth_scroll::SmoothScroll;
pub use timeline::{Position, Timeline, TweenSpec};
