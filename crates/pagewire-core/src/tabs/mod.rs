//! Tab groups with optional auto-advance
//!
//! - `state` - Phase state machine guarding switches
//! - `item` - Element handles making up one tab
//! - `autoplay` - Auto-advance timer with stale-handle detection
//! - `group` - The controller tying them together

mod autoplay;
mod group;
mod item;
mod state;

pub use autoplay::{AutoAdvance, ProgressTimer};
pub use group::{IgnoreReason, SwitchOutcome, TabEvent, TabGroup, TabGroupOptions};
pub use item::{ContentParts, TabItem};
pub use state::{Phase, SwitchCause, Trigger};
