pub mod accordion;
pub mod config;
pub mod countdown;
pub mod error;
pub mod loader;
pub mod marquee;
pub mod modal;
pub mod motion;
pub mod reveal;
pub mod runtime;
pub mod scheduler;
pub mod surface;
pub mod tabs;
pub mod theme_section;
pub mod video;

pub use config::{AppConfig, EasingType, ScrollConfig};
pub use error::{Error, Result};
pub use runtime::{LockOwner, PageCommand, PageEvent, PageRuntime, ScrollLock};
pub use scheduler::FrameScheduler;
pub use surface::{ElementId, Prop, Scene, Surface};
pub use tabs::{SwitchCause, TabEvent, TabGroup};
