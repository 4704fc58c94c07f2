//! Motion settings as durations

use std::time::Duration;

pub use crate::config::{MotionConfig, ScrollConfig, TabMotionConfig};

pub trait ScrollConfigExt {
    fn animation_duration(&self) -> Duration;

    /// Smooth scrolling on and with a non-zero duration
    fn is_smooth(&self) -> bool;
}

impl ScrollConfigExt for ScrollConfig {
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0
    }
}

/// Tab switch timing as durations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabTiming {
    pub transition: Duration,
    pub stagger: Duration,
    pub progress_collapse: Duration,
}

impl TabTiming {
    /// Every step completes instantly; switches still pass through the
    /// transitioning phase for one tick
    pub fn instant() -> Self {
        Self {
            transition: Duration::ZERO,
            stagger: Duration::ZERO,
            progress_collapse: Duration::ZERO,
        }
    }

    /// Length of a full switch with an outgoing item
    pub fn switch_length(&self) -> Duration {
        (self.stagger + self.transition).max(self.progress_collapse)
    }
}

impl Default for TabTiming {
    fn default() -> Self {
        TabTiming::from(&TabMotionConfig::default())
    }
}

impl From<&TabMotionConfig> for TabTiming {
    fn from(config: &TabMotionConfig) -> Self {
        Self {
            transition: Duration::from_millis(config.transition_ms),
            stagger: Duration::from_millis(config.stagger_ms),
            progress_collapse: Duration::from_millis(config.progress_collapse_ms),
        }
    }
}

/// Default tween duration from motion config
pub fn default_duration(config: &MotionConfig) -> Duration {
    Duration::from_millis(config.default_duration_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scroll_config() {
        let config = ScrollConfig::default();
        assert!(config.smooth_enabled);
        assert_eq!(config.animation_duration(), Duration::from_millis(600));
    }

    #[test]
    fn test_is_smooth() {
        let mut config = ScrollConfig::default();
        assert!(config.is_smooth());

        config.smooth_enabled = false;
        assert!(!config.is_smooth());

        config.smooth_enabled = true;
        config.animation_duration_ms = 0;
        assert!(!config.is_smooth());
    }

    #[test]
    fn test_tab_timing_defaults() {
        let timing = TabTiming::default();
        assert_eq!(timing.transition, Duration::from_millis(800));
        assert_eq!(timing.switch_length(), Duration::from_millis(1100));
        assert_eq!(TabTiming::instant().switch_length(), Duration::ZERO);
    }
}
