//! Smooth page scrolling
//!
//! Wheel and key input only queue a delta; the page position moves when the
//! frame loop calls `update()`.

use std::time::Duration;

use super::config::{ScrollConfig, ScrollConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp, progress};

/// Glide from one scroll offset to another
#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Duration,
    from: f64,
    to: f64,
    duration: Duration,
    easing: EasingType,
}

/// Page scroll controller
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    animation: Option<ActiveAnimation>,
    config: ScrollConfig,
    current: f64,
    /// Largest reachable scroll position
    max_scroll: f64,
    /// Input queued since the last frame
    pending_delta: f64,
}

impl SmoothScroll {
    pub fn new(config: ScrollConfig, max_scroll: f64) -> Self {
        Self {
            animation: None,
            config,
            current: 0.0,
            max_scroll: max_scroll.max(0.0),
            pending_delta: 0.0,
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// True while the next frame would move the page
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.animation.is_some() || self.pending_delta != 0.0
    }

    /// Where the page comes to rest, queued input included
    pub fn target(&self) -> f64 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current)
    }

    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn max_scroll(&self) -> f64 {
        self.max_scroll
    }

    /// Jump without animating
    pub fn set(&mut self, position: f64) {
        self.animation = None;
        self.current = position.clamp(0.0, self.max_scroll);
        self.pending_delta = 0.0;
    }

    /// Queue a scroll; positive moves down the page
    pub fn scroll_by(&mut self, delta: f64) {
        if !self.config.is_smooth() {
            self.current = (self.current + delta).clamp(0.0, self.max_scroll);
            self.animation = None;
            return;
        }

        self.pending_delta += delta;
    }

    /// Apply queued input, step the glide and return the position at `now`
    pub fn update(&mut self, now: Duration) -> f64 {
        if self.pending_delta != 0.0 {
            let new_target = (self.target() + self.pending_delta).clamp(0.0, self.max_scroll);
            self.pending_delta = 0.0;

            if new_target != self.current {
                self.animation = Some(ActiveAnimation {
                    start: now,
                    from: self.current,
                    to: new_target,
                    duration: self.config.animation_duration(),
                    easing: self.config.easing,
                });
            }
        }

        if let Some(ref anim) = self.animation {
            if is_complete(anim.start, anim.duration, now) {
                self.current = anim.to;
                self.animation = None;
            } else {
                let t = progress(anim.start, anim.duration, now);
                self.current = lerp(anim.from, anim.to, anim.easing.apply(t));
            }
        }

        self.current
    }

    /// Stop where the page currently is
    pub fn cancel(&mut self) {
        self.animation = None;
        self.pending_delta = 0.0;
    }
}
