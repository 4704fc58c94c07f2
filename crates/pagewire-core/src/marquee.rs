//! Scroll-aware marquee
//!
//! A looping strip of text whose direction follows the page scroll while it
//! is in view, plus a scroll-linked horizontal shift of the whole track.

use std::time::Duration;

use serde::Serialize;

use crate::config::{MarqueeConfig, MarqueeDirection};
use crate::motion::timing::lerp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarqueeStatus {
    Normal,
    Inverted,
}

/// Speed factor for narrow viewports
pub fn speed_multiplier(viewport_width: f64) -> f64 {
    if viewport_width < 479.0 {
        0.25
    } else if viewport_width < 991.0 {
        0.5
    } else {
        1.0
    }
}

#[derive(Debug, Clone)]
pub struct Marquee {
    text: String,
    /// +1 moves right, -1 moves left
    direction: f64,
    /// Seconds per loop
    cycle: f64,
    scroll_speed: f64,
    copies: u32,
    top: f64,
    height: f64,
    /// Loop progress in [0, 1)
    offset: f64,
    time_scale: f64,
    status: MarqueeStatus,
    /// Track shift in viewport-width units
    shift: f64,
    last_tick: Option<Duration>,
}

impl Marquee {
    /// `top` and `height` locate the marquee's section in the document
    pub fn new(config: &MarqueeConfig, viewport_width: f64, top: f64, height: f64) -> Self {
        let direction = match config.direction {
            MarqueeDirection::Right => 1.0,
            MarqueeDirection::Left => -1.0,
        };
        let cycle = config.speed * (config.content_width / viewport_width) * speed_multiplier(viewport_width);
        let mut marquee = Self {
            text: config.text.clone(),
            direction,
            cycle,
            scroll_speed: config.scroll_speed,
            copies: 1 + config.duplicate,
            top,
            height,
            // Loops start half way through
            offset: 0.5,
            time_scale: direction,
            status: MarqueeStatus::Normal,
            shift: 0.0,
            last_tick: None,
        };
        marquee.shift = marquee.scroll_start();
        marquee
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cycle(&self) -> Duration {
        Duration::from_secs_f64(self.cycle.max(0.0))
    }

    pub fn copies(&self) -> u32 {
        self.copies
    }

    pub fn status(&self) -> MarqueeStatus {
        self.status
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn shift(&self) -> f64 {
        self.shift
    }

    /// Track width in percent of the marquee, covering the shift on both sides
    pub fn track_width(&self) -> f64 {
        self.scroll_speed * 2.0 + 100.0
    }

    fn scroll_start(&self) -> f64 {
        if self.direction < 0.0 {
            self.scroll_speed
        } else {
            -self.scroll_speed
        }
    }

    pub fn is_in_view(&self, scroll_y: f64, viewport_height: f64) -> bool {
        let top = self.top - scroll_y;
        top < viewport_height && top + self.height > 0.0
    }

    /// Advance the loop by the time since the previous tick
    pub fn tick(&mut self, now: Duration) {
        let elapsed = match self.last_tick {
            Some(last) => now.saturating_sub(last).as_secs_f64(),
            None => 0.0,
        };
        self.last_tick = Some(now);
        if self.cycle > 0.0 {
            self.offset = (self.offset + self.time_scale * elapsed / self.cycle).rem_euclid(1.0);
        }
    }

    /// React to a scroll from `previous` to `scroll_y`
    ///
    /// Returns the new status when it changed.
    pub fn on_scroll(&mut self, previous: f64, scroll_y: f64, viewport_height: f64) -> Option<MarqueeStatus> {
        let range = self.height + viewport_height;
        let progress = ((scroll_y + viewport_height - self.top) / range).clamp(0.0, 1.0);
        let start = self.scroll_start();
        self.shift = lerp(start, -start, progress);

        if scroll_y == previous || !self.is_in_view(scroll_y, viewport_height) {
            return None;
        }

        let down = scroll_y > previous;
        let (time_scale, status) = if down {
            (-self.direction, MarqueeStatus::Normal)
        } else {
            (self.direction, MarqueeStatus::Inverted)
        };
        self.time_scale = time_scale;
        if status == self.status {
            return None;
        }
        self.status = status;
        Some(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marquee() -> Marquee {
        // Default marquee lives in the features section: 900..2100
        Marquee::new(&MarqueeConfig::default(), 1280.0, 900.0, 1200.0)
    }

    #[test]
    fn test_speed_multiplier() {
        assert_eq!(speed_multiplier(400.0), 0.25);
        assert_eq!(speed_multiplier(800.0), 0.5);
        assert_eq!(speed_multiplier(1280.0), 1.0);
    }

    #[test]
    fn test_cycle_duration() {
        let m = marquee();
        // 20 * 1600 / 1280
        assert_eq!(m.cycle(), Duration::from_millis(25_000));
        assert_eq!(m.copies(), 3);
        assert_eq!(m.track_width(), 120.0);

        let narrow = Marquee::new(&MarqueeConfig::default(), 800.0, 0.0, 100.0);
        // 20 * 2 * 0.5
        assert_eq!(narrow.cycle(), Duration::from_secs(20));
    }

    #[test]
    fn test_loop_follows_time_scale() {
        let mut m = marquee();
        m.tick(Duration::ZERO);
        m.tick(Duration::from_millis(2500));
        assert!((m.offset() - 0.4).abs() < 1e-9);

        m.on_scroll(300.0, 400.0, 800.0);
        m.tick(Duration::from_millis(5000));
        assert!((m.offset() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_direction_flips_with_scroll_in_view() {
        let mut m = marquee();
        assert_eq!(m.on_scroll(300.0, 400.0, 800.0), None);
        assert_eq!(m.time_scale(), 1.0);

        assert_eq!(m.on_scroll(400.0, 350.0, 800.0), Some(MarqueeStatus::Inverted));
        assert_eq!(m.time_scale(), -1.0);
    }

    #[test]
    fn test_out_of_view_ignores_direction() {
        let mut m = marquee();
        assert_eq!(m.on_scroll(0.0, 50.0, 800.0), None);
        assert_eq!(m.on_scroll(50.0, 0.0, 800.0), None);
        assert_eq!(m.status(), MarqueeStatus::Normal);
        assert_eq!(m.time_scale(), -1.0);
    }

    #[test]
    fn test_scroll_shift_spans_visibility() {
        let mut m = marquee();
        m.on_scroll(0.0, 100.0, 800.0);
        assert_eq!(m.shift(), 10.0);
        m.on_scroll(100.0, 2100.0, 800.0);
        assert_eq!(m.shift(), -10.0);
        m.on_scroll(2100.0, 1100.0, 800.0);
        assert!(m.shift().abs() < 1e-9);
    }
}
