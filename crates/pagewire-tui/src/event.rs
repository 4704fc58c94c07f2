use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use pagewire_core::config::UiConfig;

/// Terminal input paced by the frame rate
pub struct EventHandler {
    tick_rate: Duration,
    frame: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64, animation_fps: u32) -> Self {
        let fps = animation_fps.max(1) as u64;
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            frame: Duration::from_micros(1_000_000 / fps),
        }
    }

    pub fn from_config(ui: &UiConfig) -> Self {
        Self::new(ui.tick_rate_ms, ui.animation_fps)
    }

    /// How long to wait for input; animation frames poll faster than idle ticks
    pub fn poll_timeout(&self, animating: bool) -> Duration {
        if animating {
            self.frame.min(self.tick_rate)
        } else {
            self.tick_rate
        }
    }

    /// Wait for input; a timeout becomes a frame tick
    pub fn next(&self, animating: bool) -> Result<Option<AppEvent>> {
        if !event::poll(self.poll_timeout(animating))? {
            return Ok(Some(AppEvent::Tick));
        }
        Ok(match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
            Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
            _ => None,
        })
    }
}

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    /// Nothing arrived before the poll timeout
    Tick,
}
