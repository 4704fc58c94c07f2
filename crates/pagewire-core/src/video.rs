//! Background video player control
//!
//! Each video wraps an embedded player. It is muted on init, optionally
//! resized to its reported aspect ratio, and played only while it is inside
//! the viewport unless the visitor paused it.

use serde::Serialize;
use tracing::debug;

use crate::config::VideoConfig;

const EMBED_BASE: &str = "https://player.vimeo.com/video";

/// Instruction for the embedded player
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum PlayerCommand {
    SetVolume { volume: f64 },
    Play,
    Pause,
}

pub fn embed_url(video_id: &str) -> String {
    format!(
        "{}/{}?api=1&background=1&autoplay=0&loop=1&muted=1",
        EMBED_BASE, video_id
    )
}

#[derive(Debug, Clone)]
pub struct BackgroundVideo {
    video_id: String,
    url: String,
    autoplay: bool,
    paused_by_user: bool,
    update_size: bool,
    /// Document offset of the container top
    top: f64,
    container_width: f64,
    container_height: f64,
    /// Video height / width once known
    aspect_ratio: Option<f64>,
    /// Iframe wrapper width in percent when covering a taller container
    cover_width: Option<f64>,
    playing: bool,
    activated: bool,
    loaded: bool,
    /// Last in-view decision of the scroll autoplay
    in_view: Option<bool>,
}

impl BackgroundVideo {
    pub fn new(config: &VideoConfig, top: f64) -> Self {
        Self {
            video_id: config.video_id.clone(),
            url: embed_url(&config.video_id),
            autoplay: config.autoplay,
            paused_by_user: config.paused_by_user,
            update_size: config.update_size,
            top,
            container_width: config.container_width,
            container_height: config.container_height,
            aspect_ratio: None,
            cover_width: None,
            playing: false,
            activated: false,
            loaded: false,
            in_view: None,
        }
    }

    pub fn video_id(&self) -> &str {
        &self.video_id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_activated(&self) -> bool {
        self.activated
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn paused_by_user(&self) -> bool {
        self.paused_by_user
    }

    pub fn aspect_ratio(&self) -> Option<f64> {
        self.aspect_ratio
    }

    pub fn cover_width(&self) -> Option<f64> {
        self.cover_width
    }

    fn scroll_autoplay(&self) -> bool {
        self.autoplay && !self.paused_by_user
    }

    /// Commands issued when the player is created
    pub fn init(&mut self, scroll_y: f64, viewport_height: f64) -> Vec<PlayerCommand> {
        let mut commands = vec![PlayerCommand::SetVolume { volume: 0.0 }];
        if !self.autoplay {
            commands.push(self.pause());
        } else {
            commands.extend(self.on_scroll(scroll_y, viewport_height));
        }
        commands
    }

    /// Player reported its native size
    pub fn on_dimensions(&mut self, width: f64, height: f64) {
        // Zero or NaN sizes would make the cover width infinite
        if !self.update_size || !(width > 0.0 && height > 0.0) {
            return;
        }
        self.aspect_ratio = Some(height / width);
        self.adjust_sizing();
    }

    fn adjust_sizing(&mut self) {
        let Some(ratio) = self.aspect_ratio else {
            return;
        };
        let container_ratio = self.container_height / self.container_width * 100.0;
        let video_ratio = ratio * 100.0;
        self.cover_width = if container_ratio > video_ratio {
            Some(container_ratio / video_ratio * 100.0)
        } else {
            None
        };
    }

    pub fn is_in_view(&self, scroll_y: f64, viewport_height: f64) -> bool {
        let top = self.top - scroll_y;
        let bottom = top + self.container_height;
        top < viewport_height && bottom > 0.0
    }

    /// Scroll-driven autoplay; issues a command only when visibility changes
    pub fn on_scroll(&mut self, scroll_y: f64, viewport_height: f64) -> Option<PlayerCommand> {
        if !self.scroll_autoplay() {
            return None;
        }
        let in_view = self.is_in_view(scroll_y, viewport_height);
        if self.in_view == Some(in_view) {
            return None;
        }
        self.in_view = Some(in_view);
        Some(if in_view { self.play() } else { self.pause() })
    }

    pub fn play(&mut self) -> PlayerCommand {
        self.activated = true;
        self.playing = true;
        if !self.loaded {
            debug!(video = %self.video_id, "Background video loaded");
            self.loaded = true;
        }
        PlayerCommand::Play
    }

    pub fn pause(&mut self) -> PlayerCommand {
        self.playing = false;
        PlayerCommand::Pause
    }

    /// Pause control; stops the scroll autoplay for good
    pub fn pause_by_user(&mut self) -> PlayerCommand {
        if self.autoplay {
            self.paused_by_user = true;
        }
        self.pause()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video() -> BackgroundVideo {
        BackgroundVideo::new(&VideoConfig::default(), 0.0)
    }

    #[test]
    fn test_embed_url() {
        assert_eq!(
            video().url(),
            "https://player.vimeo.com/video/1019191082?api=1&background=1&autoplay=0&loop=1&muted=1"
        );
    }

    #[test]
    fn test_init_mutes_and_plays_in_view() {
        let mut v = video();
        let commands = v.init(0.0, 800.0);
        assert_eq!(
            commands,
            vec![PlayerCommand::SetVolume { volume: 0.0 }, PlayerCommand::Play]
        );
        assert!(v.is_playing());
        assert!(v.is_loaded());
    }

    #[test]
    fn test_autoplay_off_pauses_once() {
        let config = VideoConfig {
            autoplay: false,
            ..Default::default()
        };
        let mut v = BackgroundVideo::new(&config, 0.0);
        assert_eq!(
            v.init(0.0, 800.0),
            vec![PlayerCommand::SetVolume { volume: 0.0 }, PlayerCommand::Pause]
        );
        assert!(v.on_scroll(5000.0, 800.0).is_none());
    }

    #[test]
    fn test_scroll_commands_only_on_change() {
        let mut v = video();
        v.init(0.0, 800.0);
        assert!(v.on_scroll(300.0, 800.0).is_none());
        // Container spans 0..900
        assert_eq!(v.on_scroll(900.0, 800.0), Some(PlayerCommand::Pause));
        assert!(v.on_scroll(1200.0, 800.0).is_none());
        assert_eq!(v.on_scroll(899.0, 800.0), Some(PlayerCommand::Play));
    }

    #[test]
    fn test_user_pause_stops_scroll_autoplay() {
        let mut v = video();
        v.init(0.0, 800.0);
        assert_eq!(v.pause_by_user(), PlayerCommand::Pause);
        assert!(v.paused_by_user());
        assert!(v.on_scroll(2000.0, 800.0).is_none());
        assert!(v.on_scroll(0.0, 800.0).is_none());
        assert!(!v.is_playing());
    }

    #[test]
    fn test_cover_width_for_taller_container() {
        let mut v = video();
        v.on_dimensions(1920.0, 1080.0);
        // 900/1280 = 70.3125% against 56.25%
        let width = v.cover_width().unwrap();
        assert!((width - 125.0).abs() < 1e-9);

        let config = VideoConfig {
            container_height: 500.0,
            ..Default::default()
        };
        let mut wide = BackgroundVideo::new(&config, 0.0);
        wide.on_dimensions(1920.0, 1080.0);
        assert!(wide.cover_width().is_none());
    }

    #[test]
    fn test_dimensions_ignored_without_update_size() {
        let config = VideoConfig {
            update_size: false,
            ..Default::default()
        };
        let mut v = BackgroundVideo::new(&config, 0.0);
        v.on_dimensions(1920.0, 1080.0);
        assert!(v.aspect_ratio().is_none());
    }

    #[test]
    fn test_degenerate_dimensions_are_skipped() {
        let mut v = video();
        v.on_dimensions(1920.0, 0.0);
        v.on_dimensions(0.0, 1080.0);
        v.on_dimensions(f64::NAN, 1080.0);
        assert_eq!(v.aspect_ratio(), None);
        assert_eq!(v.cover_width(), None);
    }
}
