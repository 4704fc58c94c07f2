use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default)]
    pub page: PageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds when nothing is animating
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while animations are running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Theme name (e.g., "gruvbox-dark", "nord")
    #[serde(default = "default_theme_name")]
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            theme: default_theme_name(),
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "k", "<C-d>" (Ctrl+d), "<S-Tab>" (Shift+Tab), "<CR>" (Enter), "<Esc>", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Focus the next page component
    #[serde(default = "default_key_focus_next")]
    pub focus_next: String,
    /// Focus the previous page component
    #[serde(default = "default_key_focus_prev")]
    pub focus_prev: String,
    /// Move cursor down inside the focused component
    #[serde(default = "default_key_move_down")]
    pub move_down: String,
    /// Move cursor up inside the focused component
    #[serde(default = "default_key_move_up")]
    pub move_up: String,
    /// Activate the item under the cursor (click)
    #[serde(default = "default_key_select")]
    pub select: String,
    /// Close the open modal
    #[serde(default = "default_key_close")]
    pub close: String,
    /// Scroll the page down
    #[serde(default = "default_key_scroll_down")]
    pub scroll_down: String,
    /// Scroll the page up
    #[serde(default = "default_key_scroll_up")]
    pub scroll_up: String,
    /// Toggle the help overlay
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            focus_next: default_key_focus_next(),
            focus_prev: default_key_focus_prev(),
            move_down: default_key_move_down(),
            move_up: default_key_move_up(),
            select: default_key_select(),
            close: default_key_close(),
            scroll_down: default_key_scroll_down(),
            scroll_up: default_key_scroll_up(),
            help: default_key_help(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_focus_next() -> String { "<Tab>".to_string() }
fn default_key_focus_prev() -> String { "<S-Tab>".to_string() }
fn default_key_move_down() -> String { "j".to_string() }
fn default_key_move_up() -> String { "k".to_string() }
fn default_key_select() -> String { "<CR>".to_string() }
fn default_key_close() -> String { "<Esc>".to_string() }
fn default_key_scroll_down() -> String { "<C-d>".to_string() }
fn default_key_scroll_up() -> String { "<C-u>".to_string() }
fn default_key_help() -> String { "?".to_string() }

/// Easing curve applied to a tween's progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump to the end value on completion
    None,
    Linear,
    Cubic,
    Quintic,
    EaseOut,
    /// Symmetric cubic in-out, the page's house ease
    InOut,
    /// Quadratic in-out, used by progress fills
    Power1InOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Duration used by tweens that do not specify one
    #[serde(default = "default_motion_duration")]
    pub default_duration_ms: u64,
    /// Ease used by tweens that do not specify one
    #[serde(default = "default_motion_easing")]
    pub easing: EasingType,
    #[serde(default)]
    pub tabs: TabMotionConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: default_motion_duration(),
            easing: default_motion_easing(),
            tabs: TabMotionConfig::default(),
            scroll: ScrollConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TabMotionConfig {
    /// Length of each reveal/collapse tween in a tab switch
    #[serde(default = "default_tab_transition")]
    pub transition_ms: u64,
    /// Offset at which the incoming tab starts revealing
    #[serde(default = "default_tab_stagger")]
    pub stagger_ms: u64,
    /// Length of the outgoing progress fill collapse
    #[serde(default = "default_tab_progress_collapse")]
    pub progress_collapse_ms: u64,
}

impl Default for TabMotionConfig {
    fn default() -> Self {
        Self {
            transition_ms: default_tab_transition(),
            stagger_ms: default_tab_stagger(),
            progress_collapse_ms: default_tab_progress_collapse(),
        }
    }
}

/// Smooth page scrolling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate scroll changes instead of jumping
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Length of one scroll animation
    #[serde(default = "default_scroll_duration")]
    pub animation_duration_ms: u64,
    #[serde(default = "default_scroll_easing")]
    pub easing: EasingType,
    /// Pixels moved per scroll key press
    #[serde(default = "default_scroll_step")]
    pub scroll_step: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_scroll_duration(),
            easing: default_scroll_easing(),
            scroll_step: default_scroll_step(),
        }
    }
}

/// Declarative description of the page the runtime drives
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Height of the navigation bar; the theme observer looks at half of it
    pub nav_height: f64,
    pub sections: Vec<SectionConfig>,
    pub tab_groups: Vec<TabGroupConfig>,
    pub faq: FaqConfig,
    pub modals: Vec<ModalConfig>,
    pub marquees: Vec<MarqueeConfig>,
    pub videos: Vec<VideoConfig>,
    pub loader: LoaderConfig,
    /// Word reveals played once when scrolled into view
    pub reveals: Vec<RevealConfig>,
    /// Section effects tied directly to the scroll position
    pub scrubs: Vec<ScrubConfig>,
    pub countdown: Option<CountdownConfig>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1280.0,
            viewport_height: 800.0,
            nav_height: 80.0,
            sections: default_sections(),
            tab_groups: vec![default_tab_group()],
            faq: FaqConfig::default(),
            modals: default_modals(),
            marquees: vec![MarqueeConfig::default()],
            videos: vec![VideoConfig::default()],
            loader: LoaderConfig::default(),
            reveals: default_reveals(),
            scrubs: default_scrubs(),
            countdown: Some(CountdownConfig::default()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionConfig {
    pub name: String,
    /// Value copied onto the nav theme attribute while this section is under the nav
    pub theme: String,
    /// Optional nav background value
    #[serde(default)]
    pub bg: Option<String>,
    pub height: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabGroupConfig {
    pub name: String,
    /// Enable timer-driven auto-advance
    #[serde(default)]
    pub autoplay: bool,
    /// Milliseconds per auto-advance cycle
    #[serde(default = "default_autoplay_duration")]
    pub autoplay_duration_ms: u64,
    #[serde(default)]
    pub contents: Vec<TabContentConfig>,
    #[serde(default)]
    pub visuals: Vec<TabVisualConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabContentConfig {
    pub title: String,
    #[serde(default)]
    pub body: String,
    /// Item has a progress fill
    #[serde(default = "default_true")]
    pub progress: bool,
    /// Item has an expandable details region
    #[serde(default = "default_true")]
    pub details: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabVisualConfig {
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqConfig {
    #[serde(default = "default_faq_duration")]
    pub duration_ms: u64,
    #[serde(default)]
    pub items: Vec<FaqItemConfig>,
}

impl Default for FaqConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_faq_duration(),
            items: default_faq_items(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqItemConfig {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModalConfig {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarqueeDirection {
    Left,
    Right,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarqueeConfig {
    pub text: String,
    /// Index of the section the marquee sits in
    #[serde(default)]
    pub section: usize,
    /// Base speed factor, scaled by content width and viewport
    #[serde(default = "default_marquee_speed")]
    pub speed: f64,
    #[serde(default = "default_marquee_direction")]
    pub direction: MarqueeDirection,
    /// Extra scroll-linked travel, in viewport-width percent
    #[serde(default = "default_marquee_scroll_speed")]
    pub scroll_speed: f64,
    /// Number of extra content copies appended for a seamless loop
    #[serde(default)]
    pub duplicate: u32,
    /// Rendered width of one content copy in pixels
    #[serde(default = "default_marquee_content_width")]
    pub content_width: f64,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            text: "Design  ✦  Build  ✦  Launch  ✦  Repeat".to_string(),
            section: 1,
            speed: default_marquee_speed(),
            direction: default_marquee_direction(),
            scroll_speed: default_marquee_scroll_speed(),
            duplicate: 2,
            content_width: default_marquee_content_width(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoConfig {
    pub video_id: String,
    #[serde(default)]
    pub section: usize,
    /// Start playing automatically (scroll-driven unless paused by the user)
    #[serde(default = "default_true")]
    pub autoplay: bool,
    /// Initial paused-by-user state; scroll autoplay only runs while false
    #[serde(default)]
    pub paused_by_user: bool,
    /// Update the aspect ratio once the player reports its size
    #[serde(default = "default_true")]
    pub update_size: bool,
    #[serde(default = "default_video_width")]
    pub container_width: f64,
    #[serde(default = "default_video_height")]
    pub container_height: f64,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            video_id: "1019191082".to_string(),
            section: 0,
            autoplay: true,
            paused_by_user: false,
            update_size: true,
            container_width: default_video_width(),
            container_height: default_video_height(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Number of header title columns revealed at the end of the intro
    #[serde(default = "default_header_columns")]
    pub header_columns: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            header_columns: default_header_columns(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealConfig {
    pub text: String,
    #[serde(default)]
    pub section: usize,
    /// Distance of the element top below its section top
    #[serde(default)]
    pub offset: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrubKind {
    /// Title rows rise and the section bottom is cut while it scrolls away
    Header,
    /// Section top edge straightens while it scrolls in
    Footer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrubConfig {
    pub kind: ScrubKind,
    #[serde(default)]
    pub section: usize,
    /// Title rows moved by a header scrub
    #[serde(default)]
    pub rows: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownConfig {
    pub label: String,
    /// RFC 3339 instant the countdown runs to
    pub target: String,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            label: "days to go".to_string(),
            target: "2025-10-26T22:00:00Z".to_string(),
        }
    }
}

fn default_sections() -> Vec<SectionConfig> {
    [
        ("hero", "dark", Some("transparent"), 900.0),
        ("features", "light", Some("white"), 1200.0),
        ("faq", "light", None, 1000.0),
        ("footer", "dark", Some("black"), 700.0),
    ]
    .into_iter()
    .map(|(name, theme, bg, height)| SectionConfig {
        name: name.to_string(),
        theme: theme.to_string(),
        bg: bg.map(str::to_string),
        height,
    })
    .collect()
}

fn default_tab_group() -> TabGroupConfig {
    let items = [
        ("Plan", "Map the launch with your team.", "Roadmap board"),
        ("Build", "Ship pages from shared components.", "Component library"),
        ("Measure", "Watch what visitors actually do.", "Analytics view"),
    ];
    TabGroupConfig {
        name: "features".to_string(),
        autoplay: true,
        autoplay_duration_ms: default_autoplay_duration(),
        contents: items
            .iter()
            .map(|(title, body, _)| TabContentConfig {
                title: title.to_string(),
                body: body.to_string(),
                progress: true,
                details: true,
            })
            .collect(),
        visuals: items
            .iter()
            .map(|(_, _, label)| TabVisualConfig {
                label: label.to_string(),
            })
            .collect(),
    }
}

fn default_reveals() -> Vec<RevealConfig> {
    vec![
        RevealConfig {
            text: "Everything your launch needs".to_string(),
            section: 1,
            offset: 80.0,
        },
        RevealConfig {
            text: "Questions, answered".to_string(),
            section: 2,
            offset: 0.0,
        },
    ]
}

fn default_scrubs() -> Vec<ScrubConfig> {
    vec![
        ScrubConfig {
            kind: ScrubKind::Header,
            section: 0,
            rows: 2,
        },
        ScrubConfig {
            kind: ScrubKind::Footer,
            section: 3,
            rows: 0,
        },
    ]
}

fn default_faq_items() -> Vec<FaqItemConfig> {
    [
        ("When does it start?", "Doors open at nine, the first talk starts at ten."),
        ("Is there parking?", "Yes, the garage next to the venue is free for visitors."),
        ("Can I bring a friend?", "Every ticket includes one guest."),
    ]
    .into_iter()
    .map(|(q, a)| FaqItemConfig {
        question: q.to_string(),
        answer: a.to_string(),
    })
    .collect()
}

fn default_modals() -> Vec<ModalConfig> {
    vec![
        ModalConfig {
            name: "contact".to_string(),
            title: "Contact us".to_string(),
            body: "Send us a message and we will get back within a day.".to_string(),
        },
        ModalConfig {
            name: "newsletter".to_string(),
            title: "Stay in the loop".to_string(),
            body: "One email a month, no spam.".to_string(),
        },
    ]
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

fn default_motion_duration() -> u64 {
    400
}

fn default_motion_easing() -> EasingType {
    EasingType::InOut
}

fn default_tab_transition() -> u64 {
    800
}

fn default_tab_stagger() -> u64 {
    300
}

fn default_tab_progress_collapse() -> u64 {
    300
}

fn default_scroll_duration() -> u64 {
    600
}

fn default_scroll_easing() -> EasingType {
    EasingType::EaseOut
}

fn default_scroll_step() -> f64 {
    120.0
}

fn default_autoplay_duration() -> u64 {
    5000
}

fn default_faq_duration() -> u64 {
    900
}

fn default_marquee_speed() -> f64 {
    20.0
}

fn default_marquee_direction() -> MarqueeDirection {
    MarqueeDirection::Left
}

fn default_marquee_scroll_speed() -> f64 {
    10.0
}

fn default_marquee_content_width() -> f64 {
    1600.0
}

fn default_video_width() -> f64 {
    1280.0
}

fn default_video_height() -> f64 {
    900.0
}

fn default_header_columns() -> usize {
    3
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load and validate configuration from a specific file
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> crate::Result<PathBuf> {
        let config_path = Self::config_path();
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/pagewire/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("pagewire")
            .join("config.toml")
    }

    /// Reject structurally invalid pages before anything is built from them
    pub fn validate(&self) -> crate::Result<()> {
        use crate::Error;

        if self.ui.tick_rate_ms == 0 {
            return Err(Error::InvalidDuration("ui.tick_rate_ms".to_string()));
        }

        let page = &self.page;
        if page.viewport_width <= 0.0 || page.viewport_height <= 0.0 {
            return Err(Error::Config(
                "page viewport dimensions must be positive".to_string(),
            ));
        }

        for section in &page.sections {
            if section.height <= 0.0 {
                return Err(Error::Config(format!(
                    "section '{}' must have a positive height",
                    section.name
                )));
            }
        }

        for group in &page.tab_groups {
            if group.contents.len() != group.visuals.len() {
                return Err(Error::MismatchedTabItems {
                    group: group.name.clone(),
                    contents: group.contents.len(),
                    visuals: group.visuals.len(),
                });
            }
            if group.autoplay_duration_ms == 0 {
                return Err(Error::InvalidDuration(format!(
                    "tab group '{}' autoplay_duration_ms",
                    group.name
                )));
            }
        }

        let mut names = HashSet::new();
        for modal in &page.modals {
            if modal.name.is_empty() {
                return Err(Error::Config("modal name cannot be empty".to_string()));
            }
            if !names.insert(modal.name.as_str()) {
                return Err(Error::Config(format!(
                    "duplicate modal name '{}'",
                    modal.name
                )));
            }
        }

        for marquee in &page.marquees {
            if marquee.section >= page.sections.len() {
                return Err(Error::Config(format!(
                    "marquee '{}' refers to missing section {}",
                    marquee.text, marquee.section
                )));
            }
            if marquee.content_width <= 0.0 || marquee.speed <= 0.0 {
                return Err(Error::Config(format!(
                    "marquee '{}' needs a positive speed and content width",
                    marquee.text
                )));
            }
        }

        for video in &page.videos {
            if video.section >= page.sections.len() {
                return Err(Error::Config(format!(
                    "video {} refers to missing section {}",
                    video.video_id, video.section
                )));
            }
            if !(video.container_width > 0.0 && video.container_height > 0.0) {
                return Err(Error::Config(format!(
                    "video {} needs a positive container size",
                    video.video_id
                )));
            }
        }

        for reveal in &page.reveals {
            if reveal.section >= page.sections.len() {
                return Err(Error::Config(format!(
                    "reveal '{}' refers to missing section {}",
                    reveal.text, reveal.section
                )));
            }
            if reveal.text.split_whitespace().next().is_none() {
                return Err(Error::Config("reveal text cannot be empty".to_string()));
            }
        }

        for scrub in &page.scrubs {
            if scrub.section >= page.sections.len() {
                return Err(Error::Config(format!(
                    "{:?} scrub refers to missing section {}",
                    scrub.kind, scrub.section
                )));
            }
        }

        if let Some(countdown) = &page.countdown {
            chrono::DateTime::parse_from_rfc3339(&countdown.target)?;
        }

        Ok(())
    }
}
