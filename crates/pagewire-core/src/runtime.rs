//! Page runtime
//!
//! Owns the scene and every page component, routes commands to them and
//! advances them frame by frame. All time is page time passed in by the
//! caller, so the same runtime serves the terminal front-end, the headless
//! simulator and the tests.

use std::collections::BTreeSet;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info};

use crate::accordion::Accordion;
use crate::config::{AppConfig, PageConfig};
use crate::countdown::Countdown;
use crate::loader::{Loader, LoaderEvent};
use crate::marquee::{Marquee, MarqueeStatus};
use crate::modal::{ModalController, ModalEvent};
use crate::motion::timing::as_millis;
use crate::motion::SmoothScroll;
use crate::reveal::{Scrub, WordReveal};
use crate::surface::Scene;
use crate::tabs::{TabEvent, TabGroup};
use crate::theme_section::ThemeSections;
use crate::video::{BackgroundVideo, PlayerCommand};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LockOwner {
    Loader,
    Modal,
}

/// Page scroll lock shared by several owners
///
/// The page stays locked while any owner holds it.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    owners: BTreeSet<LockOwner>,
}

impl ScrollLock {
    /// Returns false when `owner` already held the lock
    pub fn acquire(&mut self, owner: LockOwner) -> bool {
        self.owners.insert(owner)
    }

    /// Returns false when `owner` did not hold the lock
    pub fn release(&mut self, owner: LockOwner) -> bool {
        self.owners.remove(&owner)
    }

    pub fn is_locked(&self) -> bool {
        !self.owners.is_empty()
    }
}

/// Input to the page
#[derive(Debug, Clone, PartialEq)]
pub enum PageCommand {
    ClickTab { group: usize, index: usize },
    ToggleFaq { index: usize },
    OpenModal { name: String },
    CloseModal,
    ScrollBy { delta: f64 },
    PlayVideo { index: usize },
    PauseVideo { index: usize },
    VideoDimensions { index: usize, width: f64, height: f64 },
}

/// Everything observable that happened on the page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageEvent {
    Tab {
        group: String,
        #[serde(flatten)]
        event: TabEvent,
    },
    Faq {
        index: usize,
        open: bool,
        at_ms: u64,
    },
    ModalOpened {
        name: String,
        at_ms: u64,
    },
    ModalClosed {
        name: String,
        at_ms: u64,
    },
    Loader {
        stage: LoaderEvent,
        at_ms: u64,
    },
    ScrollLock {
        owner: LockOwner,
        /// Page lock state after the change
        locked: bool,
        at_ms: u64,
    },
    ScrollIgnored {
        delta: f64,
        at_ms: u64,
    },
    ThemeChanged {
        theme: Option<String>,
        bg: Option<String>,
        at_ms: u64,
    },
    Video {
        index: usize,
        #[serde(flatten)]
        command: PlayerCommand,
        at_ms: u64,
    },
    Marquee {
        index: usize,
        status: MarqueeStatus,
        at_ms: u64,
    },
    Reveal {
        index: usize,
        words: usize,
        at_ms: u64,
    },
}

pub struct PageRuntime {
    page: PageConfig,
    scene: Scene,
    tab_groups: Vec<TabGroup>,
    accordion: Accordion,
    modals: ModalController,
    loader: Loader,
    themes: ThemeSections,
    videos: Vec<BackgroundVideo>,
    marquees: Vec<Marquee>,
    reveals: Vec<WordReveal>,
    scrubs: Vec<Scrub>,
    countdown: Option<Countdown>,
    scroll: SmoothScroll,
    /// Scroll position the components last saw
    scroll_y: f64,
    lock: ScrollLock,
    events: Vec<PageEvent>,
}

impl PageRuntime {
    /// Build every component of the configured page and start the intro
    pub fn from_config(config: &AppConfig, now: Duration) -> Result<Self> {
        config.validate()?;
        let page = config.page.clone();
        let motion = &config.motion;
        let mut scene = Scene::new();

        let loader = Loader::from_config(&page.loader, motion, &mut scene);
        let tab_groups = page
            .tab_groups
            .iter()
            .map(|group| TabGroup::from_config(group, motion, now, &mut scene))
            .collect::<Result<Vec<_>>>()?;
        let accordion = Accordion::from_config(&page.faq, motion, &mut scene);
        let modals = ModalController::from_config(&page.modals, motion, &mut scene);

        let themes = ThemeSections::from_config(&page);
        let section = |index: usize| &themes.sections()[index];
        let videos = page
            .videos
            .iter()
            .map(|video| BackgroundVideo::new(video, section(video.section).top))
            .collect();
        let marquees = page
            .marquees
            .iter()
            .map(|marquee| {
                let s = section(marquee.section);
                Marquee::new(marquee, page.viewport_width, s.top, s.height)
            })
            .collect();
        let reveals = page
            .reveals
            .iter()
            .map(|reveal| WordReveal::from_config(reveal, section(reveal.section), motion.easing, &mut scene))
            .collect();
        let scrubs = page
            .scrubs
            .iter()
            .map(|scrub| Scrub::from_config(scrub, section(scrub.section), page.viewport_height, &mut scene))
            .collect();
        let countdown = page.countdown.as_ref().map(Countdown::from_config).transpose()?;

        let max_scroll = themes.document_height() - page.viewport_height;
        let scroll = SmoothScroll::new(motion.scroll.clone(), max_scroll);

        let mut runtime = Self {
            page,
            scene,
            tab_groups,
            accordion,
            modals,
            loader,
            themes,
            videos,
            marquees,
            reveals,
            scrubs,
            countdown,
            scroll,
            scroll_y: 0.0,
            lock: ScrollLock::default(),
            events: Vec::new(),
        };

        info!(
            tab_groups = runtime.tab_groups.len(),
            faq_items = runtime.accordion.len(),
            modals = runtime.modals.modals().len(),
            "Page runtime started"
        );

        let stages = runtime.loader.start(now, &mut runtime.scene);
        runtime.apply_loader(stages, now);

        if let Some(change) = runtime.themes.check(0.0) {
            runtime.events.push(PageEvent::ThemeChanged {
                theme: change.theme,
                bg: change.bg,
                at_ms: as_millis(now),
            });
        }

        let viewport_height = runtime.page.viewport_height;
        for (index, video) in runtime.videos.iter_mut().enumerate() {
            for command in video.init(0.0, viewport_height) {
                runtime.events.push(PageEvent::Video {
                    index,
                    command,
                    at_ms: as_millis(now),
                });
            }
        }
        runtime.scroll_effects(now);

        Ok(runtime)
    }

    pub fn page(&self) -> &PageConfig {
        &self.page
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn tab_groups(&self) -> &[TabGroup] {
        &self.tab_groups
    }

    pub fn accordion(&self) -> &Accordion {
        &self.accordion
    }

    pub fn modals(&self) -> &ModalController {
        &self.modals
    }

    pub fn loader(&self) -> &Loader {
        &self.loader
    }

    pub fn themes(&self) -> &ThemeSections {
        &self.themes
    }

    pub fn videos(&self) -> &[BackgroundVideo] {
        &self.videos
    }

    pub fn marquees(&self) -> &[Marquee] {
        &self.marquees
    }

    pub fn reveals(&self) -> &[WordReveal] {
        &self.reveals
    }

    pub fn scrubs(&self) -> &[Scrub] {
        &self.scrubs
    }

    pub fn countdown(&self) -> Option<&Countdown> {
        self.countdown.as_ref()
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn max_scroll(&self) -> f64 {
        self.scroll.max_scroll()
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.lock.is_locked()
    }

    /// True while anything on the page moves on its own
    pub fn needs_frame(&self) -> bool {
        self.loader.is_running()
            || self.modals.is_animating()
            || self.accordion.is_animating()
            || self.scroll.needs_update()
            || !self.marquees.is_empty()
            || self.reveals.iter().any(WordReveal::is_animating)
            || self.tab_groups.iter().any(TabGroup::needs_frame)
    }

    /// Apply one input; resulting events are returned by the next [`PageRuntime::tick`]
    ///
    /// The page is first brought up to `now`, so the input is judged against
    /// the state at its own time rather than at the last frame.
    pub fn dispatch(&mut self, command: PageCommand, now: Duration) -> Result<()> {
        self.advance(now);
        debug!(?command, at_ms = as_millis(now), "Dispatching page command");
        let at_ms = as_millis(now);

        match command {
            PageCommand::ClickTab { group, index } => {
                let tabs = self
                    .tab_groups
                    .get_mut(group)
                    .ok_or(Error::TabGroupNotFound(group))?;
                tabs.click(index, now, &mut self.scene)?;
            }
            PageCommand::ToggleFaq { index } => {
                let open = self.accordion.toggle(index, now, &mut self.scene)?;
                self.events.push(PageEvent::Faq { index, open, at_ms });
            }
            PageCommand::OpenModal { name } => {
                let events = self.modals.open(&name, now, &mut self.scene)?;
                self.apply_modal(events, now);
            }
            PageCommand::CloseModal => {
                let events = self.modals.close(now, &mut self.scene);
                self.apply_modal(events, now);
            }
            PageCommand::ScrollBy { delta } => {
                if self.lock.is_locked() {
                    debug!(delta, "Scroll input dropped while the page is locked");
                    self.events.push(PageEvent::ScrollIgnored { delta, at_ms });
                } else {
                    self.scroll.scroll_by(delta);
                }
            }
            PageCommand::PlayVideo { index } => {
                let command = self.video_mut(index)?.play();
                self.events.push(PageEvent::Video { index, command, at_ms });
            }
            PageCommand::PauseVideo { index } => {
                let command = self.video_mut(index)?.pause_by_user();
                self.events.push(PageEvent::Video { index, command, at_ms });
            }
            PageCommand::VideoDimensions {
                index,
                width,
                height,
            } => {
                self.video_mut(index)?.on_dimensions(width, height);
            }
        }

        Ok(())
    }

    fn video_mut(&mut self, index: usize) -> Result<&mut BackgroundVideo> {
        self.videos.get_mut(index).ok_or(Error::VideoNotFound(index))
    }

    /// Advance the page to `now` and return every event since the previous tick
    pub fn tick(&mut self, now: Duration) -> Vec<PageEvent> {
        self.advance(now);
        std::mem::take(&mut self.events)
    }

    fn advance(&mut self, now: Duration) {
        let stages = self.loader.tick(now, &mut self.scene);
        self.apply_loader(stages, now);

        let modal_events = self.modals.tick(now, &mut self.scene);
        self.apply_modal(modal_events, now);

        let scroll_y = self.scroll.update(now);
        if scroll_y != self.scroll_y {
            let previous = self.scroll_y;
            self.scroll_y = scroll_y;
            self.on_scroll(previous, now);
        }

        for group in &mut self.tab_groups {
            for event in group.tick(now, &mut self.scene) {
                self.events.push(PageEvent::Tab {
                    group: group.name().to_string(),
                    event,
                });
            }
        }

        self.accordion.tick(now, &mut self.scene);

        for marquee in &mut self.marquees {
            marquee.tick(now);
        }

        for reveal in &mut self.reveals {
            reveal.tick(now, &mut self.scene);
        }
    }

    fn on_scroll(&mut self, previous: f64, now: Duration) {
        let at_ms = as_millis(now);
        let viewport_height = self.page.viewport_height;

        if let Some(change) = self.themes.check(self.scroll_y) {
            debug!(theme = ?change.theme, bg = ?change.bg, "Navigation theme changed");
            self.events.push(PageEvent::ThemeChanged {
                theme: change.theme,
                bg: change.bg,
                at_ms,
            });
        }

        for (index, video) in self.videos.iter_mut().enumerate() {
            if let Some(command) = video.on_scroll(self.scroll_y, viewport_height) {
                self.events.push(PageEvent::Video { index, command, at_ms });
            }
        }

        for (index, marquee) in self.marquees.iter_mut().enumerate() {
            if let Some(status) = marquee.on_scroll(previous, self.scroll_y, viewport_height) {
                self.events.push(PageEvent::Marquee { index, status, at_ms });
            }
        }

        self.scroll_effects(now);
    }

    /// Fire reveals that reached the trigger line and render the scrubs
    fn scroll_effects(&mut self, now: Duration) {
        let viewport_height = self.page.viewport_height;
        for (index, reveal) in self.reveals.iter_mut().enumerate() {
            if reveal.on_scroll(self.scroll_y, viewport_height, now) {
                debug!(index, "Reveal triggered");
                self.events.push(PageEvent::Reveal {
                    index,
                    words: reveal.words().len(),
                    at_ms: as_millis(now),
                });
            }
        }
        for scrub in &mut self.scrubs {
            scrub.on_scroll(self.scroll_y, &mut self.scene);
        }
    }

    fn apply_loader(&mut self, stages: Vec<LoaderEvent>, now: Duration) {
        for stage in stages {
            match stage {
                LoaderEvent::ScrollLocked => self.lock_scroll(LockOwner::Loader, now),
                LoaderEvent::ScrollReleased => self.release_scroll(LockOwner::Loader, now),
                _ => {}
            }
            self.events.push(PageEvent::Loader {
                stage,
                at_ms: as_millis(now),
            });
        }
    }

    fn apply_modal(&mut self, events: Vec<ModalEvent>, now: Duration) {
        let at_ms = as_millis(now);
        for event in events {
            match event {
                ModalEvent::Opened { name } => self.events.push(PageEvent::ModalOpened { name, at_ms }),
                ModalEvent::LockScroll => self.lock_scroll(LockOwner::Modal, now),
                ModalEvent::ReleaseScroll => self.release_scroll(LockOwner::Modal, now),
                ModalEvent::Closed { name } => self.events.push(PageEvent::ModalClosed { name, at_ms }),
            }
        }
    }

    fn lock_scroll(&mut self, owner: LockOwner, now: Duration) {
        if self.lock.acquire(owner) {
            self.scroll.cancel();
            self.events.push(PageEvent::ScrollLock {
                owner,
                locked: true,
                at_ms: as_millis(now),
            });
        }
    }

    fn release_scroll(&mut self, owner: LockOwner, now: Duration) {
        if self.lock.release(owner) {
            self.events.push(PageEvent::ScrollLock {
                owner,
                locked: self.lock.is_locked(),
                at_ms: as_millis(now),
            });
        }
    }
}
