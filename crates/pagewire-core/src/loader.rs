//! Intro loader
//!
//! Plays once on page start: the page is locked and the cursor set to wait,
//! a panel wipes in, the logo rises, holds, leaves with the background, the
//! loader hides and the header title columns rise into place.

use std::time::Duration;

use serde::Serialize;
use tracing::info;

use crate::config::{LoaderConfig, MotionConfig};
use crate::motion::{EasingType, Position, Timeline, TweenSpec};
use crate::surface::{ElementId, Prop, Scene, Surface};

const PANEL_MS: u64 = 1000;
const LOGO_IN_MS: u64 = 500;
const HOLD_MS: u64 = 1500;
const LOGO_OUT_MS: u64 = 700;
const BG_OUT_MS: u64 = 750;
const COLUMNS_MS: u64 = 700;
const COLUMNS_STAGGER_MS: u64 = 100;
/// Columns start this long before the loader hides
const COLUMNS_LEAD_MS: i64 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoaderEvent {
    Started,
    ScrollLocked,
    ScrollReleased,
    Hidden,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoaderCue {
    Lock,
    WaitCursor,
    Hide,
    Release,
    RestoreCursor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderElements {
    pub root: ElementId,
    pub second_panel: ElementId,
    pub logo: ElementId,
    pub background: ElementId,
    pub header_columns: Vec<ElementId>,
}

#[derive(Debug)]
pub struct Loader {
    elements: LoaderElements,
    enabled: bool,
    easing: EasingType,
    timeline: Option<Timeline<LoaderCue>>,
    wait_cursor: bool,
    finished: bool,
}

impl Loader {
    pub fn new(elements: LoaderElements, enabled: bool, easing: EasingType) -> Self {
        Self {
            elements,
            enabled,
            easing,
            timeline: None,
            wait_cursor: false,
            finished: false,
        }
    }

    pub fn from_config(config: &LoaderConfig, motion: &MotionConfig, scene: &mut Scene) -> Self {
        let elements = LoaderElements {
            root: scene.insert("loader"),
            second_panel: scene.insert("loader/panel-2"),
            logo: scene.insert("loader/logo"),
            background: scene.insert("loader/bg"),
            header_columns: (0..config.header_columns)
                .map(|i| scene.insert(format!("header/col/{}", i)))
                .collect(),
        };
        Self::new(elements, config.enabled, motion.easing)
    }

    pub fn elements(&self) -> &LoaderElements {
        &self.elements
    }

    /// True while the loader covers the page
    pub fn is_running(&self) -> bool {
        self.timeline.is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn wait_cursor(&self) -> bool {
        self.wait_cursor
    }

    fn build(&self) -> Timeline<LoaderCue> {
        let el = &self.elements;
        let zero = Position::At(Duration::ZERO);
        let mut timeline = Timeline::new(Duration::from_millis(PANEL_MS), self.easing);

        timeline
            .call(LoaderCue::Lock, zero)
            .call(LoaderCue::WaitCursor, zero)
            .add(TweenSpec::from_to(el.second_panel, Prop::Clip, 0.0, 1.0), Position::End)
            .add(
                TweenSpec::from_to(el.logo, Prop::TranslateY, 100.0, 0.0).duration_ms(LOGO_IN_MS),
                Position::EndOffset(-(LOGO_IN_MS as i64)),
            )
            .gap(Duration::from_millis(HOLD_MS))
            .add(
                TweenSpec::to(el.logo, Prop::TranslateY, -100.0).duration_ms(LOGO_OUT_MS),
                Position::End,
            )
            .add(
                TweenSpec::to(el.background, Prop::Clip, 0.0).duration_ms(BG_OUT_MS),
                Position::PreviousStart,
            )
            .call(LoaderCue::Hide, Position::End)
            .call(LoaderCue::Release, Position::PreviousStart)
            .call(LoaderCue::RestoreCursor, Position::PreviousStart);

        let mut at = Position::PreviousStartOffset(-COLUMNS_LEAD_MS);
        for &col in &el.header_columns {
            timeline
                .add(
                    TweenSpec::from_to(col, Prop::TranslateY, 100.0, 0.0).duration_ms(COLUMNS_MS),
                    at,
                )
                .add(
                    TweenSpec::from_to(col, Prop::Opacity, 0.0, 1.0).duration_ms(COLUMNS_MS),
                    Position::PreviousStart,
                );
            at = Position::PreviousStartOffset(COLUMNS_STAGGER_MS as i64);
        }

        timeline
    }

    /// Start the intro; a disabled loader hides and finishes at once
    pub fn start(&mut self, now: Duration, surface: &mut impl Surface) -> Vec<LoaderEvent> {
        let mut events = vec![LoaderEvent::Started];

        if !self.enabled {
            surface.set_visible(self.elements.root, false);
            self.finished = true;
            events.push(LoaderEvent::Finished);
            return events;
        }

        info!("Intro loader started");
        let mut timeline = self.build();
        timeline.start(now);
        let cues = timeline.advance(now, surface);
        self.timeline = Some(timeline);
        events.extend(self.apply(cues, surface));
        events
    }

    fn apply(&mut self, cues: Vec<LoaderCue>, surface: &mut impl Surface) -> Vec<LoaderEvent> {
        let mut events = Vec::new();
        for cue in cues {
            match cue {
                LoaderCue::Lock => events.push(LoaderEvent::ScrollLocked),
                LoaderCue::WaitCursor => self.wait_cursor = true,
                LoaderCue::Hide => {
                    surface.set_visible(self.elements.root, false);
                    events.push(LoaderEvent::Hidden);
                }
                LoaderCue::Release => events.push(LoaderEvent::ScrollReleased),
                LoaderCue::RestoreCursor => self.wait_cursor = false,
            }
        }
        events
    }

    pub fn tick(&mut self, now: Duration, surface: &mut impl Surface) -> Vec<LoaderEvent> {
        let Some(timeline) = self.timeline.as_mut() else {
            return Vec::new();
        };
        let cues = timeline.advance(now, surface);
        let complete = timeline.is_complete(now);

        let mut events = self.apply(cues, surface);
        if complete {
            self.timeline = None;
            self.finished = true;
            info!("Intro loader finished");
            events.push(LoaderEvent::Finished);
        }
        events
    }
}
