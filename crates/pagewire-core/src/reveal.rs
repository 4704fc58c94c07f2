//! Scroll-triggered reveals
//!
//! A [`WordReveal`] plays once, the first time its top reaches the trigger
//! line at 75% of the viewport: every word rises from below its line with a
//! short stagger. A [`Scrub`] has no timeline of its own; its progress is the
//! scroll position mapped over a range, so scrolling back rewinds it.

use std::time::Duration;

use crate::config::{EasingType, RevealConfig, ScrubConfig, ScrubKind};
use crate::motion::timing::lerp;
use crate::motion::{Position, Timeline, TweenSpec};
use crate::surface::{ElementId, Prop, Scene, Surface};
use crate::theme_section::Section;

/// Fraction of the viewport height, from the top, that fires a reveal
const TRIGGER_LINE: f64 = 0.75;
const WORD_RISE_MS: u64 = 500;
const WORD_STAGGER_MS: u64 = 50;
/// Words wait this far below their line, in percent of their height
const WORD_DROP: f64 = 140.0;

/// Header title rows travel this far up over the scrub
const HEADER_RISE: f64 = -100.0;
/// Visible part of the header once it has scrolled away
const HEADER_CLIP_END: f64 = 0.725;
/// Visible part of the footer before it starts scrolling in
const FOOTER_CLIP_START: f64 = 0.8;
/// Footer scrub starts when this fraction of it has reached the viewport bottom
const FOOTER_START: f64 = 0.2;

#[derive(Debug)]
pub struct WordReveal {
    /// Document offset of the element top
    top: f64,
    words: Vec<ElementId>,
    timeline: Timeline,
    done: bool,
}

impl WordReveal {
    pub fn new(top: f64, words: Vec<ElementId>, easing: EasingType, surface: &mut impl Surface) -> Self {
        for &word in &words {
            surface.set(word, Prop::TranslateY, WORD_DROP);
        }

        let mut timeline = Timeline::new(Duration::from_millis(WORD_RISE_MS), easing);
        timeline.stagger(
            words.iter().map(|&word| TweenSpec::to(word, Prop::TranslateY, 0.0)),
            Duration::from_millis(WORD_STAGGER_MS),
            Position::At(Duration::ZERO),
        );

        Self {
            top,
            words,
            timeline,
            done: false,
        }
    }

    pub fn from_config(config: &RevealConfig, section: &Section, easing: EasingType, scene: &mut Scene) -> Self {
        let words = config
            .text
            .split_whitespace()
            .enumerate()
            .map(|(i, word)| scene.insert(format!("reveal/{}/{}", i, word)))
            .collect();
        Self::new(section.top + config.offset, words, easing, scene)
    }

    pub fn words(&self) -> &[ElementId] {
        &self.words
    }

    pub fn is_triggered(&self) -> bool {
        self.timeline.is_started()
    }

    pub fn is_animating(&self) -> bool {
        self.is_triggered() && !self.done
    }

    /// Start the reveal if its top is at or above the trigger line
    ///
    /// Returns true only on the call that fires it.
    pub fn on_scroll(&mut self, scroll_y: f64, viewport_height: f64, now: Duration) -> bool {
        if self.is_triggered() {
            return false;
        }
        if self.top - scroll_y > viewport_height * TRIGGER_LINE {
            return false;
        }
        self.timeline.start(now);
        true
    }

    pub fn tick(&mut self, now: Duration, surface: &mut impl Surface) {
        if !self.is_animating() {
            return;
        }
        self.timeline.advance(now, surface);
        self.done = self.timeline.is_complete(now);
    }
}

/// Scroll-linked section effect
#[derive(Debug)]
pub struct Scrub {
    kind: ScrubKind,
    /// Scroll positions at progress 0 and 1
    start: f64,
    end: f64,
    section: ElementId,
    rows: Vec<ElementId>,
    progress: Option<f64>,
}

impl Scrub {
    pub fn new(
        kind: ScrubKind,
        section: &Section,
        viewport_height: f64,
        element: ElementId,
        rows: Vec<ElementId>,
    ) -> Self {
        let (start, end) = match kind {
            // From the section top at the viewport top to its bottom there
            ScrubKind::Header => (section.top, section.bottom()),
            // From a fifth of it inside the viewport bottom to its bottom at the top
            ScrubKind::Footer => (
                section.top + section.height * FOOTER_START - viewport_height,
                section.bottom(),
            ),
        };
        Self {
            kind,
            start,
            end,
            section: element,
            rows,
            progress: None,
        }
    }

    pub fn from_config(config: &ScrubConfig, section: &Section, viewport_height: f64, scene: &mut Scene) -> Self {
        let element = scene.insert(format!("scrub/{}", section.name));
        let rows = (0..config.rows)
            .map(|i| scene.insert(format!("scrub/{}/row/{}", section.name, i)))
            .collect();
        Self::new(config.kind, section, viewport_height, element, rows)
    }

    pub fn kind(&self) -> ScrubKind {
        self.kind
    }

    pub fn progress(&self) -> Option<f64> {
        self.progress
    }

    pub fn progress_at(&self, scroll_y: f64) -> f64 {
        if self.end <= self.start {
            return if scroll_y >= self.end { 1.0 } else { 0.0 };
        }
        ((scroll_y - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }

    /// Render the scrub for a scroll position; returns the new progress if it moved
    pub fn on_scroll(&mut self, scroll_y: f64, surface: &mut impl Surface) -> Option<f64> {
        let t = self.progress_at(scroll_y);
        if self.progress == Some(t) {
            return None;
        }
        self.progress = Some(t);

        match self.kind {
            ScrubKind::Header => {
                for &row in &self.rows {
                    surface.set(row, Prop::TranslateY, lerp(0.0, HEADER_RISE, t));
                    surface.set(row, Prop::Opacity, 1.0);
                }
                surface.set(self.section, Prop::Clip, lerp(1.0, HEADER_CLIP_END, t));
            }
            ScrubKind::Footer => {
                surface.set(self.section, Prop::Clip, lerp(FOOTER_CLIP_START, 1.0, t));
            }
        }
        Some(t)
    }
}
