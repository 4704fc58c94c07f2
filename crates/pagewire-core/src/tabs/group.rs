//! Tab group controller
//!
//! Manages a set of mutually exclusive tabs, each pairing a content block
//! with a visual block, optionally auto-advancing on a timer shown by a
//! progress fill. Every entry point funnels into [`TabGroup::switch_tab`],
//! which is guarded by the [`Phase`] state machine, so at most one switch
//! timeline runs per group.

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, warn};

use super::autoplay::AutoAdvance;
use super::item::{ContentParts, TabItem};
use super::state::{Phase, SwitchCause, Trigger};
use crate::config::{MotionConfig, TabGroupConfig};
use crate::motion::easing::{EasingType, EasingTypeExt};
use crate::motion::timing::{as_millis, progress};
use crate::motion::{Position, TabTiming, Timeline, TweenSpec};
use crate::surface::{ElementId, Prop, Scene, Surface};
use crate::{Error, Result};

/// Result of a switch request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SwitchOutcome {
    Started,
    /// Target is already the active item; nothing happened
    AlreadyActive,
    /// A switch is in flight; the request was dropped
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    AlreadyActive,
    Transitioning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TabEvent {
    SwitchStarted {
        from: Option<usize>,
        to: usize,
        cause: SwitchCause,
        at_ms: u64,
    },
    SwitchCompleted {
        index: usize,
        at_ms: u64,
    },
    AutoAdvanceExpired {
        index: usize,
        at_ms: u64,
    },
    Ignored {
        index: usize,
        reason: IgnoreReason,
        at_ms: u64,
    },
}

/// Fixed per-group settings
#[derive(Debug, Clone, Copy)]
pub struct TabGroupOptions {
    pub autoplay: bool,
    pub autoplay_duration: Duration,
    pub timing: TabTiming,
    pub easing: EasingType,
}

impl TabGroupOptions {
    pub fn from_config(group: &TabGroupConfig, motion: &MotionConfig) -> Self {
        Self {
            autoplay: group.autoplay,
            autoplay_duration: Duration::from_millis(group.autoplay_duration_ms),
            timing: TabTiming::from(&motion.tabs),
            easing: motion.easing,
        }
    }
}

impl Default for TabGroupOptions {
    fn default() -> Self {
        Self {
            autoplay: false,
            autoplay_duration: Duration::from_millis(5000),
            timing: TabTiming::default(),
            easing: EasingType::InOut,
        }
    }
}

#[derive(Debug)]
struct Transition {
    target: usize,
    timeline: Timeline,
}

#[derive(Debug)]
pub struct TabGroup {
    name: String,
    items: Vec<TabItem>,
    options: TabGroupOptions,
    /// Committed active item; updated when a switch completes
    active_index: Option<usize>,
    /// Item whose active flags are set; updated when a switch starts
    marked_index: Option<usize>,
    phase: Phase,
    transition: Option<Transition>,
    auto_advance: AutoAdvance,
    events: Vec<TabEvent>,
}

impl TabGroup {
    /// Build a group and activate its first item
    ///
    /// Fails when the content and visual counts differ or the autoplay
    /// duration is zero.
    pub fn new(
        name: impl Into<String>,
        options: TabGroupOptions,
        contents: Vec<ContentParts>,
        visuals: Vec<ElementId>,
        now: Duration,
        surface: &mut impl Surface,
    ) -> Result<Self> {
        let name = name.into();

        if contents.len() != visuals.len() {
            return Err(Error::MismatchedTabItems {
                group: name,
                contents: contents.len(),
                visuals: visuals.len(),
            });
        }
        if options.autoplay_duration.is_zero() {
            return Err(Error::InvalidDuration(format!(
                "tab group '{}' autoplay duration",
                name
            )));
        }

        let items: Vec<TabItem> = contents
            .into_iter()
            .zip(visuals)
            .map(|(parts, visual)| TabItem::pair(parts, visual))
            .collect();

        for item in &items {
            surface.set_active(item.content, false);
            surface.set_active(item.visual, false);
            surface.set(item.visual, Prop::Opacity, 0.0);
            surface.set(item.visual, Prop::Clip, 0.0);
            if let Some(details) = item.details {
                surface.set(details, Prop::Height, 0.0);
            }
            if let Some(bar) = item.progress {
                surface.set(bar, Prop::ScaleX, 0.0);
            }
        }

        let mut group = Self {
            name,
            items,
            options,
            active_index: None,
            marked_index: None,
            phase: Phase::Idle,
            transition: None,
            auto_advance: AutoAdvance::new(options.autoplay_duration),
            events: Vec::new(),
        };

        if group.items.is_empty() {
            debug!(group = %group.name, "Tab group has no items, nothing to activate");
        } else {
            group.switch_tab(0, SwitchCause::Initial, now, surface)?;
        }

        Ok(group)
    }

    /// Build a group from configuration, registering its elements in `scene`
    pub fn from_config(
        config: &TabGroupConfig,
        motion: &MotionConfig,
        now: Duration,
        scene: &mut Scene,
    ) -> Result<Self> {
        let contents = config
            .contents
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let mut parts =
                    ContentParts::new(scene.insert(format!("{}/content/{}", config.name, i)));
                if item.progress {
                    parts = parts.with_progress(scene.insert(format!("{}/progress/{}", config.name, i)));
                }
                if item.details {
                    parts = parts.with_details(scene.insert(format!("{}/details/{}", config.name, i)));
                }
                parts
            })
            .collect();

        let visuals = (0..config.visuals.len())
            .map(|i| scene.insert(format!("{}/visual/{}", config.name, i)))
            .collect();

        Self::new(
            config.name.clone(),
            TabGroupOptions::from_config(config, motion),
            contents,
            visuals,
            now,
            scene,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[TabItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    /// Item currently carrying the active flags (the incoming one during a switch)
    pub fn marked_index(&self) -> Option<usize> {
        self.marked_index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase == Phase::Transitioning
    }

    pub fn autoplay_enabled(&self) -> bool {
        self.options.autoplay
    }

    pub fn autoplay_duration(&self) -> Duration {
        self.options.autoplay_duration
    }

    /// Index and deadline of the pending auto-advance timer
    pub fn pending_advance(&self) -> Option<(usize, Duration)> {
        self.auto_advance.pending().map(|t| (t.index, t.deadline))
    }

    /// True while something animates or waits on a timer
    pub fn needs_frame(&self) -> bool {
        self.is_transitioning() || self.auto_advance.pending().is_some()
    }

    /// User activation of a content item
    pub fn click(
        &mut self,
        index: usize,
        now: Duration,
        surface: &mut impl Surface,
    ) -> Result<SwitchOutcome> {
        self.switch_tab(index, SwitchCause::UserClick, now, surface)
    }

    /// Start switching to `target`
    ///
    /// Dropped while another switch is in flight or when `target` is already
    /// active. Cancels the pending auto-advance timer, swaps the active flags
    /// immediately and starts the reveal timeline; the switch completes on a
    /// later [`TabGroup::tick`].
    pub fn switch_tab(
        &mut self,
        target: usize,
        cause: SwitchCause,
        now: Duration,
        surface: &mut impl Surface,
    ) -> Result<SwitchOutcome> {
        if target >= self.items.len() {
            return Err(Error::TabIndexOutOfRange {
                group: self.name.clone(),
                index: target,
                len: self.items.len(),
            });
        }

        let Some(next_phase) = self.phase.next(Trigger::from(cause)) else {
            debug!(group = %self.name, target, %cause, "Switch dropped, transition in flight");
            self.events.push(TabEvent::Ignored {
                index: target,
                reason: IgnoreReason::Transitioning,
                at_ms: as_millis(now),
            });
            return Ok(SwitchOutcome::Busy);
        };

        if self.active_index == Some(target) {
            self.events.push(TabEvent::Ignored {
                index: target,
                reason: IgnoreReason::AlreadyActive,
                at_ms: as_millis(now),
            });
            return Ok(SwitchOutcome::AlreadyActive);
        }

        self.phase = next_phase;
        self.auto_advance.cancel();

        let from = self.active_index;
        if let Some(marked) = self.marked_index {
            let outgoing = self.items[marked];
            surface.set_active(outgoing.content, false);
            surface.set_active(outgoing.visual, false);
        }
        let incoming = self.items[target];
        surface.set_active(incoming.content, true);
        surface.set_active(incoming.visual, true);
        self.marked_index = Some(target);

        let mut timeline = self.build_timeline(from.map(|i| self.items[i]), incoming);
        timeline.start(now);
        timeline.advance(now, surface);
        self.transition = Some(Transition { target, timeline });

        debug!(
            group = %self.name,
            from = ?from,
            to = target,
            %cause,
            at_ms = as_millis(now),
            "Tab switch started"
        );
        self.events.push(TabEvent::SwitchStarted {
            from,
            to: target,
            cause,
            at_ms: as_millis(now),
        });

        Ok(SwitchOutcome::Started)
    }

    fn build_timeline(&self, outgoing: Option<TabItem>, incoming: TabItem) -> Timeline {
        let timing = self.options.timing;
        let mut timeline = Timeline::new(timing.transition, self.options.easing);
        let zero = Position::At(Duration::ZERO);

        if let Some(out) = outgoing {
            if let Some(bar) = out.progress {
                timeline.add(
                    TweenSpec::to(bar, Prop::ScaleX, 0.0).duration(timing.progress_collapse),
                    zero,
                );
            }
            timeline.add(TweenSpec::to(out.visual, Prop::Opacity, 0.0), zero);
            if let Some(details) = out.details {
                timeline.add(TweenSpec::to(details, Prop::Height, 0.0), zero);
            }
        }

        let reveal = Position::At(timing.stagger);
        timeline
            .add(TweenSpec::from_to(incoming.visual, Prop::Opacity, 0.0, 1.0), reveal)
            .add(TweenSpec::from_to(incoming.visual, Prop::Clip, 0.0, 1.0), reveal);
        if let Some(details) = incoming.details {
            timeline.add(TweenSpec::from_to(details, Prop::Height, 0.0, 1.0), reveal);
        }
        if let Some(bar) = incoming.progress {
            timeline.add(TweenSpec::set(bar, Prop::ScaleX, 0.0), reveal);
        }

        timeline
    }

    fn complete_transition(&mut self, now: Duration, surface: &mut impl Surface) {
        let Some(mut transition) = self.transition.take() else {
            return;
        };
        let at = transition.timeline.end_time().unwrap_or(now);
        transition.timeline.advance(at, surface);

        self.active_index = Some(transition.target);
        self.phase = self
            .phase
            .next(Trigger::TransitionComplete)
            .unwrap_or(Phase::Idle);

        debug!(group = %self.name, index = transition.target, at_ms = as_millis(at), "Tab switch completed");
        self.events.push(TabEvent::SwitchCompleted {
            index: transition.target,
            at_ms: as_millis(at),
        });

        if self.options.autoplay {
            self.start_auto_advance(transition.target, at, surface);
        }
    }

    /// Start the auto-advance timer for `index` at `at`, replacing any pending one
    pub fn start_auto_advance(&mut self, index: usize, at: Duration, surface: &mut impl Surface) {
        let Some(item) = self.items.get(index).copied() else {
            warn!(group = %self.name, index, "Auto-advance requested for missing item");
            return;
        };
        self.auto_advance.start(index, at);
        if let Some(bar) = item.progress {
            surface.set(bar, Prop::ScaleX, 0.0);
        }
    }

    fn render_progress(&self, now: Duration, surface: &mut impl Surface) {
        let Some(timer) = self.auto_advance.pending() else {
            return;
        };
        if let Some(bar) = self.items[timer.index].progress {
            let t = progress(timer.started_at, self.options.autoplay_duration, now);
            surface.set(bar, Prop::ScaleX, EasingType::Power1InOut.apply(t));
        }
    }

    /// Advance the group to `now` and return everything that happened since
    /// the previous call
    pub fn tick(&mut self, now: Duration, surface: &mut impl Surface) -> Vec<TabEvent> {
        loop {
            if let Some(transition) = self.transition.as_mut() {
                transition.timeline.advance(now, surface);
                if transition.timeline.is_complete(now) {
                    self.complete_transition(now, surface);
                    continue;
                }
                break;
            }

            if self.is_transitioning() {
                break;
            }

            let Some(timer) = self.auto_advance.take_expired(now) else {
                self.render_progress(now, surface);
                break;
            };

            let expired = self.items[timer.index];
            if let Some(bar) = expired.progress {
                surface.set(bar, Prop::ScaleX, 1.0);
            }
            self.events.push(TabEvent::AutoAdvanceExpired {
                index: timer.index,
                at_ms: as_millis(timer.deadline),
            });

            let next = (timer.index + 1) % self.items.len();
            match self.switch_tab(next, SwitchCause::AutoAdvance, timer.deadline, surface) {
                Ok(SwitchOutcome::Started) => continue,
                Ok(_) => break,
                Err(e) => {
                    warn!(group = %self.name, "Auto-advance failed: {}", e);
                    break;
                }
            }
        }

        self.drain_events()
    }

    /// Events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<TabEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    struct Fixture {
        scene: Scene,
        group: TabGroup,
    }

    fn fixture(len: usize, autoplay: bool, timing: TabTiming) -> Fixture {
        let mut scene = Scene::new();
        let contents = (0..len)
            .map(|i| {
                ContentParts::new(scene.insert(format!("content-{}", i)))
                    .with_progress(scene.insert(format!("progress-{}", i)))
                    .with_details(scene.insert(format!("details-{}", i)))
            })
            .collect();
        let visuals = (0..len).map(|i| scene.insert(format!("visual-{}", i))).collect();
        let options = TabGroupOptions {
            autoplay,
            autoplay_duration: ms(5000),
            timing,
            easing: EasingType::Linear,
        };
        let group = TabGroup::new("features", options, contents, visuals, ms(0), &mut scene).unwrap();
        Fixture { scene, group }
    }

    impl Fixture {
        fn tick(&mut self, now: u64) -> Vec<TabEvent> {
            self.group.tick(ms(now), &mut self.scene)
        }

        /// Tick every `step` ms from `from` to `to` inclusive
        fn run(&mut self, from: u64, to: u64, step: u64) -> Vec<TabEvent> {
            let mut events = Vec::new();
            let mut t = from;
            while t <= to {
                events.extend(self.tick(t));
                self.assert_exclusive();
                t += step;
            }
            events
        }

        fn click(&mut self, index: usize, now: u64) -> SwitchOutcome {
            self.group.click(index, ms(now), &mut self.scene).unwrap()
        }

        fn marked_count(&self) -> usize {
            self.group
                .items()
                .iter()
                .filter(|item| self.scene.is_active(item.content))
                .count()
        }

        fn assert_exclusive(&self) {
            assert!(self.marked_count() <= 1, "more than one active item");
            for item in self.group.items() {
                assert_eq!(
                    self.scene.is_active(item.content),
                    self.scene.is_active(item.visual),
                    "content and visual flags diverged"
                );
            }
        }
    }

    fn started(events: &[TabEvent]) -> Vec<(usize, u64)> {
        events
            .iter()
            .filter_map(|e| match e {
                TabEvent::SwitchStarted { to, at_ms, .. } => Some((*to, *at_ms)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_initial_activation() {
        let mut fx = fixture(3, false, TabTiming::default());
        assert!(fx.group.is_transitioning());
        assert_eq!(fx.group.marked_index(), Some(0));
        assert_eq!(fx.group.active_index(), None);

        let events = fx.tick(0);
        assert_eq!(
            events[0],
            TabEvent::SwitchStarted {
                from: None,
                to: 0,
                cause: SwitchCause::Initial,
                at_ms: 0
            }
        );

        let events = fx.tick(1100);
        assert_eq!(events, vec![TabEvent::SwitchCompleted { index: 0, at_ms: 1100 }]);
        assert_eq!(fx.group.active_index(), Some(0));
        assert!(!fx.group.is_transitioning());

        let first = fx.group.items()[0];
        let style = fx.scene.style(first.visual).unwrap();
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.clip, 1.0);
        assert_eq!(fx.scene.get(first.details.unwrap(), Prop::Height), 1.0);
    }

    #[test]
    fn test_scenario_a_autoplay_cycles_with_instant_transitions() {
        let mut fx = fixture(3, true, TabTiming::instant());
        let events = fx.run(0, 15_000, 100);
        assert_eq!(started(&events), vec![(0, 0), (1, 5000), (2, 10_000), (0, 15_000)]);
    }

    #[test]
    fn test_scenario_a_with_default_transitions() {
        let mut fx = fixture(3, true, TabTiming::default());
        let events = fx.run(0, 18_300, 100);
        // Each cycle is the 5000 ms timer plus the 1100 ms switch
        assert_eq!(started(&events), vec![(0, 0), (1, 6100), (2, 12_200), (0, 18_300)]);
    }

    #[test]
    fn test_catch_up_is_exact() {
        let mut fx = fixture(3, true, TabTiming::instant());
        let events = fx.tick(15_000);
        assert_eq!(started(&events), vec![(0, 0), (1, 5000), (2, 10_000), (0, 15_000)]);
        assert_eq!(fx.group.pending_advance(), Some((0, ms(20_000))));
    }

    #[test]
    fn test_scenario_b_click_restarts_timer() {
        let mut fx = fixture(3, true, TabTiming::default());
        fx.run(0, 1100, 100);
        assert_eq!(fx.group.pending_advance(), Some((0, ms(6100))));

        assert_eq!(fx.click(2, 1200), SwitchOutcome::Started);
        assert!(fx.group.pending_advance().is_none());
        let events = fx.group.drain_events();
        assert_eq!(
            events,
            vec![TabEvent::SwitchStarted {
                from: Some(0),
                to: 2,
                cause: SwitchCause::UserClick,
                at_ms: 1200
            }]
        );

        let events = fx.run(1300, 2300, 100);
        assert_eq!(events, vec![TabEvent::SwitchCompleted { index: 2, at_ms: 2300 }]);
        assert_eq!(fx.group.pending_advance(), Some((2, ms(7300))));

        // The original item-0 deadline passes silently
        assert!(fx.run(2400, 7200, 100).is_empty());

        let events = fx.tick(7300);
        assert_eq!(events[0], TabEvent::AutoAdvanceExpired { index: 2, at_ms: 7300 });
        assert_eq!(started(&events), vec![(0, 7300)]);
    }

    #[test]
    fn test_scenario_c_click_active_is_noop() {
        let mut fx = fixture(3, true, TabTiming::default());
        fx.run(0, 2000, 100);
        let before = fx.group.pending_advance();

        assert_eq!(fx.click(0, 2000), SwitchOutcome::AlreadyActive);
        assert!(!fx.group.is_transitioning());
        assert_eq!(fx.group.pending_advance(), before);
        assert_eq!(
            fx.group.drain_events(),
            vec![TabEvent::Ignored {
                index: 0,
                reason: IgnoreReason::AlreadyActive,
                at_ms: 2000
            }]
        );
    }

    #[test]
    fn test_scenario_d_no_autoplay() {
        let mut fx = fixture(3, false, TabTiming::default());
        let events = fx.run(0, 60_000, 500);
        assert_eq!(started(&events), vec![(0, 0)]);
        assert_eq!(fx.group.active_index(), Some(0));
        assert!(fx.group.pending_advance().is_none());
        assert!(!fx.group.needs_frame());
    }

    #[test]
    fn test_debounce_during_transition() {
        let mut fx = fixture(3, true, TabTiming::default());
        fx.run(0, 6100, 100);
        assert!(fx.group.is_transitioning());
        assert_eq!(fx.group.marked_index(), Some(1));

        assert_eq!(fx.click(2, 6200), SwitchOutcome::Busy);
        assert_eq!(fx.click(0, 6300), SwitchOutcome::Busy);
        assert_eq!(fx.group.marked_index(), Some(1));
        assert_eq!(fx.group.active_index(), Some(0));

        let events = fx.run(6400, 7200, 100);
        assert!(events.contains(&TabEvent::SwitchCompleted { index: 1, at_ms: 7200 }));
        assert_eq!(fx.group.active_index(), Some(1));
    }

    #[test]
    fn test_wrap_around_from_last() {
        let mut fx = fixture(3, true, TabTiming::instant());
        fx.tick(0);
        fx.click(2, 100);
        fx.tick(100);
        assert_eq!(fx.group.active_index(), Some(2));

        let events = fx.tick(5100);
        assert_eq!(started(&events), vec![(0, 5100)]);
        assert_eq!(fx.group.active_index(), Some(0));
    }

    #[test]
    fn test_single_item_autoplay_stops() {
        let mut fx = fixture(1, true, TabTiming::instant());
        fx.tick(0);
        let events = fx.tick(5000);
        assert!(events.contains(&TabEvent::Ignored {
            index: 0,
            reason: IgnoreReason::AlreadyActive,
            at_ms: 5000
        }));
        assert!(fx.group.pending_advance().is_none());
    }

    #[test]
    fn test_mutual_exclusion_under_random_clicks() {
        let mut fx = fixture(4, true, TabTiming::default());
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
        let mut t = 0;
        while t < 40_000 {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            if seed % 5 == 0 {
                let index = (seed % 4) as usize;
                fx.group.click(index, ms(t), &mut fx.scene).unwrap();
                fx.assert_exclusive();
            }
            fx.tick(t);
            fx.assert_exclusive();
            assert_eq!(fx.marked_count(), 1);
            t += 50;
        }
    }

    #[test]
    fn test_progress_fill_follows_timer() {
        let mut fx = fixture(2, true, TabTiming::default());
        fx.run(0, 1100, 100);
        let bar = fx.group.items()[0].progress.unwrap();
        assert_eq!(fx.scene.get(bar, Prop::ScaleX), 0.0);

        fx.tick(3600);
        assert!((fx.scene.get(bar, Prop::ScaleX) - 0.5).abs() < 1e-9);

        // Outgoing fill collapses once the next switch runs
        fx.run(6100, 7200, 100);
        assert_eq!(fx.scene.get(bar, Prop::ScaleX), 0.0);
        let first = fx.group.items()[0];
        assert_eq!(fx.scene.get(first.visual, Prop::Opacity), 0.0);
        assert_eq!(fx.scene.get(first.details.unwrap(), Prop::Height), 0.0);
    }

    #[test]
    fn test_missing_optional_elements() {
        let mut scene = Scene::new();
        let contents = (0..2)
            .map(|i| ContentParts::new(scene.insert(format!("content-{}", i))))
            .collect();
        let visuals = (0..2).map(|i| scene.insert(format!("visual-{}", i))).collect();
        let options = TabGroupOptions {
            autoplay: true,
            timing: TabTiming::instant(),
            ..Default::default()
        };
        let mut group = TabGroup::new("bare", options, contents, visuals, ms(0), &mut scene).unwrap();

        group.tick(ms(0), &mut scene);
        let events = group.tick(ms(5000), &mut scene);
        assert!(events.contains(&TabEvent::SwitchCompleted { index: 1, at_ms: 5000 }));
    }

    #[test]
    fn test_mismatched_counts_rejected() {
        let mut scene = Scene::new();
        let contents = vec![ContentParts::new(scene.insert("c0")), ContentParts::new(scene.insert("c1"))];
        let visuals = vec![scene.insert("v0")];
        let result = TabGroup::new("broken", TabGroupOptions::default(), contents, visuals, ms(0), &mut scene);
        assert!(matches!(
            result,
            Err(Error::MismatchedTabItems {
                contents: 2,
                visuals: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_zero_duration_rejected() {
        let mut scene = Scene::new();
        let options = TabGroupOptions {
            autoplay_duration: Duration::ZERO,
            ..Default::default()
        };
        let result = TabGroup::new("zero", options, Vec::new(), Vec::new(), ms(0), &mut scene);
        assert!(matches!(result, Err(Error::InvalidDuration(_))));
    }

    #[test]
    fn test_empty_group_is_inert() {
        let mut scene = Scene::new();
        let mut group =
            TabGroup::new("empty", TabGroupOptions::default(), Vec::new(), Vec::new(), ms(0), &mut scene)
                .unwrap();
        assert!(group.tick(ms(10_000), &mut scene).is_empty());
        assert!(matches!(
            group.click(0, ms(10_000), &mut scene),
            Err(Error::TabIndexOutOfRange { index: 0, len: 0, .. })
        ));
    }

    #[test]
    fn test_from_config_registers_elements() {
        let mut scene = Scene::new();
        let config = crate::config::PageConfig::default().tab_groups.remove(0);
        let group = TabGroup::from_config(&config, &MotionConfig::default(), ms(0), &mut scene).unwrap();

        assert_eq!(group.len(), 3);
        assert!(group.autoplay_enabled());
        // content + progress + details + visual per item
        assert_eq!(scene.len(), 12);
        assert_eq!(scene.style(group.items()[1].visual).unwrap().label, "features/visual/1");
    }
}
