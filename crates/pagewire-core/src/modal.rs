//! Modal controller
//!
//! Named modals share one overlay and an optional group element. Opening
//! marks the trigger, the modal and the group active and locks page scroll;
//! closing plays an exit animation, releases the lock and only then resets
//! every flag.

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::{ModalConfig, MotionConfig};
use crate::motion::{EasingType, Position, Timeline, TweenSpec};
use crate::surface::{ElementId, Prop, Scene, Surface};
use crate::{Error, Result};

const PANEL_IN_MS: u64 = 650;
const OVERLAY_IN_MS: u64 = 250;
const OVERLAY_OPACITY: f64 = 0.8;
const CLOSE_BUTTON_DELAY_MS: i64 = 200;
const CLOSE_BUTTON_IN_MS: u64 = 675;
const CLOSE_OUT_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalHandles {
    pub name: String,
    pub trigger: ElementId,
    pub panel: ElementId,
    pub close_button: ElementId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModalCue {
    LockScroll,
    ReleaseScroll,
    Reset,
}

/// Side effects the page has to apply
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModalEvent {
    Opened { name: String },
    LockScroll,
    ReleaseScroll,
    /// Exit animation finished and every flag was reset
    Closed { name: String },
}

#[derive(Debug)]
pub struct ModalController {
    modals: Vec<ModalHandles>,
    overlay: ElementId,
    group: Option<ElementId>,
    last_opened: Option<usize>,
    opening: Option<Timeline<ModalCue>>,
    closing: Option<Timeline<ModalCue>>,
    easing: EasingType,
}

impl ModalController {
    pub fn new(
        modals: Vec<ModalHandles>,
        overlay: ElementId,
        group: Option<ElementId>,
        easing: EasingType,
        surface: &mut impl Surface,
    ) -> Self {
        surface.set(overlay, Prop::Opacity, 0.0);
        let controller = Self {
            modals,
            overlay,
            group,
            last_opened: None,
            opening: None,
            closing: None,
            easing,
        };
        controller.reset_flags(surface);
        for modal in &controller.modals {
            surface.set(modal.panel, Prop::Opacity, 0.0);
        }
        controller
    }

    pub fn from_config(configs: &[ModalConfig], motion: &MotionConfig, scene: &mut Scene) -> Self {
        let modals = configs
            .iter()
            .map(|modal| ModalHandles {
                name: modal.name.clone(),
                trigger: scene.insert(format!("modal/{}/trigger", modal.name)),
                panel: scene.insert(format!("modal/{}/panel", modal.name)),
                close_button: scene.insert(format!("modal/{}/close", modal.name)),
            })
            .collect();
        let overlay = scene.insert("modal/overlay");
        let group = Some(scene.insert("modal/group"));
        Self::new(modals, overlay, group, motion.easing, scene)
    }

    pub fn modals(&self) -> &[ModalHandles] {
        &self.modals
    }

    pub fn overlay(&self) -> ElementId {
        self.overlay
    }

    /// Name of the modal that was opened last and not yet fully closed
    pub fn open_name(&self) -> Option<&str> {
        self.last_opened.map(|i| self.modals[i].name.as_str())
    }

    pub fn is_closing(&self) -> bool {
        self.closing.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.opening.is_some() || self.closing.is_some()
    }

    fn reset_flags(&self, surface: &mut impl Surface) {
        for modal in &self.modals {
            surface.set_active(modal.trigger, false);
            surface.set_active(modal.panel, false);
        }
        if let Some(group) = self.group {
            surface.set_active(group, false);
        }
    }

    /// Open the modal called `name`, cancelling an in-flight close
    pub fn open(&mut self, name: &str, now: Duration, surface: &mut impl Surface) -> Result<Vec<ModalEvent>> {
        let index = self
            .modals
            .iter()
            .position(|m| m.name == name)
            .ok_or_else(|| Error::UnknownModal(name.to_string()))?;

        self.closing = None;
        self.reset_flags(surface);

        let modal = self.modals[index].clone();
        surface.set_active(modal.trigger, true);
        surface.set_active(modal.panel, true);
        if let Some(group) = self.group {
            surface.set_active(group, true);
        }
        self.last_opened = Some(index);

        let zero = Position::At(Duration::ZERO);
        let mut timeline = Timeline::new(Duration::from_millis(PANEL_IN_MS), self.easing);
        timeline
            .call(ModalCue::LockScroll, zero)
            .add(TweenSpec::from_to(modal.panel, Prop::Opacity, 0.0, 1.0), zero)
            .add(TweenSpec::from_to(modal.panel, Prop::TranslateY, 50.0, 0.0), zero)
            .add(
                TweenSpec::from_to(self.overlay, Prop::Opacity, 0.0, OVERLAY_OPACITY)
                    .duration_ms(OVERLAY_IN_MS),
                zero,
            )
            .add(
                TweenSpec::from_to(modal.close_button, Prop::Opacity, 0.0, 1.0)
                    .duration_ms(CLOSE_BUTTON_IN_MS),
                Position::PreviousStartOffset(CLOSE_BUTTON_DELAY_MS),
            )
            .add(
                TweenSpec::from_to(modal.close_button, Prop::ScaleX, 0.75, 1.0)
                    .duration_ms(CLOSE_BUTTON_IN_MS),
                Position::PreviousStart,
            )
            .add(
                TweenSpec::from_to(modal.close_button, Prop::TranslateY, 20.0, 0.0)
                    .duration_ms(CLOSE_BUTTON_IN_MS),
                Position::PreviousStart,
            );
        timeline.start(now);

        info!(modal = %modal.name, "Modal opened");
        let mut events = vec![ModalEvent::Opened { name: modal.name }];
        events.extend(self.apply(timeline.advance(now, surface), surface));
        self.opening = Some(timeline);
        Ok(events)
    }

    /// Play the exit animation of the open modal; a no-op when none is open
    pub fn close(&mut self, now: Duration, surface: &mut impl Surface) -> Vec<ModalEvent> {
        let Some(index) = self.last_opened else {
            debug!("Close requested without an open modal");
            return Vec::new();
        };
        let panel = self.modals[index].panel;

        self.opening = None;
        let mut timeline = Timeline::new(Duration::from_millis(CLOSE_OUT_MS), self.easing);
        timeline
            .add(TweenSpec::to(panel, Prop::Opacity, 0.0), Position::At(Duration::ZERO))
            .add(TweenSpec::to(panel, Prop::TranslateY, 100.0), Position::PreviousStart)
            .add(TweenSpec::to(self.overlay, Prop::Opacity, 0.0), Position::PreviousStart)
            .call(ModalCue::ReleaseScroll, Position::End)
            .call(ModalCue::Reset, Position::End);
        timeline.start(now);

        let events = self.apply(timeline.advance(now, surface), surface);
        self.closing = Some(timeline);
        events
    }

    fn apply(&mut self, cues: Vec<ModalCue>, surface: &mut impl Surface) -> Vec<ModalEvent> {
        let mut events = Vec::new();
        for cue in cues {
            match cue {
                ModalCue::LockScroll => events.push(ModalEvent::LockScroll),
                ModalCue::ReleaseScroll => events.push(ModalEvent::ReleaseScroll),
                ModalCue::Reset => {
                    self.reset_flags(surface);
                    if let Some(index) = self.last_opened.take() {
                        let name = self.modals[index].name.clone();
                        debug!(modal = %name, "Modal closed");
                        events.push(ModalEvent::Closed { name });
                    }
                }
            }
        }
        events
    }

    pub fn tick(&mut self, now: Duration, surface: &mut impl Surface) -> Vec<ModalEvent> {
        let mut cues = Vec::new();

        if let Some(timeline) = self.opening.as_mut() {
            cues.extend(timeline.advance(now, surface));
            if timeline.is_complete(now) {
                self.opening = None;
            }
        }
        if let Some(timeline) = self.closing.as_mut() {
            cues.extend(timeline.advance(now, surface));
            if timeline.is_complete(now) {
                self.closing = None;
            }
        }

        self.apply(cues, surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageConfig;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn setup() -> (Scene, ModalController) {
        let mut scene = Scene::new();
        let controller =
            ModalController::from_config(&PageConfig::default().modals, &MotionConfig::default(), &mut scene);
        (scene, controller)
    }

    fn find<'a>(controller: &'a ModalController, name: &str) -> &'a ModalHandles {
        controller.modals().iter().find(|m| m.name == name).unwrap()
    }

    #[test]
    fn test_open_marks_and_locks() {
        let (mut scene, mut controller) = setup();
        let events = controller.open("contact", ms(0), &mut scene).unwrap();
        assert_eq!(
            events,
            vec![
                ModalEvent::Opened {
                    name: "contact".to_string()
                },
                ModalEvent::LockScroll
            ]
        );

        let contact = find(&controller, "contact").clone();
        assert!(scene.is_active(contact.trigger));
        assert!(scene.is_active(contact.panel));
        assert_eq!(controller.open_name(), Some("contact"));

        controller.tick(ms(900), &mut scene);
        assert_eq!(scene.get(contact.panel, Prop::Opacity), 1.0);
        assert!((scene.get(controller.overlay(), Prop::Opacity) - OVERLAY_OPACITY).abs() < 1e-9);
        assert_eq!(scene.get(contact.close_button, Prop::TranslateY), 0.0);
        assert!(!controller.is_animating());
    }

    #[test]
    fn test_close_releases_then_resets() {
        let (mut scene, mut controller) = setup();
        controller.open("newsletter", ms(0), &mut scene).unwrap();
        controller.tick(ms(1000), &mut scene);

        assert!(controller.close(ms(1000), &mut scene).is_empty());
        assert!(controller.is_closing());
        let panel = find(&controller, "newsletter").panel;
        assert!(scene.is_active(panel));

        let events = controller.tick(ms(1500), &mut scene);
        assert_eq!(
            events,
            vec![
                ModalEvent::ReleaseScroll,
                ModalEvent::Closed {
                    name: "newsletter".to_string()
                }
            ]
        );
        assert!(!scene.is_active(panel));
        assert_eq!(scene.get(panel, Prop::TranslateY), 100.0);
        assert_eq!(controller.open_name(), None);
    }

    #[test]
    fn test_close_without_open_is_noop() {
        let (mut scene, mut controller) = setup();
        assert!(controller.close(ms(0), &mut scene).is_empty());
        assert!(!controller.is_animating());
    }

    #[test]
    fn test_reopen_cancels_close() {
        let (mut scene, mut controller) = setup();
        controller.open("contact", ms(0), &mut scene).unwrap();
        controller.tick(ms(700), &mut scene);
        controller.close(ms(700), &mut scene);

        controller.open("newsletter", ms(900), &mut scene).unwrap();
        let events = controller.tick(ms(2000), &mut scene);
        assert!(events.is_empty());
        assert_eq!(controller.open_name(), Some("newsletter"));
        assert!(!scene.is_active(find(&controller, "contact").panel));
        assert!(scene.is_active(find(&controller, "newsletter").panel));
    }

    #[test]
    fn test_unknown_modal() {
        let (mut scene, mut controller) = setup();
        assert!(matches!(
            controller.open("missing", ms(0), &mut scene),
            Err(Error::UnknownModal(name)) if name == "missing"
        ));
    }
}
