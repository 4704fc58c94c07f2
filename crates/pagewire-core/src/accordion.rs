//! FAQ accordion
//!
//! At most one item is open. The open flag lives on the item element and
//! the answer height is tweened between collapsed and natural height.

use std::time::Duration;

use tracing::debug;

use crate::config::{FaqConfig, MotionConfig};
use crate::motion::{EasingType, Position, Timeline, TweenSpec};
use crate::surface::{ElementId, Prop, Scene, Surface};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqItem {
    pub item: ElementId,
    pub answer: ElementId,
}

#[derive(Debug)]
pub struct Accordion {
    items: Vec<FaqItem>,
    open: Option<usize>,
    /// Running height tween per item
    tweens: Vec<Option<Timeline>>,
    duration: Duration,
    easing: EasingType,
}

impl Accordion {
    pub fn new(
        items: Vec<FaqItem>,
        duration: Duration,
        easing: EasingType,
        surface: &mut impl Surface,
    ) -> Self {
        for faq in &items {
            surface.set_active(faq.item, false);
            surface.set(faq.answer, Prop::Height, 0.0);
        }
        let tweens = items.iter().map(|_| None).collect();
        Self {
            items,
            open: None,
            tweens,
            duration,
            easing,
        }
    }

    pub fn from_config(config: &FaqConfig, motion: &MotionConfig, scene: &mut Scene) -> Self {
        let items = (0..config.items.len())
            .map(|i| FaqItem {
                item: scene.insert(format!("faq/item/{}", i)),
                answer: scene.insert(format!("faq/answer/{}", i)),
            })
            .collect();
        Self::new(
            items,
            Duration::from_millis(config.duration_ms),
            motion.easing,
            scene,
        )
    }

    pub fn items(&self) -> &[FaqItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_animating(&self) -> bool {
        self.tweens.iter().any(Option::is_some)
    }

    /// Toggle `index`, closing any other open item first
    ///
    /// Returns whether `index` is open afterwards.
    pub fn toggle(&mut self, index: usize, now: Duration, surface: &mut impl Surface) -> Result<bool> {
        if index >= self.items.len() {
            return Err(Error::FaqIndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }

        let was_open = self.open == Some(index);
        if let Some(previous) = self.open.filter(|&i| i != index) {
            self.animate(previous, false, now, surface);
        }
        self.animate(index, !was_open, now, surface);
        self.open = if was_open { None } else { Some(index) };

        debug!(index, open = !was_open, "FAQ item toggled");
        Ok(!was_open)
    }

    fn animate(&mut self, index: usize, open: bool, now: Duration, surface: &mut impl Surface) {
        let faq = self.items[index];
        surface.set_active(faq.item, open);

        let mut timeline = Timeline::new(self.duration, self.easing);
        timeline.add(
            TweenSpec::to(faq.answer, Prop::Height, if open { 1.0 } else { 0.0 }),
            Position::At(Duration::ZERO),
        );
        timeline.start(now);
        timeline.advance(now, surface);
        self.tweens[index] = Some(timeline);
    }

    pub fn tick(&mut self, now: Duration, surface: &mut impl Surface) {
        for slot in &mut self.tweens {
            let done = match slot.as_mut() {
                Some(timeline) => {
                    timeline.advance(now, surface);
                    timeline.is_complete(now)
                }
                None => false,
            };
            if done {
                *slot = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn setup() -> (Scene, Accordion) {
        let mut scene = Scene::new();
        let accordion = Accordion::from_config(&FaqConfig::default(), &MotionConfig::default(), &mut scene);
        (scene, accordion)
    }

    #[test]
    fn test_starts_collapsed() {
        let (scene, accordion) = setup();
        assert_eq!(accordion.len(), 3);
        assert_eq!(accordion.open_index(), None);
        for faq in accordion.items() {
            assert_eq!(scene.get(faq.answer, Prop::Height), 0.0);
            assert!(!scene.is_active(faq.item));
        }
    }

    #[test]
    fn test_open_expands_answer() {
        let (mut scene, mut accordion) = setup();
        assert!(accordion.toggle(1, ms(0), &mut scene).unwrap());
        assert!(accordion.is_animating());

        accordion.tick(ms(900), &mut scene);
        let faq = accordion.items()[1];
        assert_eq!(scene.get(faq.answer, Prop::Height), 1.0);
        assert!(scene.is_active(faq.item));
        assert!(!accordion.is_animating());
    }

    #[test]
    fn test_single_open_item() {
        let (mut scene, mut accordion) = setup();
        accordion.toggle(0, ms(0), &mut scene).unwrap();
        accordion.tick(ms(900), &mut scene);
        accordion.toggle(2, ms(1000), &mut scene).unwrap();
        accordion.tick(ms(1900), &mut scene);

        assert_eq!(accordion.open_index(), Some(2));
        let first = accordion.items()[0];
        assert!(!scene.is_active(first.item));
        assert_eq!(scene.get(first.answer, Prop::Height), 0.0);
    }

    #[test]
    fn test_second_click_closes() {
        let (mut scene, mut accordion) = setup();
        accordion.toggle(0, ms(0), &mut scene).unwrap();
        assert!(!accordion.toggle(0, ms(300), &mut scene).unwrap());
        accordion.tick(ms(1200), &mut scene);
        assert_eq!(accordion.open_index(), None);
        assert_eq!(scene.get(accordion.items()[0].answer, Prop::Height), 0.0);
    }

    #[test]
    fn test_out_of_range() {
        let (mut scene, mut accordion) = setup();
        assert!(matches!(
            accordion.toggle(7, ms(0), &mut scene),
            Err(Error::FaqIndexOutOfRange { index: 7, len: 3 })
        ));
    }
}
