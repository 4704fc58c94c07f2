//! L3 Molecular Layer: Sequenced tween timelines
//!
//! A [`Timeline`] is a list of tweens and cues placed at offsets relative to
//! its start. It is built once, started at a page time, and advanced every
//! frame; each advance writes interpolated values to a [`Surface`] and
//! returns the cues crossed since the previous advance.
//!
//! ```ignore
//! let mut tl: Timeline<&str> = Timeline::new(Duration::from_millis(800), EasingType::InOut);
//! tl.add(TweenSpec::to(bar, Prop::ScaleX, 0.0).duration_ms(300), Position::At(Duration::ZERO))
//!   .add(TweenSpec::from_to(visual, Prop::Opacity, 0.0, 1.0), Position::At(Duration::from_millis(300)))
//!   .call("done", Position::End);
//! tl.start(now);
//! let cues = tl.advance(now, &mut scene);
//! ```

use std::time::Duration;

use super::easing::{EasingType, EasingTypeExt};
use super::timing::{lerp, offset_by, progress};
use crate::surface::{ElementId, Prop, Surface};

/// Where a child is placed, relative to the timeline being built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Absolute offset from the timeline start
    At(Duration),
    /// Right after everything added so far
    End,
    /// Relative to the current end, may be negative
    EndOffset(i64),
    /// Together with the previously added child
    PreviousStart,
    /// Relative to the previously added child's start, may be negative
    PreviousStartOffset(i64),
}

/// Description of one tween before it is placed on a timeline
#[derive(Debug, Clone)]
pub struct TweenSpec {
    element: ElementId,
    prop: Prop,
    from: Option<f64>,
    to: f64,
    duration: Option<Duration>,
    easing: Option<EasingType>,
}

impl TweenSpec {
    /// Animate from whatever value the element has when the tween starts
    pub fn to(element: ElementId, prop: Prop, to: f64) -> Self {
        Self {
            element,
            prop,
            from: None,
            to,
            duration: None,
            easing: None,
        }
    }

    /// Animate between explicit values; the from-value renders immediately
    pub fn from_to(element: ElementId, prop: Prop, from: f64, to: f64) -> Self {
        Self {
            from: Some(from),
            ..Self::to(element, prop, to)
        }
    }

    /// Zero-length tween that sets a value at its position
    pub fn set(element: ElementId, prop: Prop, value: f64) -> Self {
        Self {
            duration: Some(Duration::ZERO),
            ..Self::to(element, prop, value)
        }
    }

    pub fn duration_ms(mut self, ms: u64) -> Self {
        self.duration = Some(Duration::from_millis(ms));
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn easing(mut self, easing: EasingType) -> Self {
        self.easing = Some(easing);
        self
    }
}

#[derive(Debug, Clone)]
struct Tween {
    element: ElementId,
    prop: Prop,
    from: Option<f64>,
    to: f64,
    start: Duration,
    duration: Duration,
    easing: EasingType,
    /// Value captured when the tween started
    origin_value: Option<f64>,
    rendered_from: bool,
    finished: bool,
}

#[derive(Debug, Clone)]
struct Cue<C> {
    at: Duration,
    value: Option<C>,
}

/// Ordered set of tweens and cues with a single start time
#[derive(Debug, Clone)]
pub struct Timeline<C = ()> {
    default_duration: Duration,
    default_easing: EasingType,
    tweens: Vec<Tween>,
    cues: Vec<Cue<C>>,
    /// Offset of the last child's end
    end: Duration,
    /// Offset of the most recently added child
    previous_start: Duration,
    /// Page time the timeline was started at
    origin: Option<Duration>,
}

impl<C> Timeline<C> {
    pub fn new(default_duration: Duration, default_easing: EasingType) -> Self {
        Self {
            default_duration,
            default_easing,
            tweens: Vec::new(),
            cues: Vec::new(),
            end: Duration::ZERO,
            previous_start: Duration::ZERO,
            origin: None,
        }
    }

    fn resolve(&self, position: Position) -> Duration {
        match position {
            Position::At(offset) => offset,
            Position::End => self.end,
            Position::EndOffset(ms) => offset_by(self.end, ms),
            Position::PreviousStart => self.previous_start,
            Position::PreviousStartOffset(ms) => offset_by(self.previous_start, ms),
        }
    }

    /// Place a tween on the timeline
    pub fn add(&mut self, spec: TweenSpec, position: Position) -> &mut Self {
        let start = self.resolve(position);
        let duration = spec.duration.unwrap_or(self.default_duration);

        self.tweens.push(Tween {
            element: spec.element,
            prop: spec.prop,
            from: spec.from,
            to: spec.to,
            start,
            duration,
            easing: spec.easing.unwrap_or(self.default_easing),
            origin_value: None,
            rendered_from: false,
            finished: false,
        });

        self.previous_start = start;
        self.end = self.end.max(start + duration);
        self
    }

    /// Place several tweens, each starting `each` after the previous one
    pub fn stagger(
        &mut self,
        specs: impl IntoIterator<Item = TweenSpec>,
        each: Duration,
        position: Position,
    ) -> &mut Self {
        let first = self.resolve(position);
        for (i, spec) in specs.into_iter().enumerate() {
            self.add(spec, Position::At(first + each * i as u32));
        }
        self.previous_start = first;
        self
    }

    /// Extend the timeline by an empty stretch, like a tween on nothing
    pub fn gap(&mut self, length: Duration) -> &mut Self {
        self.previous_start = self.end;
        self.end += length;
        self
    }

    /// Place a cue that is returned from [`Timeline::advance`] once crossed
    pub fn call(&mut self, cue: C, position: Position) -> &mut Self {
        let at = self.resolve(position);
        // Keep cues sorted by offset; equal offsets fire in insertion order
        let index = self.cues.partition_point(|c| c.at <= at);
        self.cues.insert(index, Cue { at, value: Some(cue) });
        self.previous_start = at;
        self.end = self.end.max(at);
        self
    }

    /// Anchor the timeline at a page time
    pub fn start(&mut self, now: Duration) {
        self.origin = Some(now);
    }

    pub fn is_started(&self) -> bool {
        self.origin.is_some()
    }

    /// Length from start to the last child's end
    pub fn duration(&self) -> Duration {
        self.end
    }

    /// Page time at which the timeline completes
    pub fn end_time(&self) -> Option<Duration> {
        self.origin.map(|origin| origin + self.end)
    }

    pub fn is_complete(&self, now: Duration) -> bool {
        self.end_time().is_some_and(|end| now >= end)
    }

    /// Render the timeline at `now` and return the cues crossed since the
    /// previous call
    pub fn advance(&mut self, now: Duration, surface: &mut impl Surface) -> Vec<C> {
        let Some(origin) = self.origin else {
            return Vec::new();
        };
        if now < origin {
            return Vec::new();
        }
        let local = now - origin;

        for tween in &mut self.tweens {
            if tween.finished {
                continue;
            }

            if local < tween.start {
                if let (Some(from), false) = (tween.from, tween.rendered_from) {
                    surface.set(tween.element, tween.prop, from);
                    tween.rendered_from = true;
                }
                continue;
            }

            let from = match tween.origin_value {
                Some(value) => value,
                None => {
                    let value = tween
                        .from
                        .unwrap_or_else(|| surface.get(tween.element, tween.prop));
                    tween.origin_value = Some(value);
                    value
                }
            };

            let t = progress(tween.start, tween.duration, local);
            let value = lerp(from, tween.to, tween.easing.apply(t));
            surface.set(tween.element, tween.prop, value);

            if t >= 1.0 {
                tween.finished = true;
            }
        }

        self.cues
            .iter_mut()
            .filter(|cue| cue.at <= local)
            .filter_map(|cue| cue.value.take())
            .collect()
    }
}
