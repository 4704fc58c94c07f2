//! Rendering surface
//!
//! Controllers address page regions through opaque [`ElementId`] handles and
//! write presentation state through the [`Surface`] trait. [`Scene`] is the
//! in-memory surface the runtime, the terminal front-end and the tests share.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// Opaque handle to one presentational region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ElementId(u32);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Animatable numeric property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Prop {
    /// 0 = transparent, 1 = opaque
    Opacity,
    /// Revealed fraction of a clip-path wipe, 0 = fully clipped
    Clip,
    /// Fraction of the element's natural height
    Height,
    /// Horizontal scale, used by progress fills
    ScaleX,
    /// Vertical offset in pixels
    TranslateY,
}

/// Presentation state of one element
#[derive(Debug, Clone, PartialEq)]
pub struct ElementStyle {
    pub label: String,
    /// Styling hook flag (the "active" / "open" class)
    pub active: bool,
    /// Display flag; hidden elements are not rendered at all
    pub visible: bool,
    pub opacity: f64,
    pub clip: f64,
    pub height: f64,
    pub scale_x: f64,
    pub translate_y: f64,
}

impl ElementStyle {
    fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            active: false,
            visible: true,
            opacity: 1.0,
            clip: 1.0,
            height: 1.0,
            scale_x: 1.0,
            translate_y: 0.0,
        }
    }

    pub fn get(&self, prop: Prop) -> f64 {
        match prop {
            Prop::Opacity => self.opacity,
            Prop::Clip => self.clip,
            Prop::Height => self.height,
            Prop::ScaleX => self.scale_x,
            Prop::TranslateY => self.translate_y,
        }
    }

    fn set(&mut self, prop: Prop, value: f64) {
        match prop {
            Prop::Opacity => self.opacity = value,
            Prop::Clip => self.clip = value,
            Prop::Height => self.height = value,
            Prop::ScaleX => self.scale_x = value,
            Prop::TranslateY => self.translate_y = value,
        }
    }
}

/// Write access to presentation state
pub trait Surface {
    fn set_active(&mut self, id: ElementId, active: bool);

    fn set_visible(&mut self, id: ElementId, visible: bool);

    /// Current value of a property; unknown elements report the default
    fn get(&self, id: ElementId, prop: Prop) -> f64;

    fn set(&mut self, id: ElementId, prop: Prop, value: f64);
}

/// In-memory surface holding every element of a page
#[derive(Debug, Default)]
pub struct Scene {
    elements: HashMap<ElementId, ElementStyle>,
    next_id: u32,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new element and return its handle
    pub fn insert(&mut self, label: impl Into<String>) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.elements.insert(id, ElementStyle::new(label));
        id
    }

    pub fn style(&self, id: ElementId) -> Option<&ElementStyle> {
        self.elements.get(&id)
    }

    pub fn is_active(&self, id: ElementId) -> bool {
        self.elements.get(&id).is_some_and(|s| s.active)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Surface for Scene {
    fn set_active(&mut self, id: ElementId, active: bool) {
        if let Some(style) = self.elements.get_mut(&id) {
            style.active = active;
        }
    }

    fn set_visible(&mut self, id: ElementId, visible: bool) {
        if let Some(style) = self.elements.get_mut(&id) {
            style.visible = visible;
        }
    }

    fn get(&self, id: ElementId, prop: Prop) -> f64 {
        self.elements
            .get(&id)
            .map(|s| s.get(prop))
            .unwrap_or_else(|| ElementStyle::new("").get(prop))
    }

    fn set(&mut self, id: ElementId, prop: Prop, value: f64) {
        if let Some(style) = self.elements.get_mut(&id) {
            style.set(prop, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_assigns_distinct_ids() {
        let mut scene = Scene::new();
        let a = scene.insert("a");
        let b = scene.insert("b");
        assert_ne!(a, b);
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.style(b).unwrap().label, "b");
    }

    #[test]
    fn test_defaults_and_updates() {
        let mut scene = Scene::new();
        let id = scene.insert("visual");
        assert_eq!(scene.get(id, Prop::Opacity), 1.0);
        assert!(!scene.is_active(id));

        scene.set(id, Prop::Opacity, 0.25);
        scene.set_active(id, true);
        scene.set_visible(id, false);

        let style = scene.style(id).unwrap();
        assert_eq!(style.opacity, 0.25);
        assert!(style.active);
        assert!(!style.visible);
    }
}
