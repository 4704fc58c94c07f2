//! Navigation theme detection
//!
//! Sections are stacked vertically. A horizontal observation line sits at
//! half the nav height; whichever section spans that line decides the nav's
//! theme and background attributes.

use serde::Serialize;

use crate::config::PageConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub name: String,
    pub theme: String,
    pub bg: Option<String>,
    /// Document offset of the section's top edge
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Attributes copied onto the navigation bar
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NavTheme {
    pub theme: Option<String>,
    pub bg: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ThemeSections {
    sections: Vec<Section>,
    /// Distance of the observation line from the viewport top
    offset: f64,
    nav: NavTheme,
}

impl ThemeSections {
    pub fn new(sections: Vec<Section>, nav_height: f64) -> Self {
        Self {
            sections,
            offset: nav_height / 2.0,
            nav: NavTheme::default(),
        }
    }

    /// Stack the configured sections from the document top
    pub fn from_config(page: &PageConfig) -> Self {
        let mut top = 0.0;
        let sections = page
            .sections
            .iter()
            .map(|s| {
                let section = Section {
                    name: s.name.clone(),
                    theme: s.theme.clone(),
                    bg: s.bg.clone(),
                    top,
                    height: s.height,
                };
                top += s.height;
                section
            })
            .collect();
        Self::new(sections, page.nav_height)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn nav(&self) -> &NavTheme {
        &self.nav
    }

    pub fn document_height(&self) -> f64 {
        self.sections.last().map(Section::bottom).unwrap_or(0.0)
    }

    /// Index of the section under the observation line at `scroll_y`
    ///
    /// Adjacent sections share an edge; the later one wins.
    pub fn section_at(&self, scroll_y: f64) -> Option<usize> {
        let line = scroll_y + self.offset;
        self.sections
            .iter()
            .rposition(|s| s.top <= line && s.bottom() >= line)
    }

    /// Re-evaluate at `scroll_y`, returning the new attributes when they changed
    pub fn check(&mut self, scroll_y: f64) -> Option<NavTheme> {
        let section = &self.sections[self.section_at(scroll_y)?];
        let next = NavTheme {
            theme: Some(section.theme.clone()),
            bg: section.bg.clone(),
        };
        if next == self.nav {
            return None;
        }
        self.nav = next.clone();
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> ThemeSections {
        ThemeSections::from_config(&PageConfig::default())
    }

    #[test]
    fn test_layout() {
        let themes = sections();
        assert_eq!(themes.sections()[1].top, 900.0);
        assert_eq!(themes.document_height(), 3800.0);
    }

    #[test]
    fn test_initial_check_sets_theme() {
        let mut themes = sections();
        let change = themes.check(0.0).unwrap();
        assert_eq!(change.theme.as_deref(), Some("dark"));
        assert_eq!(change.bg.as_deref(), Some("transparent"));
        assert!(themes.check(10.0).is_none());
    }

    #[test]
    fn test_switches_at_observation_line() {
        let mut themes = sections();
        themes.check(0.0);
        // Line at scroll + 40 reaches the features section at 900
        assert!(themes.check(850.0).is_none());
        let change = themes.check(860.0).unwrap();
        assert_eq!(change.theme.as_deref(), Some("light"));

        // faq has no background attribute
        let change = themes.check(2200.0).unwrap();
        assert_eq!(change, NavTheme { theme: Some("light".to_string()), bg: None });
    }

    #[test]
    fn test_outside_every_section_keeps_attributes() {
        let mut themes = sections();
        themes.check(0.0);
        assert!(themes.check(10_000.0).is_none());
        assert_eq!(themes.nav().theme.as_deref(), Some("dark"));
    }
}
