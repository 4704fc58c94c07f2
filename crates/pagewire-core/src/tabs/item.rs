//! Tab item handles

use crate::surface::ElementId;

/// Handles of one content item before it is paired with its visual
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentParts {
    pub content: ElementId,
    /// Fill bar showing time until auto-advance
    pub progress: Option<ElementId>,
    /// Region that expands while the item is active
    pub details: Option<ElementId>,
}

impl ContentParts {
    pub fn new(content: ElementId) -> Self {
        Self {
            content,
            progress: None,
            details: None,
        }
    }

    pub fn with_progress(mut self, progress: ElementId) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn with_details(mut self, details: ElementId) -> Self {
        self.details = Some(details);
        self
    }
}

/// One tab: a content block and the visual shown alongside it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabItem {
    pub content: ElementId,
    pub visual: ElementId,
    pub progress: Option<ElementId>,
    pub details: Option<ElementId>,
}

impl TabItem {
    pub fn pair(parts: ContentParts, visual: ElementId) -> Self {
        Self {
            content: parts.content,
            visual,
            progress: parts.progress,
            details: parts.details,
        }
    }
}
