mod event_log;
mod faq;
mod loader;
mod media;
mod nav_bar;
mod popup;
mod status_bar;
mod tab_group;

pub use event_log::{describe_event, EventLogWidget};
pub use faq::FaqWidget;
pub use loader::LoaderWidget;
pub use media::MediaWidget;
pub use nav_bar::NavBarWidget;
pub use popup::PopupWidget;
pub use status_bar::StatusBarWidget;
pub use tab_group::TabGroupWidget;

use pagewire_core::{ElementId, Prop, Scene};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Current value of a property; elements missing from the scene read as 0
pub(crate) fn style_value(scene: &Scene, id: ElementId, prop: Prop) -> f64 {
    scene.style(id).map(|s| s.get(prop)).unwrap_or(0.0)
}

/// Cut `s` to at most `max` terminal columns, marking the cut with an ellipsis
pub(crate) fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Filled and empty parts of a horizontal bar `width` cells wide
pub(crate) fn bar_cells(ratio: f64, width: usize) -> (usize, usize) {
    let filled = (ratio.clamp(0.0, 1.0) * width as f64).round() as usize;
    (filled, width - filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("a longer line", 6), "a lon…");
        assert_eq!(truncate_to_width("日本語テキスト", 7), "日本語…");
        assert_eq!(truncate_to_width("anything", 0), "");
    }

    #[test]
    fn test_bar_cells() {
        assert_eq!(bar_cells(0.5, 10), (5, 5));
        assert_eq!(bar_cells(1.5, 4), (4, 0));
        assert_eq!(bar_cells(-1.0, 4), (0, 4));
    }
}
