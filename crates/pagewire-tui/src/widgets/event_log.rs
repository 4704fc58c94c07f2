use pagewire_core::{PageEvent, TabEvent};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

pub struct EventLogWidget;

impl EventLogWidget {
    /// Newest events at the bottom
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let block = Block::default()
            .title(" Events ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .style(Style::default().bg(theme.background));

        let rows = area.height.saturating_sub(2) as usize;
        let mut lines: Vec<Line> = app
            .recent_events()
            .rev()
            .take(rows)
            .map(|event| Line::from(Span::styled(describe_event(event), Style::default().fg(theme.muted))))
            .collect();
        lines.reverse();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// One-line summary of a page event
pub fn describe_event(event: &PageEvent) -> String {
    match event {
        PageEvent::Tab { group, event } => match event {
            TabEvent::SwitchStarted { from, to, cause, at_ms } => {
                let from = from.map(|f| f.to_string()).unwrap_or_else(|| "-".to_string());
                format!("{:>7} {} switch {} -> {} ({})", at_ms, group, from, to, cause.as_str())
            }
            TabEvent::SwitchCompleted { index, at_ms } => {
                format!("{:>7} {} settled on {}", at_ms, group, index)
            }
            TabEvent::AutoAdvanceExpired { index, at_ms } => {
                format!("{:>7} {} timer expired on {}", at_ms, group, index)
            }
            TabEvent::Ignored { index, reason, at_ms } => {
                format!("{:>7} {} ignored {} ({:?})", at_ms, group, index, reason)
            }
        },
        PageEvent::Faq { index, open, at_ms } => {
            format!("{:>7} faq {} {}", at_ms, index, if *open { "opened" } else { "closed" })
        }
        PageEvent::ModalOpened { name, at_ms } => format!("{:>7} modal {} opened", at_ms, name),
        PageEvent::ModalClosed { name, at_ms } => format!("{:>7} modal {} closed", at_ms, name),
        PageEvent::Loader { stage, at_ms } => format!("{:>7} loader {:?}", at_ms, stage),
        PageEvent::ScrollLock { owner, locked, at_ms } => {
            format!("{:>7} scroll lock {:?} -> {}", at_ms, owner, if *locked { "locked" } else { "free" })
        }
        PageEvent::ScrollIgnored { delta, at_ms } => {
            format!("{:>7} scroll {:+.0} ignored", at_ms, delta)
        }
        PageEvent::ThemeChanged { theme, bg, at_ms } => format!(
            "{:>7} nav theme {} bg {}",
            at_ms,
            theme.as_deref().unwrap_or("-"),
            bg.as_deref().unwrap_or("-")
        ),
        PageEvent::Video { index, command, at_ms } => {
            format!("{:>7} video {} {:?}", at_ms, index, command)
        }
        PageEvent::Marquee { index, status, at_ms } => {
            format!("{:>7} marquee {} {:?}", at_ms, index, status)
        }
        PageEvent::Reveal { index, words, at_ms } => {
            format!("{:>7} reveal {} ({} words)", at_ms, index, words)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagewire_core::SwitchCause;

    #[test]
    fn test_describe_switch() {
        let event = PageEvent::Tab {
            group: "features".to_string(),
            event: TabEvent::SwitchStarted {
                from: Some(0),
                to: 1,
                cause: SwitchCause::AutoAdvance,
                at_ms: 6100,
            },
        };
        let text = describe_event(&event);
        assert!(text.contains("features switch 0 -> 1"));
        assert!(text.starts_with("   6100"));
    }

    #[test]
    fn test_describe_scroll_ignored() {
        let event = PageEvent::ScrollIgnored { delta: 120.0, at_ms: 10 };
        assert_eq!(describe_event(&event), "     10 scroll +120 ignored");
    }

    #[test]
    fn test_describe_reveal() {
        let event = PageEvent::Reveal { index: 0, words: 4, at_ms: 3750 };
        assert_eq!(describe_event(&event), "   3750 reveal 0 (4 words)");
    }
}
