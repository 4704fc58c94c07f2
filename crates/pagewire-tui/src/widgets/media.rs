use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Focus};

const SEPARATOR: &str = " · ";

pub struct MediaWidget;

impl MediaWidget {
    /// Marquee strips followed by one status line per background video
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let is_focused = app.focus == Focus::Video;
        let width = area.width.saturating_sub(2) as usize;

        let border_style = if is_focused {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.border)
        };
        let block = Block::default()
            .title(" Media ")
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(theme.background));

        let mut lines = Vec::new();
        for marquee in app.runtime.marquees() {
            let strip = marquee_window(marquee.text(), marquee.offset(), width);
            lines.push(Line::from(Span::styled(strip, Style::default().fg(theme.marquee))));
        }

        for (i, video) in app.runtime.videos().iter().enumerate() {
            let (icon, state) = if video.is_playing() {
                ("▶", "playing")
            } else if video.paused_by_user() {
                ("⏸", "paused by user")
            } else {
                ("⏸", "paused")
            };
            let cover = video
                .cover_width()
                .map(|w| format!(" cover {:.0}%", w))
                .unwrap_or_default();

            let mut style = Style::default().fg(theme.text_soft);
            if is_focused && app.cursor() == i {
                style = style.bg(theme.selection).add_modifier(Modifier::BOLD);
            }
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", icon), Style::default().fg(theme.playing)),
                Span::styled(format!("video {} {}{}", video.video_id(), state, cover), style),
            ]));
        }

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// Visible slice of a looping marquee track
///
/// `offset` in [0, 1) is the loop position within one repetition of the text.
fn marquee_window(text: &str, offset: f64, width: usize) -> String {
    let unit: Vec<char> = format!("{}{}", text, SEPARATOR).chars().collect();
    if width == 0 {
        return String::new();
    }

    let start = (offset.rem_euclid(1.0) * unit.len() as f64) as usize % unit.len();
    let mut out = String::new();
    for c in unit.iter().cycle().skip(start) {
        if out.width() >= width {
            break;
        }
        out.push(*c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marquee_window_wraps() {
        assert_eq!(marquee_window("ab", 0.0, 6), "ab · a");
        assert_eq!(marquee_window("ab", 0.5, 4), " · a");
    }

    #[test]
    fn test_marquee_window_empty() {
        assert_eq!(marquee_window("ab", 0.0, 0), "");
    }
}
