use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::themes::section_color;

pub struct NavBarWidget;

impl NavBarWidget {
    /// Top bar styled by the section under the observation line
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let runtime = &app.runtime;
        let nav = runtime.themes().nav();

        let (fg, mut bg) = match nav.theme.as_deref() {
            Some("light") => (theme.nav_dark, theme.nav_light),
            Some("dark") => (theme.nav_light, theme.nav_dark),
            _ => (theme.text, theme.panel),
        };
        if let Some(color) = nav.bg.as_deref().and_then(section_color) {
            bg = color;
        }
        let style = Style::default().fg(fg).bg(bg);

        let section = runtime
            .themes()
            .section_at(runtime.scroll_y())
            .and_then(|i| runtime.themes().sections().get(i))
            .map(|s| s.name.as_str())
            .unwrap_or("-");

        let mut left = format!(
            " ◆ pagewire  {}  {:.0}/{:.0}",
            section,
            runtime.scroll_y(),
            runtime.max_scroll()
        );
        if runtime.is_scroll_locked() {
            left.push_str("  [locked]");
        }

        let right = runtime
            .countdown()
            .map(|c| format!("{} {} ", c.days_remaining(), c.label()))
            .unwrap_or_default();

        let padding = (area.width as usize).saturating_sub(left.chars().count() + right.chars().count());
        let line = Line::from(vec![
            Span::styled(left, style.add_modifier(Modifier::BOLD)),
            Span::styled(" ".repeat(padding), style),
            Span::styled(right, style),
        ]);
        frame.render_widget(Paragraph::new(line).style(style), area);
    }
}
