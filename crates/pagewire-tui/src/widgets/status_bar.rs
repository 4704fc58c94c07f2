use pagewire_core::motion::timing::as_millis;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let mode_str = match app.mode {
            Mode::Normal => "NORMAL",
            Mode::Help => "HELP",
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else {
            format!(
                " {} | {} | t={}ms",
                mode_str,
                app.focus.as_str(),
                as_millis(app.now())
            )
        };

        let help_hint = " q:quit tab:focus j/k:move enter:select ?:help ";
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.chars().count() + help_hint.len());

        let status_style = if app.status_message.is_some() {
            Style::default().fg(theme.error).bg(theme.raised)
        } else {
            Style::default().fg(theme.text).bg(theme.raised)
        };

        let line = Line::from(vec![
            Span::styled(status_text, status_style),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.raised)),
            Span::styled(help_hint, Style::default().fg(theme.muted).bg(theme.raised)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
