use pagewire_core::Prop;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::style_value;
use crate::app::App;

pub struct PopupWidget;

impl PopupWidget {
    /// Render the modal whose panel is on screen, if any
    pub fn render_modal(frame: &mut Frame, app: &App) {
        let scene = app.runtime.scene();
        let modals = app.runtime.modals();

        let Some(handles) = modals
            .modals()
            .iter()
            .find(|m| scene.is_active(m.panel) || style_value(scene, m.panel, Prop::Opacity) > 0.01)
        else {
            return;
        };
        let Some(config) = app.runtime.page().modals.iter().find(|m| m.name == handles.name) else {
            return;
        };

        let theme = &app.theme;
        let area = frame.area();
        let opacity = style_value(scene, handles.panel, Prop::Opacity);
        // 100px of travel maps to a quarter of the screen
        let drop = (style_value(scene, handles.panel, Prop::TranslateY) / 100.0 * (area.height / 4) as f64) as u16;

        let width = 56u16.min(area.width.saturating_sub(4));
        let height = 9u16.min(area.height.saturating_sub(2));
        let mut popup_area = centered_rect(width, height, area);
        popup_area.y = popup_area.y.saturating_add(drop).min(area.bottom().saturating_sub(height));

        frame.render_widget(Clear, popup_area);

        let border_color = if opacity > 0.5 { theme.accent } else { theme.border };
        let mut block = Block::default()
            .title(format!(" {} ", config.title))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(theme.panel));
        if style_value(scene, handles.close_button, Prop::Opacity) > 0.5 {
            block = block.title_top(Line::from(Span::styled(" [x] ", Style::default().fg(theme.close))).right_aligned());
        }

        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        let text_color = if opacity > 0.5 { theme.text } else { theme.border };
        let body = Paragraph::new(config.body.as_str())
            .style(Style::default().fg(text_color))
            .wrap(Wrap { trim: true });
        frame.render_widget(body, chunks[0]);

        let hint = Paragraph::new(Line::from(Span::styled(
            "esc to close",
            Style::default().fg(theme.muted),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(hint, chunks[1]);
    }

    /// Render the key binding overview
    pub fn render_help(frame: &mut Frame, app: &App) {
        let theme = &app.theme;
        let area = frame.area();
        let bindings = app.keymap.help();

        let width = 44u16.min(area.width.saturating_sub(4));
        let height = (bindings.len() as u16 + 4).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(width, height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.panel));

        let mut lines: Vec<Line> = bindings
            .iter()
            .map(|(key, action)| {
                Line::from(vec![
                    Span::styled(
                        format!("{:>10}  ", key),
                        Style::default().fg(theme.active).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(action.description(), Style::default().fg(theme.text)),
                ])
            })
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "press any key to close",
            Style::default().fg(theme.muted),
        )));

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

/// `width` x `height` box in the middle of `area`
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(50, 10, area), Rect::new(25, 15, 50, 10));

        let small = Rect::new(2, 2, 10, 4);
        assert_eq!(centered_rect(20, 8, small), Rect::new(2, 2, 20, 8));
    }
}
