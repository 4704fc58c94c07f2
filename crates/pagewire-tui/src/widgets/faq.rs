use pagewire_core::Prop;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{style_value, truncate_to_width};
use crate::app::{App, Focus};

pub struct FaqWidget;

impl FaqWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let scene = app.runtime.scene();
        let is_focused = app.focus == Focus::Faq;

        let border_style = if is_focused {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.border)
        };
        let block = Block::default()
            .title(" FAQ ")
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(theme.background));

        let width = area.width.saturating_sub(4) as usize;
        let questions = &app.runtime.page().faq.items;
        let mut lines = Vec::new();

        for (i, (faq, text)) in app.runtime.accordion().items().iter().zip(questions).enumerate() {
            let open = scene.is_active(faq.item);
            let marker = if open { "− " } else { "+ " };

            let mut style = if open {
                Style::default().fg(theme.active).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_soft)
            };
            if is_focused && app.cursor() == i {
                style = style.bg(theme.selection);
            }
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(theme.active)),
                Span::styled(truncate_to_width(&text.question, width), style),
            ]));

            // Answers unfold with their height
            let height = style_value(scene, faq.answer, Prop::Height);
            if height > 0.0 {
                let answer = truncate_to_width(&text.answer, width);
                let shown = (answer.chars().count() as f64 * height).ceil() as usize;
                lines.push(Line::from(Span::styled(
                    format!("  {}", answer.chars().take(shown).collect::<String>()),
                    Style::default().fg(theme.muted),
                )));
            }
        }

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
