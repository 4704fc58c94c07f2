use pagewire_core::config::TabGroupConfig;
use pagewire_core::{Prop, TabGroup};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::{bar_cells, style_value, truncate_to_width};
use crate::app::{App, Focus};

pub struct TabGroupWidget;

impl TabGroupWidget {
    /// Render every tab group, stacked vertically
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let groups = app.runtime.tab_groups();
        if groups.is_empty() {
            return;
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Ratio(1, groups.len() as u32); groups.len()])
            .split(area);

        let cursor = app.tab_target();
        for (index, (group, config)) in groups.iter().zip(&app.runtime.page().tab_groups).enumerate() {
            let selected = match cursor {
                Some((g, item)) if g == index && app.focus == Focus::Tabs => Some(item),
                _ => None,
            };
            Self::render_group(frame, rows[index], app, group, config, selected);
        }
    }

    fn render_group(
        frame: &mut Frame,
        area: Rect,
        app: &App,
        group: &TabGroup,
        config: &TabGroupConfig,
        selected: Option<usize>,
    ) {
        let theme = &app.theme;
        let scene = app.runtime.scene();

        let border_style = if app.focus == Focus::Tabs {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.border)
        };

        let mut title = format!(" {} ", group.name());
        if group.autoplay_enabled() {
            title.push_str("[autoplay] ");
        }
        if group.is_transitioning() {
            title.push_str("… ");
        }

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(theme.background));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(inner);

        let text_width = columns[0].width.saturating_sub(2) as usize;
        let mut lines = Vec::new();
        for (i, (item, content)) in group.items().iter().zip(&config.contents).enumerate() {
            let active = scene.is_active(item.content);
            let marker = if active { "▸ " } else { "  " };

            let mut style = if active {
                Style::default().fg(theme.active).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_soft)
            };
            if selected == Some(i) {
                style = style.bg(theme.selection);
            }
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(theme.active)),
                Span::styled(truncate_to_width(&content.title, text_width), style),
            ]));

            if let Some(details) = item.details {
                if style_value(scene, details, Prop::Height) > 0.05 {
                    lines.push(Line::from(Span::styled(
                        format!("  {}", truncate_to_width(&content.body, text_width)),
                        Style::default().fg(theme.muted),
                    )));
                }
            }

            if let Some(progress) = item.progress {
                let (filled, empty) = bar_cells(style_value(scene, progress, Prop::ScaleX), text_width);
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled("━".repeat(filled), Style::default().fg(theme.progress)),
                    Span::styled("─".repeat(empty), Style::default().fg(theme.raised)),
                ]));
            }
        }
        frame.render_widget(Paragraph::new(lines), columns[0]);

        Self::render_visual(frame, columns[1], app, group, config);
    }

    /// The most revealed visual wins the panel
    fn render_visual(frame: &mut Frame, area: Rect, app: &App, group: &TabGroup, config: &TabGroupConfig) {
        let theme = &app.theme;
        let scene = app.runtime.scene();

        let shown = group
            .items()
            .iter()
            .map(|item| style_value(scene, item.visual, Prop::Opacity) * style_value(scene, item.visual, Prop::Clip))
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(&b.1));

        let block = Block::default()
            .borders(Borders::LEFT)
            .border_style(Style::default().fg(theme.raised));

        let Some((index, reveal)) = shown.filter(|(_, reveal)| *reveal > 0.0) else {
            frame.render_widget(block, area);
            return;
        };
        let label = config.visuals.get(index).map(|v| v.label.as_str()).unwrap_or_default();

        let style = if reveal > 0.5 {
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.border)
        };
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(label.to_string(), style)),
            Line::from(Span::styled(
                format!("{:.0}%", reveal * 100.0),
                Style::default().fg(theme.muted),
            )),
        ];
        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}
