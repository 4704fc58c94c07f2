use pagewire_core::Prop;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use super::{bar_cells, style_value};
use crate::app::App;

const LOGO: &str = "pagewire";

pub struct LoaderWidget;

impl LoaderWidget {
    /// Full-screen intro cover, drawn while the loader root is visible
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let scene = app.runtime.scene();
        let elements = app.runtime.loader().elements();
        let visible = scene.style(elements.root).is_some_and(|s| s.visible);
        if !visible || app.runtime.loader().is_finished() {
            return;
        }

        let theme = &app.theme;
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(theme.panel)), area);

        // Background wipe shrinks from the bottom
        let cover = style_value(scene, elements.background, Prop::Clip);
        let (covered, _) = bar_cells(cover, area.height as usize);
        let cover_area = Rect::new(area.x, area.y, area.width, covered as u16);
        frame.render_widget(Block::default().style(Style::default().bg(theme.raised)), cover_area);

        // Logo slides in and out vertically
        let shift = style_value(scene, elements.logo, Prop::TranslateY) / 100.0;
        let quarter = (area.height / 4) as f64;
        let row = (area.height / 2) as i32 + (shift * quarter).round() as i32;
        if row >= 0 && (row as u16) < area.height {
            let logo = Paragraph::new(Line::from(Span::styled(
                LOGO,
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center);
            frame.render_widget(logo, Rect::new(area.x, area.y + row as u16, area.width, 1));
        }

        // Second panel wipe as a progress line under the logo
        let panel = style_value(scene, elements.second_panel, Prop::Clip);
        let width = area.width.saturating_sub(4) as usize;
        let (filled, empty) = bar_cells(panel, width);
        let bar_row = area.y + area.height.saturating_sub(2);
        let bar = Paragraph::new(Line::from(vec![
            Span::styled("━".repeat(filled), Style::default().fg(theme.accent)),
            Span::styled(" ".repeat(empty), Style::default()),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(bar, Rect::new(area.x + 2, bar_row, area.width.saturating_sub(4), 1));
    }
}
