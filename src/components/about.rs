// ABOUTME: About page: short bio paragraphs

use ratatui::{
    prelude::*,
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::palette;
use crate::app::state::AppState;

pub struct AboutComponent;

impl AboutComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let colors = palette(state.theme, state.easter_egg_active());

        let lines: Vec<Line> = state
            .profile
            .about
            .iter()
            .map(|line| Line::from(*line))
            .collect();

        let body = Paragraph::new(lines)
            .block(
                Block::default()
                    .title("About Me")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(colors.accent)),
            )
            .style(Style::default().fg(colors.fg))
            .wrap(Wrap { trim: false });
        frame.render_widget(body, area);
    }
}

impl Default for AboutComponent {
    fn default() -> Self {
        Self::new()
    }
}
