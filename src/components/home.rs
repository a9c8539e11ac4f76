// ABOUTME: Home page: greeting, the typed rotating headline, and a hint line

use ratatui::{
    prelude::*,
    style::{Modifier, Style},
    widgets::Paragraph,
};

use super::palette;
use crate::app::state::AppState;

pub struct HomeComponent;

impl HomeComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let colors = palette(state.theme, state.easter_egg_active());

        let headline = format!("I'm a {}\u{2588}", state.typed.current());
        let lines = vec![
            Line::from(""),
            Line::from(format!("Hello, I'm {}", state.profile.name)).style(
                Style::default()
                    .fg(colors.fg)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from(""),
            Line::from(headline).style(Style::default().fg(colors.accent)),
            Line::from(""),
            Line::from(state.profile.tagline).style(Style::default().fg(colors.fg)),
            Line::from(""),
            Line::from("Browse with h/l or click the tabs above.")
                .style(Style::default().fg(colors.muted)),
        ];

        let vertical_pad = area.height / 4;
        let centered = Rect {
            y: area.y + vertical_pad,
            height: area.height.saturating_sub(vertical_pad),
            ..area
        };
        let hero = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(hero, centered);
    }
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new()
    }
}
