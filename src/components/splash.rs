// ABOUTME: Startup loading screen shown for a minimum duration, then faded

use ratatui::{
    prelude::*,
    style::{Modifier, Style},
    widgets::Paragraph,
};

use super::palette;
use crate::app::animation::SplashPhase;
use crate::app::state::AppState;

pub struct SplashComponent;

impl SplashComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let colors = palette(state.theme, false);
        let mut style = Style::default()
            .fg(colors.accent)
            .add_modifier(Modifier::BOLD);
        if state.splash.phase() == SplashPhase::Fading {
            style = style.add_modifier(Modifier::DIM);
        }

        let lines = vec![
            Line::from(""),
            Line::from(state.profile.name).style(style),
            Line::from(""),
            Line::from("loading portfolio...").style(Style::default().fg(colors.muted)),
        ];

        let block = Paragraph::new(lines).alignment(Alignment::Center);
        let vertical_pad = area.height / 3;
        let centered = Rect {
            y: area.y + vertical_pad,
            height: area.height.saturating_sub(vertical_pad),
            ..area
        };
        frame.render_widget(block, centered);
    }
}

impl Default for SplashComponent {
    fn default() -> Self {
        Self::new()
    }
}
