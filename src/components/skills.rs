// ABOUTME: Skills page: proficiency gauges animated on first reveal

use ratatui::{
    prelude::*,
    style::{Modifier, Style},
    widgets::{Block, Borders, Gauge},
};

use super::palette;
use crate::app::state::AppState;

pub struct SkillsComponent;

impl SkillsComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let colors = palette(state.theme, state.easter_egg_active());

        let outer = Block::default()
            .title("Skills")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.accent));
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                state
                    .profile
                    .skills
                    .iter()
                    .map(|_| Constraint::Length(2))
                    .collect::<Vec<_>>(),
            )
            .split(inner);

        for (index, (skill, row)) in state
            .profile
            .skills
            .iter()
            .zip(rows.iter().copied())
            .enumerate()
        {
            if row.height == 0 {
                continue;
            }
            // Animate toward the target width as the reveal progresses.
            let shown = f64::from(skill.level) * state.skills_reveal.progress(index);
            let ratio = (shown / 100.0).clamp(0.0, 1.0);

            let gauge = Gauge::default()
                .block(Block::default().title(Span::styled(
                    skill.name,
                    Style::default().fg(colors.fg).add_modifier(Modifier::BOLD),
                )))
                .gauge_style(Style::default().fg(colors.accent))
                .label(format!("{}%", shown.round() as u16))
                .ratio(ratio);
            frame.render_widget(gauge, row);
        }
    }
}

impl Default for SkillsComponent {
    fn default() -> Self {
        Self::new()
    }
}
