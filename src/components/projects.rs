// ABOUTME: Projects page: scrollable list of showcased projects

use ratatui::{
    prelude::*,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use super::palette;
use crate::app::state::AppState;

pub struct ProjectsComponent {
    list_state: ListState,
}

impl ProjectsComponent {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let colors = palette(state.theme, state.easter_egg_active());

        let items: Vec<ListItem> = state
            .profile
            .projects
            .iter()
            .map(|project| {
                ListItem::new(vec![
                    Line::from(Span::styled(
                        project.name,
                        Style::default().fg(colors.fg).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        format!("  {}", project.description),
                        Style::default().fg(colors.fg),
                    )),
                    Line::from(Span::styled(
                        format!("  {}", project.stack),
                        Style::default().fg(colors.muted),
                    )),
                    Line::from(""),
                ])
            })
            .collect();

        self.list_state.select(Some(state.projects_scroll));

        let list = List::new(items)
            .block(
                Block::default()
                    .title("Projects  (j/k to scroll)")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(colors.accent)),
            )
            .highlight_style(Style::default().fg(colors.highlight));
        frame.render_stateful_widget(list, area, &mut self.list_state);
    }
}

impl Default for ProjectsComponent {
    fn default() -> Self {
        Self::new()
    }
}
