// ABOUTME: Top navigation bar: logo plus page tabs with the active page
// highlighted; exposes the hit-test geometry shared with mouse handling

use ratatui::{
    prelude::*,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::{palette, Palette};
use crate::app::state::{AppState, Page};

pub const HEADER_HEIGHT: u16 = 3;
const LOGO_WIDTH: u16 = 20;

/// The header strip at the top of the terminal.
pub fn header_area(size: Rect) -> Rect {
    Rect {
        height: HEADER_HEIGHT.min(size.height),
        ..size
    }
}

/// Where the logo lives; mouse clicks here feed the click counter.
pub fn logo_hit_area(size: Rect) -> Rect {
    let header = header_area(size);
    Rect {
        width: LOGO_WIDTH.min(header.width),
        ..header
    }
}

/// One equal-width hit rect per page tab, to the right of the logo. The
/// renderer draws into the same rects, so clicks cannot drift from what is
/// on screen.
pub fn tab_hit_areas(size: Rect) -> Vec<(Page, Rect)> {
    let header = header_area(size);
    if header.width <= LOGO_WIDTH {
        return Vec::new();
    }
    let tabs = Rect {
        x: header.x + LOGO_WIDTH,
        width: header.width - LOGO_WIDTH,
        ..header
    };
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 5); 5])
        .split(tabs);
    Page::ALL
        .into_iter()
        .zip(chunks.iter().copied())
        .collect()
}

pub struct NavbarComponent;

impl NavbarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let colors = palette(state.theme, state.easter_egg_active());

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.accent));
        frame.render_widget(block, area);

        self.render_logo(frame, logo_hit_area(area), state, colors);
        for (page, tab_area) in tab_hit_areas(area) {
            self.render_tab(frame, tab_area, page, state, colors);
        }
    }

    fn render_logo(&self, frame: &mut Frame, area: Rect, state: &AppState, colors: Palette) {
        let inner = inset(area);
        let text = if state.title_swapped() {
            "* secret found! *".to_string()
        } else {
            state.profile.name.to_string()
        };
        let logo = Paragraph::new(text)
            .style(
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        frame.render_widget(logo, inner);
    }

    fn render_tab(
        &self,
        frame: &mut Frame,
        area: Rect,
        page: Page,
        state: &AppState,
        colors: Palette,
    ) {
        let inner = inset(area);
        let style = if page == state.current_page {
            Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(colors.fg)
        };
        let tab = Paragraph::new(page.title())
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(tab, inner);
    }
}

impl Default for NavbarComponent {
    fn default() -> Self {
        Self::new()
    }
}

// Middle row of a three-row bordered strip.
fn inset(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y + 1,
        width: area.width,
        height: area.height.saturating_sub(2).max(1),
    }
}
