// ABOUTME: Help overlay listing keyboard shortcuts

use ratatui::{
    prelude::*,
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem},
};

pub struct HelpComponent;

impl HelpComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup_area = self.centered_rect(60, 70, area);

        frame.render_widget(Clear, popup_area);

        let help_items = vec![
            ListItem::new("Pages:").style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            ListItem::new("  h/←        Previous page"),
            ListItem::new("  l/→        Next page"),
            ListItem::new("  1-5        Jump to page"),
            ListItem::new("  j/k        Scroll projects"),
            ListItem::new("  g          Scroll to top"),
            ListItem::new(""),
            ListItem::new("Contact form:").style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            ListItem::new("  Tab        Next field"),
            ListItem::new("  Shift+Tab  Previous field"),
            ListItem::new("  Enter      Next field / send (on the button)"),
            ListItem::new("  Esc        Leave the form"),
            ListItem::new(""),
            ListItem::new("General:").style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            ListItem::new("  t          Toggle dark/light theme"),
            ListItem::new("  x          Dismiss notification"),
            ListItem::new("  ?          Toggle this help"),
            ListItem::new("  q/Esc      Quit"),
            ListItem::new("  Ctrl+C     Force quit"),
        ];

        let help_list = List::new(help_items).block(
            Block::default()
                .title("Help - Press ? or Esc to close")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(help_list, popup_area);
    }

    fn centered_rect(&self, percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}

impl Default for HelpComponent {
    fn default() -> Self {
        Self::new()
    }
}
