// ABOUTME: Toast overlay rendering the notification center's current message

use ratatui::{
    prelude::*,
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::navbar::HEADER_HEIGHT;
use crate::app::notification::{NotificationKind, NotificationPhase};
use crate::app::state::AppState;

const TOAST_WIDTH: u16 = 46;
const TOAST_HEIGHT: u16 = 3;

/// Top-right corner, tucked under the header. Mouse clicks inside this rect
/// dismiss the notification.
pub fn toast_area(size: Rect) -> Rect {
    let width = TOAST_WIDTH.min(size.width);
    Rect {
        x: size.x + size.width - width,
        y: size.y + HEADER_HEIGHT.min(size.height),
        width,
        height: TOAST_HEIGHT.min(size.height.saturating_sub(HEADER_HEIGHT)),
    }
}

pub struct ToastComponent;

impl ToastComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, size: Rect, state: &AppState) {
        let Some(notification) = state.notifications.current() else {
            return;
        };

        let area = toast_area(size);
        if area.width < 8 || area.height == 0 {
            return;
        }
        frame.render_widget(Clear, area);

        let color = kind_color(notification.kind);
        let mut style = Style::default().fg(color);
        if notification.phase() == NotificationPhase::Fading {
            style = style.add_modifier(Modifier::DIM);
        }

        let text = format!("{} {}", kind_icon(notification.kind), notification.message);
        let toast = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(style)
                    .title_alignment(Alignment::Right)
                    .title("[x]"),
            )
            .style(style);
        frame.render_widget(toast, area);
    }
}

impl Default for ToastComponent {
    fn default() -> Self {
        Self::new()
    }
}

fn kind_color(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Success => Color::Green,
        NotificationKind::Error => Color::Red,
        NotificationKind::Info => Color::Cyan,
        NotificationKind::Warning => Color::Yellow,
    }
}

fn kind_icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "✔",
        NotificationKind::Error => "✖",
        NotificationKind::Info => "ℹ",
        NotificationKind::Warning => "⚠",
    }
}
