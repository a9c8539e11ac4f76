// ABOUTME: Contact page: the form fields with validity coloring and the
// submit button with its busy state

use ratatui::{
    prelude::*,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::{palette, Palette};
use crate::app::state::AppState;
use crate::contact::form::{Field, FocusTarget, Validity};

pub struct ContactComponent;

impl ContactComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let colors = palette(state.theme, state.easter_egg_active());

        let outer = Block::default()
            .title("Contact Me")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.accent));
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        // Three single-line fields, a taller message box, then the button.
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(inner);

        let focus = state.contact_form.focus();
        for (index, field) in state.contact_form.fields.iter().enumerate() {
            let focused = state.form_active && focus == FocusTarget::Field(index);
            self.render_field(frame, rows[index], field, focused, colors);
        }

        self.render_submit(frame, rows[4], state, colors);
    }

    fn render_field(
        &self,
        frame: &mut Frame,
        area: Rect,
        field: &Field,
        focused: bool,
        colors: Palette,
    ) {
        let border = match field.validity {
            Validity::Invalid => Style::default().fg(Color::Red),
            Validity::Valid => Style::default().fg(Color::Green),
            Validity::Neutral if focused => Style::default().fg(colors.accent),
            Validity::Neutral => Style::default().fg(colors.muted),
        };

        let mut text = field.value.clone();
        if focused {
            text.push('\u{2588}');
        }
        // Text::from keeps embedded newlines in the message field intact.
        let shown = if text.is_empty() && !focused {
            Text::styled(field.label, Style::default().fg(colors.muted))
        } else {
            Text::styled(text, Style::default().fg(colors.fg))
        };

        let input = Paragraph::new(shown)
            .block(
                Block::default()
                    .title(field.label)
                    .borders(Borders::ALL)
                    .border_style(border),
            )
            .wrap(Wrap { trim: false });
        frame.render_widget(input, area);
    }

    fn render_submit(&self, frame: &mut Frame, area: Rect, state: &AppState, colors: Palette) {
        let focused = state.form_active && state.contact_form.focus() == FocusTarget::SubmitButton;
        let busy = state.contact_form.is_submitting();

        let label = if busy { "Sending..." } else { "Send Message" };
        let mut style = Style::default().fg(if busy { colors.muted } else { colors.accent });
        if focused && !busy {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        if busy {
            style = style.add_modifier(Modifier::DIM);
        }

        let button = Paragraph::new(label)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(style),
            )
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(button, area);
    }
}

impl Default for ContactComponent {
    fn default() -> Self {
        Self::new()
    }
}
