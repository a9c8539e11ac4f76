// ABOUTME: Event handling: keyboard and mouse input mapped to app actions

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::prelude::Rect;

use crate::app::state::{AppState, Page};
use crate::components::{navbar, toast};
use crate::contact::form::FocusTarget;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    ToggleHelp,
    ToggleTheme,
    NextPage,
    PrevPage,
    GoToPage(Page),
    ScrollDown,
    ScrollUp,
    ScrollTop,
    DismissNotification,
    // Contact form events
    FormNextField,
    FormPrevField,
    FormInputChar(char),
    FormBackspace,
    FormSubmit,
    FormLeave,
    // Easter eggs
    EasterEggTriggered,
    LogoClicked,
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, state: &mut AppState) -> Option<AppEvent> {
        if key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL)
        {
            return Some(AppEvent::Quit);
        }

        // The Konami watcher sees every key, like the original page-level
        // listener; keys it does not complete the sequence with fall
        // through to normal handling.
        if state.konami.observe(key_event.code) {
            return Some(AppEvent::EasterEggTriggered);
        }

        // Only quitting works while the splash is up.
        if !state.splash.is_done() {
            return match key_event.code {
                KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
                _ => None,
            };
        }

        if state.help_visible {
            return match key_event.code {
                KeyCode::Char('?') | KeyCode::Esc => Some(AppEvent::ToggleHelp),
                _ => None,
            };
        }

        if state.current_page == Page::Contact && state.form_active {
            return Self::handle_form_keys(key_event, state);
        }

        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
            KeyCode::Char('t') => Some(AppEvent::ToggleTheme),
            KeyCode::Char('h') | KeyCode::Left => Some(AppEvent::PrevPage),
            KeyCode::Char('l') | KeyCode::Right => Some(AppEvent::NextPage),
            KeyCode::Char('1') => Some(AppEvent::GoToPage(Page::Home)),
            KeyCode::Char('2') => Some(AppEvent::GoToPage(Page::About)),
            KeyCode::Char('3') => Some(AppEvent::GoToPage(Page::Skills)),
            KeyCode::Char('4') => Some(AppEvent::GoToPage(Page::Projects)),
            KeyCode::Char('5') => Some(AppEvent::GoToPage(Page::Contact)),
            KeyCode::Char('j') | KeyCode::Down => Some(AppEvent::ScrollDown),
            KeyCode::Char('k') | KeyCode::Up => Some(AppEvent::ScrollUp),
            KeyCode::Char('g') => Some(AppEvent::ScrollTop),
            KeyCode::Char('x') => Some(AppEvent::DismissNotification),
            // Re-enter the form after leaving it with Esc.
            KeyCode::Enter if state.current_page == Page::Contact => {
                Some(AppEvent::GoToPage(Page::Contact))
            }
            _ => None,
        }
    }

    fn handle_form_keys(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Esc => Some(AppEvent::FormLeave),
            KeyCode::Tab | KeyCode::Down => Some(AppEvent::FormNextField),
            KeyCode::BackTab | KeyCode::Up => Some(AppEvent::FormPrevField),
            KeyCode::Backspace => Some(AppEvent::FormBackspace),
            KeyCode::Enter => match state.contact_form.focus() {
                FocusTarget::SubmitButton => Some(AppEvent::FormSubmit),
                FocusTarget::Field(_) if state.contact_form.focused_is_multiline() => {
                    Some(AppEvent::FormInputChar('\n'))
                }
                FocusTarget::Field(_) => Some(AppEvent::FormNextField),
            },
            KeyCode::Char(ch) => Some(AppEvent::FormInputChar(ch)),
            _ => None,
        }
    }

    /// Hit-test mouse clicks against the same geometry the renderer uses:
    /// the toast (dismiss), the logo (click counter), and the nav tabs.
    pub fn handle_mouse_event(
        mouse: MouseEvent,
        size: Rect,
        state: &AppState,
    ) -> Option<AppEvent> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) || !state.splash.is_done() {
            return None;
        }

        if state.notifications.current().is_some()
            && contains(toast::toast_area(size), mouse.column, mouse.row)
        {
            return Some(AppEvent::DismissNotification);
        }

        if contains(navbar::logo_hit_area(size), mouse.column, mouse.row) {
            return Some(AppEvent::LogoClicked);
        }

        for (page, area) in navbar::tab_hit_areas(size) {
            if contains(area, mouse.column, mouse.row) {
                return Some(AppEvent::GoToPage(page));
            }
        }

        None
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        match event {
            AppEvent::Quit => state.quit(),
            AppEvent::ToggleHelp => state.toggle_help(),
            AppEvent::ToggleTheme => state.toggle_theme(),
            AppEvent::NextPage => state.next_page(),
            AppEvent::PrevPage => state.prev_page(),
            AppEvent::GoToPage(page) => state.go_to_page(page),
            AppEvent::ScrollDown => state.scroll_down(),
            AppEvent::ScrollUp => state.scroll_up(),
            AppEvent::ScrollTop => state.scroll_top(),
            AppEvent::DismissNotification => state.notifications.dismiss(),
            AppEvent::FormNextField => state.contact_form.focus_next(),
            AppEvent::FormPrevField => state.contact_form.focus_prev(),
            AppEvent::FormInputChar(ch) => state.contact_form.input_char(ch),
            AppEvent::FormBackspace => state.contact_form.backspace(),
            AppEvent::FormSubmit => {
                // The submitter lives on App; the tick performs the attempt.
                state.submit_requested = true;
            }
            AppEvent::FormLeave => state.form_active = false,
            AppEvent::EasterEggTriggered => state.activate_konami_egg(),
            AppEvent::LogoClicked => state.logo_clicked(),
        }
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
