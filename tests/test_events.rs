// ABOUTME: Unit tests for event handling to ensure keyboard and mouse input
// maps to the intended app actions

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::prelude::Rect;

use termfolio::app::{AppEvent, AppState, EventHandler, Page};
use termfolio::config::Config;

fn test_state() -> AppState {
    AppState::new(Config::default(), None, false)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

const SCREEN: Rect = Rect {
    x: 0,
    y: 0,
    width: 120,
    height: 40,
};

#[test]
fn quit_key_events() {
    let mut state = test_state();

    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Char('q')), &mut state),
        Some(AppEvent::Quit)
    );
    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Esc), &mut state),
        Some(AppEvent::Quit)
    );
    assert_eq!(
        EventHandler::handle_key_event(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut state
        ),
        Some(AppEvent::Quit)
    );
}

#[test]
fn page_navigation_key_events() {
    let mut state = test_state();

    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Char('l')), &mut state),
        Some(AppEvent::NextPage)
    );
    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Char('h')), &mut state),
        Some(AppEvent::PrevPage)
    );
    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Char('3')), &mut state),
        Some(AppEvent::GoToPage(Page::Skills))
    );
    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Char('5')), &mut state),
        Some(AppEvent::GoToPage(Page::Contact))
    );
}

#[test]
fn theme_and_help_key_events() {
    let mut state = test_state();

    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Char('t')), &mut state),
        Some(AppEvent::ToggleTheme)
    );
    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Char('?')), &mut state),
        Some(AppEvent::ToggleHelp)
    );
}

#[test]
fn help_overlay_swallows_other_keys() {
    let mut state = test_state();
    state.toggle_help();

    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Char('t')), &mut state),
        None
    );
    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Esc), &mut state),
        Some(AppEvent::ToggleHelp)
    );
}

#[test]
fn splash_blocks_everything_but_quit() {
    let mut state = AppState::new(Config::default(), None, true);
    assert!(!state.splash.is_done());

    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Char('l')), &mut state),
        None
    );
    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Char('q')), &mut state),
        Some(AppEvent::Quit)
    );
}

#[test]
fn contact_page_routes_keys_to_the_form() {
    let mut state = test_state();
    state.go_to_page(Page::Contact);

    // Plain characters are typed, not interpreted as shortcuts.
    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Char('q')), &mut state),
        Some(AppEvent::FormInputChar('q'))
    );
    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Tab), &mut state),
        Some(AppEvent::FormNextField)
    );
    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::BackTab), &mut state),
        Some(AppEvent::FormPrevField)
    );
    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Esc), &mut state),
        Some(AppEvent::FormLeave)
    );
}

#[test]
fn enter_submits_only_on_the_button() {
    let mut state = test_state();
    state.go_to_page(Page::Contact);

    // First field: Enter moves on.
    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Enter), &mut state),
        Some(AppEvent::FormNextField)
    );

    // Walk focus to the submit button (three more fields).
    for _ in 0..4 {
        state.contact_form.focus_next();
    }
    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Enter), &mut state),
        Some(AppEvent::FormSubmit)
    );
}

#[test]
fn konami_sequence_triggers_easter_egg() {
    let mut state = test_state();

    let sequence = [
        KeyCode::Up,
        KeyCode::Up,
        KeyCode::Down,
        KeyCode::Down,
        KeyCode::Left,
        KeyCode::Right,
        KeyCode::Left,
        KeyCode::Right,
        KeyCode::Char('b'),
    ];
    for code in sequence {
        let event = EventHandler::handle_key_event(key(code), &mut state);
        assert_ne!(event, Some(AppEvent::EasterEggTriggered));
    }
    assert_eq!(
        EventHandler::handle_key_event(key(KeyCode::Char('a')), &mut state),
        Some(AppEvent::EasterEggTriggered)
    );
}

#[test]
fn clicking_the_logo_is_counted() {
    let state = test_state();
    assert_eq!(
        EventHandler::handle_mouse_event(click(5, 1), SCREEN, &state),
        Some(AppEvent::LogoClicked)
    );
}

#[test]
fn clicking_a_nav_tab_switches_pages() {
    let state = test_state();
    // First tab after the logo is Home; the last one is Contact.
    assert_eq!(
        EventHandler::handle_mouse_event(click(25, 1), SCREEN, &state),
        Some(AppEvent::GoToPage(Page::Home))
    );
    assert_eq!(
        EventHandler::handle_mouse_event(click(115, 1), SCREEN, &state),
        Some(AppEvent::GoToPage(Page::Contact))
    );
}

#[test]
fn clicking_the_toast_dismisses_it() {
    let mut state = test_state();

    // Without a notification the same spot does nothing.
    assert_eq!(
        EventHandler::handle_mouse_event(click(100, 4), SCREEN, &state),
        None
    );

    state.notifications.info("hello");
    assert_eq!(
        EventHandler::handle_mouse_event(click(100, 4), SCREEN, &state),
        Some(AppEvent::DismissNotification)
    );
}

#[test]
fn process_event_updates_state() {
    let mut state = test_state();

    EventHandler::process_event(AppEvent::NextPage, &mut state);
    assert_eq!(state.current_page, Page::About);

    EventHandler::process_event(AppEvent::ToggleHelp, &mut state);
    assert!(state.help_visible);

    EventHandler::process_event(AppEvent::FormSubmit, &mut state);
    assert!(state.submit_requested);

    EventHandler::process_event(AppEvent::Quit, &mut state);
    assert!(state.should_quit);
}
