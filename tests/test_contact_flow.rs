// ABOUTME: End-to-end tests for the contact form: typing, validation,
// loading state, and both submission outcomes

use std::sync::{Arc, Mutex};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::oneshot;

use termfolio::app::{App, AppState, EventHandler, Page};
use termfolio::config::Config;
use termfolio::contact::submission::SubmissionResult;
use termfolio::contact::{ContactData, SubmissionError, Submitter, Validity};

/// Submitter whose outcome the test resolves by hand, so the loading state
/// is observable between ticks.
#[derive(Clone, Default)]
struct ManualSubmitter {
    pending: Arc<Mutex<Option<oneshot::Sender<SubmissionResult>>>>,
    captured: Arc<Mutex<Option<ContactData>>>,
}

impl ManualSubmitter {
    fn resolve_success(&self) {
        let data = self
            .captured
            .lock()
            .unwrap()
            .take()
            .expect("submission was started");
        let tx = self
            .pending
            .lock()
            .unwrap()
            .take()
            .expect("submission was started");
        let _ = tx.send(Ok(data));
    }

    fn resolve_failure(&self) {
        let tx = self
            .pending
            .lock()
            .unwrap()
            .take()
            .expect("submission was started");
        let _ = tx.send(Err(SubmissionError::Network));
    }
}

impl Submitter for ManualSubmitter {
    fn submit(&self, data: ContactData) -> oneshot::Receiver<SubmissionResult> {
        let (tx, rx) = oneshot::channel();
        *self.captured.lock().unwrap() = Some(data);
        *self.pending.lock().unwrap() = Some(tx);
        rx
    }
}

fn test_app(submitter: ManualSubmitter) -> App {
    let state = AppState::new(Config::default(), None, false);
    App::with_submitter(state, Box::new(submitter))
}

fn press(app: &mut App, code: KeyCode) {
    let event = KeyEvent::new(code, KeyModifiers::NONE);
    if let Some(app_event) = EventHandler::handle_key_event(event, &mut app.state) {
        EventHandler::process_event(app_event, &mut app.state);
    }
}

fn type_str(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

fn fill_valid_form(app: &mut App) {
    press(app, KeyCode::Char('5'));
    assert_eq!(app.state.current_page, Page::Contact);

    type_str(app, "Ada Lovelace");
    press(app, KeyCode::Tab);
    type_str(app, "ada@example.com");
    press(app, KeyCode::Tab);
    type_str(app, "Saying hello");
    press(app, KeyCode::Tab);
    type_str(app, "This is a sufficiently long message.");
    press(app, KeyCode::Tab); // onto the submit button
}

#[test]
fn successful_submission_clears_the_form() {
    let submitter = ManualSubmitter::default();
    let mut app = test_app(submitter.clone());

    fill_valid_form(&mut app);
    press(&mut app, KeyCode::Enter);
    assert!(app.state.submit_requested);

    // Loading engages and stays engaged until the action resolves.
    app.tick();
    assert!(app.state.contact_form.is_submitting());
    app.tick();
    assert!(app.state.contact_form.is_submitting());

    submitter.resolve_success();
    app.tick();

    assert!(!app.state.contact_form.is_submitting());
    assert!(app
        .state
        .contact_form
        .fields
        .iter()
        .all(|f| f.value.is_empty()));
    let toast = app.state.notifications.current().expect("success toast");
    assert_eq!(
        toast.message,
        "Thank you for your message! I will get back to you soon."
    );
}

#[test]
fn failed_submission_keeps_entered_values() {
    let submitter = ManualSubmitter::default();
    let mut app = test_app(submitter.clone());

    fill_valid_form(&mut app);
    press(&mut app, KeyCode::Enter);
    app.tick();
    assert!(app.state.contact_form.is_submitting());

    submitter.resolve_failure();
    app.tick();

    assert!(!app.state.contact_form.is_submitting());
    assert_eq!(app.state.contact_form.fields[0].value, "Ada Lovelace");
    assert_eq!(app.state.contact_form.fields[1].value, "ada@example.com");
    assert_eq!(
        app.state.contact_form.fields[3].value,
        "This is a sufficiently long message."
    );
    let toast = app.state.notifications.current().expect("error toast");
    assert_eq!(
        toast.message,
        "Sorry, there was an error sending your message. Please try again."
    );
}

#[test]
fn invalid_submission_highlights_fields_and_notifies() {
    let submitter = ManualSubmitter::default();
    let mut app = test_app(submitter.clone());

    press(&mut app, KeyCode::Char('5'));
    type_str(&mut app, "Ada");
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "not-an-email");
    // Walk to the submit button past the untouched fields.
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);

    app.tick();
    assert!(!app.state.contact_form.is_submitting());
    assert_eq!(app.state.contact_form.fields[1].validity, Validity::Invalid);
    assert_eq!(app.state.contact_form.fields[2].validity, Validity::Invalid);
    assert_eq!(app.state.contact_form.fields[3].validity, Validity::Invalid);
    let toast = app.state.notifications.current().expect("error toast");
    assert_eq!(toast.message, "Please fix the errors and try again.");
}

#[test]
fn submitting_twice_starts_only_one_attempt() {
    let submitter = ManualSubmitter::default();
    let mut app = test_app(submitter.clone());

    fill_valid_form(&mut app);
    press(&mut app, KeyCode::Enter);
    app.tick();
    assert!(app.state.contact_form.is_submitting());

    // Second press while in flight is a no-op.
    press(&mut app, KeyCode::Enter);
    app.tick();
    assert!(app.state.contact_form.is_submitting());
    assert!(app.state.notifications.current().is_none());

    submitter.resolve_success();
    app.tick();
    assert!(!app.state.contact_form.is_submitting());
}

#[test]
fn leaving_and_reentering_the_form_keeps_values() {
    let submitter = ManualSubmitter::default();
    let mut app = test_app(submitter.clone());

    press(&mut app, KeyCode::Char('5'));
    type_str(&mut app, "Ada");
    press(&mut app, KeyCode::Esc);
    assert!(!app.state.form_active);

    // Shortcuts work again outside the form.
    press(&mut app, KeyCode::Enter);
    assert!(app.state.form_active);
    assert_eq!(app.state.contact_form.fields[0].value, "Ada");
}
