// ABOUTME: Contact form state: fields, focus-driven live validity, and the
// submit state machine with its pending asynchronous result

use std::time::{Duration, Instant};

use tokio::sync::oneshot;
use tracing::{debug, error};

use super::submission::{ContactData, SubmissionResult, Submitter};
use super::validator::{self, ValidationReport};

/// How long invalid-field highlights stay on screen after a rejected submit,
/// independent of any re-interaction.
pub const ERROR_MARK_GRACE: Duration = Duration::from_millis(3000);

/// Input shape of a field, selecting which validation checks apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Multiline,
}

/// Visual validity of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Neutral,
    Valid,
    Invalid,
}

/// One required form field.
#[derive(Debug, Clone)]
pub struct Field {
    pub label: &'static str,
    pub kind: FieldKind,
    pub value: String,
    pub validity: Validity,
}

impl Field {
    fn new(label: &'static str, kind: FieldKind) -> Self {
        Self {
            label,
            kind,
            value: String::new(),
            validity: Validity::Neutral,
        }
    }
}

/// What currently holds keyboard focus inside the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Field(usize),
    SubmitButton,
}

/// Submit control state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
}

/// Result of asking the form to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// A previous attempt is still in flight; ignored.
    AlreadySubmitting,
    /// Validation failed; `message` is the aggregate user-facing text.
    Invalid { message: String },
    /// Validation passed and the submission action was started.
    Started,
}

/// Terminal outcome of an in-flight submission, reported from `tick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted,
    Failed,
}

const FIELD_COUNT: usize = 4;

/// The contact form. Two validity paths mutate the same per-field state and
/// are intentionally not unified: blur marks any nonempty field `Valid` on
/// presence alone, while a full submit pass also checks email shape and
/// message length. A nine-character message can therefore show `Valid` until
/// submit rejects it, matching the original live-feedback behavior.
#[derive(Debug)]
pub struct ContactForm {
    pub fields: [Field; FIELD_COUNT],
    focus: FocusTarget,
    phase: SubmitPhase,
    error_marks_until: Option<Instant>,
    pending: Option<oneshot::Receiver<SubmissionResult>>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: [
                Field::new("Your Name", FieldKind::Text),
                Field::new("Your Email", FieldKind::Email),
                Field::new("Subject", FieldKind::Text),
                Field::new("Your Message", FieldKind::Multiline),
            ],
            focus: FocusTarget::Field(0),
            phase: SubmitPhase::Idle,
            error_marks_until: None,
            pending: None,
        }
    }

    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Move focus forward (Tab order: fields, then the submit button).
    pub fn focus_next(&mut self) {
        let next = match self.focus {
            FocusTarget::Field(i) if i + 1 < FIELD_COUNT => FocusTarget::Field(i + 1),
            FocusTarget::Field(_) => FocusTarget::SubmitButton,
            FocusTarget::SubmitButton => FocusTarget::Field(0),
        };
        self.move_focus(next);
    }

    /// Move focus backward.
    pub fn focus_prev(&mut self) {
        let prev = match self.focus {
            FocusTarget::Field(0) => FocusTarget::SubmitButton,
            FocusTarget::Field(i) => FocusTarget::Field(i - 1),
            FocusTarget::SubmitButton => FocusTarget::Field(FIELD_COUNT - 1),
        };
        self.move_focus(prev);
    }

    fn move_focus(&mut self, target: FocusTarget) {
        if let FocusTarget::Field(i) = self.focus {
            self.blur_field(i);
        }
        if let FocusTarget::Field(i) = target {
            self.focus_field(i);
        }
        self.focus = target;
    }

    // Blur rule: nonempty content reads as valid (presence only), losing all
    // content resets to neutral.
    fn blur_field(&mut self, index: usize) {
        let field = &mut self.fields[index];
        field.validity = if field.value.trim().is_empty() {
            Validity::Neutral
        } else {
            Validity::Valid
        };
    }

    // Focus rule: gaining focus clears an invalid mark regardless of content.
    fn focus_field(&mut self, index: usize) {
        let field = &mut self.fields[index];
        if field.validity == Validity::Invalid {
            field.validity = Validity::Neutral;
        }
    }

    /// Type a character into the focused field. Newlines are only accepted
    /// by the multiline field.
    pub fn input_char(&mut self, ch: char) {
        if let FocusTarget::Field(i) = self.focus {
            let field = &mut self.fields[i];
            if ch == '\n' && field.kind != FieldKind::Multiline {
                return;
            }
            field.value.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        if let FocusTarget::Field(i) = self.focus {
            self.fields[i].value.pop();
        }
    }

    /// Whether the focused field accepts a literal newline.
    pub fn focused_is_multiline(&self) -> bool {
        matches!(self.focus, FocusTarget::Field(i) if self.fields[i].kind == FieldKind::Multiline)
    }

    fn validate(&self) -> ValidationReport {
        validator::validate(
            self.fields
                .iter()
                .map(|f| (f.label, f.kind, f.value.as_str())),
        )
    }

    fn data(&self) -> ContactData {
        ContactData {
            name: self.fields[0].value.clone(),
            email: self.fields[1].value.clone(),
            subject: self.fields[2].value.clone(),
            message: self.fields[3].value.clone(),
        }
    }

    /// Validate and, if clean, start the submission action. On failure every
    /// offending field is marked invalid so all problems surface together,
    /// and the marks are scheduled to clear after the grace period.
    pub fn try_submit(&mut self, submitter: &dyn Submitter) -> SubmitAttempt {
        if self.is_submitting() {
            return SubmitAttempt::AlreadySubmitting;
        }

        let report = self.validate();
        if !report.is_valid() {
            // A fresh pass replaces the previous pass's marks; validity set
            // by blur is left alone on fields that now check out.
            for field in &mut self.fields {
                if field.validity == Validity::Invalid {
                    field.validity = Validity::Neutral;
                }
            }
            for (index, _) in &report.errors {
                self.fields[*index].validity = Validity::Invalid;
            }
            self.error_marks_until = Some(Instant::now() + ERROR_MARK_GRACE);
            debug!("contact form rejected: {:?}", report.messages());
            return SubmitAttempt::Invalid {
                message: "Please fix the errors and try again.".to_string(),
            };
        }

        self.phase = SubmitPhase::Submitting;
        self.pending = Some(submitter.submit(self.data()));
        SubmitAttempt::Started
    }

    /// Advance timers and poll the in-flight submission, if any. Returns the
    /// outcome once it resolves so the caller can report it to the user.
    pub fn tick(&mut self) -> Option<SubmissionOutcome> {
        if let Some(until) = self.error_marks_until {
            if Instant::now() >= until {
                for field in &mut self.fields {
                    if field.validity == Validity::Invalid {
                        field.validity = Validity::Neutral;
                    }
                }
                self.error_marks_until = None;
            }
        }

        let resolved = match self.pending {
            Some(ref mut rx) => match rx.try_recv() {
                Ok(result) => Some(result),
                Err(oneshot::error::TryRecvError::Empty) => None,
                Err(oneshot::error::TryRecvError::Closed) => {
                    Some(Err(super::submission::SubmissionError::Network))
                }
            },
            None => None,
        };

        let result = resolved?;
        self.pending = None;
        self.phase = SubmitPhase::Idle;

        match result {
            Ok(data) => {
                debug!("contact submission accepted for {}", data.email);
                self.reset();
                Some(SubmissionOutcome::Accepted)
            }
            Err(cause) => {
                // Field values are kept so the user can retry; the cause is
                // for the log only, never shown verbatim.
                error!("contact submission failed: {cause}");
                Some(SubmissionOutcome::Failed)
            }
        }
    }

    /// Clear all fields back to empty and neutral.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.validity = Validity::Neutral;
        }
        self.error_marks_until = None;
        self.focus = FocusTarget::Field(0);
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}
