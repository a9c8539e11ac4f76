// ABOUTME: Contact form subsystem: field state, validation, and submission

pub mod form;
pub mod submission;
pub mod validator;

pub use form::{ContactForm, FieldKind, SubmissionOutcome, SubmitAttempt, Validity};
pub use submission::{
    ContactData, ImmediateSubmitter, SimulatedSubmitter, SubmissionError, Submitter,
};
pub use validator::{FieldError, ValidationReport};
