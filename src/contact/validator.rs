// ABOUTME: Field validation for the contact form
// Trims input, checks presence, email shape, and minimum message length

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use super::form::FieldKind;

/// Minimum trimmed length accepted for the message body.
pub const MIN_MESSAGE_LEN: usize = 10;

lazy_static! {
    // local-part@domain.tld: no whitespace or '@' on either side of the '@',
    // at least one '.' in the domain.
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .expect("email pattern is valid");
}

/// Why a single field failed validation. A field reports at most one reason
/// per pass: presence short-circuits the format and length checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Missing(String),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Message should be at least {MIN_MESSAGE_LEN} characters long")]
    TooShort,
}

/// Outcome of a full validation pass over the form.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// One entry per offending field: index into the form's field list plus
    /// the reason it failed.
    pub errors: Vec<(usize, FieldError)>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Human-readable error strings, one per offending field.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|(_, e)| e.to_string()).collect()
    }
}

/// Validate a single field value against its kind. `label` names the field
/// in the missing-field message.
pub fn check_field(label: &str, kind: FieldKind, value: &str) -> Option<FieldError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Some(FieldError::Missing(label.to_string()));
    }

    match kind {
        FieldKind::Email if !EMAIL_RE.is_match(trimmed) => Some(FieldError::InvalidEmail),
        FieldKind::Multiline if trimmed.chars().count() < MIN_MESSAGE_LEN => {
            Some(FieldError::TooShort)
        }
        _ => None,
    }
}

/// Run `check_field` over every labeled field, collecting all failures so
/// they can be surfaced together.
pub fn validate<'a, I>(fields: I) -> ValidationReport
where
    I: IntoIterator<Item = (&'a str, FieldKind, &'a str)>,
{
    let errors = fields
        .into_iter()
        .enumerate()
        .filter_map(|(index, (label, kind, value))| {
            check_field(label, kind, value).map(|error| (index, error))
        })
        .collect();

    ValidationReport { errors }
}
