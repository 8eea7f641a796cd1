use std::{collections::BTreeMap, sync::LazyLock, time::Duration};

use regex::Regex;
use thiserror::Error;

/// Simulated network round trip of a submission.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(2000);
/// How long the success message stays up.
pub const SUCCESS_DISPLAY: Duration = Duration::from_millis(3000);
pub const MIN_MESSAGE_LEN: usize = 10;

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern should compile"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Email is invalid")]
    EmailInvalid,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

pub type FieldErrors = BTreeMap<Field, FieldError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    errors: FieldErrors,
    phase: SubmitPhase,
}

pub fn validate(name: &str, email: &str, message: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if name.trim().is_empty() {
        errors.insert(Field::Name, FieldError::NameRequired);
    }
    let email = email.trim();
    if email.is_empty() {
        errors.insert(Field::Email, FieldError::EmailRequired);
    } else if !EMAIL_SHAPE.is_match(email) {
        errors.insert(Field::Email, FieldError::EmailInvalid);
    }
    let message = message.trim();
    if message.is_empty() {
        errors.insert(Field::Message, FieldError::MessageRequired);
    } else if message.chars().count() < MIN_MESSAGE_LEN {
        errors.insert(Field::Message, FieldError::MessageTooShort);
    }
    errors
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Edit one field. Only that field's error is cleared.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
        self.errors.remove(&field);
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Validate and, when valid, enter [`SubmitPhase::Submitting`]. Returns whether
    /// the caller should start the submit delay.
    pub fn submit(&mut self) -> bool {
        if self.is_submit_disabled() {
            return false;
        }
        self.errors = validate(&self.name, &self.email, &self.message);
        if !self.errors.is_empty() {
            return false;
        }
        self.phase = SubmitPhase::Submitting;
        true
    }

    /// The simulated send finished: clear the fields and show the success message.
    pub fn finish_submit(&mut self) {
        if self.phase != SubmitPhase::Submitting {
            return;
        }
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.phase = SubmitPhase::Submitted;
    }

    pub fn dismiss_success(&mut self) {
        if self.phase == SubmitPhase::Submitted {
            self.phase = SubmitPhase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::default();
        form.set(Field::Name, name.to_string());
        form.set(Field::Email, email.to_string());
        form.set(Field::Message, message.to_string());
        form
    }

    #[test]
    fn test_missing_name() {
        let mut form = form("", "a@b.com", "hello there!");
        assert!(!form.submit());
        assert_eq!(form.errors().len(), 1);
        assert_eq!(form.error(Field::Name), Some(FieldError::NameRequired));
        assert_eq!(form.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn test_bad_email_and_short_message() {
        let mut form = form("A", "bad", "short");
        assert!(!form.submit());
        assert_eq!(form.errors().len(), 2);
        assert_eq!(form.error(Field::Email), Some(FieldError::EmailInvalid));
        assert_eq!(form.error(Field::Message), Some(FieldError::MessageTooShort));
        assert_eq!(
            FieldError::MessageTooShort.to_string(),
            "Message must be at least 10 characters"
        );
    }

    #[test]
    fn test_blank_fields_are_required() {
        let errors = validate("   ", " ", "\n");
        assert_eq!(errors.get(&Field::Name), Some(&FieldError::NameRequired));
        assert_eq!(errors.get(&Field::Email), Some(&FieldError::EmailRequired));
        assert_eq!(errors.get(&Field::Message), Some(&FieldError::MessageRequired));
    }

    #[test]
    fn test_message_length_counts_trimmed_text() {
        assert!(validate("A", "a@b.com", "   123456789   ").contains_key(&Field::Message));
        assert!(validate("A", "a@b.com", "1234567890").is_empty());
    }

    #[test]
    fn test_email_shape() {
        assert!(validate("A", "a@b.c", "hello there!").is_empty());
        assert!(validate("A", "a@b", "hello there!").contains_key(&Field::Email));
        assert!(validate("A", "@b.com", "hello there!").contains_key(&Field::Email));
    }

    #[test]
    fn test_successful_submit_cycle() {
        let mut form = form("A", "a@b.com", "hello there!");
        assert!(form.submit());
        assert!(form.errors().is_empty());
        assert_eq!(form.phase(), SubmitPhase::Submitting);
        assert!(form.is_submit_disabled());
        // A second click while sending is ignored
        assert!(!form.submit());

        form.finish_submit();
        assert_eq!(form.phase(), SubmitPhase::Submitted);
        assert!(!form.is_submit_disabled());
        assert_eq!(form.value(Field::Name), "");
        assert_eq!(form.value(Field::Email), "");
        assert_eq!(form.value(Field::Message), "");

        form.dismiss_success();
        assert_eq!(form.phase(), SubmitPhase::Idle);
    }

    #[test]
    fn test_editing_clears_only_that_error() {
        let mut form = form("", "bad", "short");
        form.submit();
        assert_eq!(form.errors().len(), 3);

        form.set(Field::Email, "a@b.com".to_string());
        assert_eq!(form.error(Field::Email), None);
        assert_eq!(form.error(Field::Name), Some(FieldError::NameRequired));
        assert_eq!(form.error(Field::Message), Some(FieldError::MessageTooShort));
    }

    #[test]
    fn test_finish_without_submit_is_noop() {
        let mut form = form("A", "a@b.com", "hello there!");
        form.finish_submit();
        assert_eq!(form.phase(), SubmitPhase::Idle);
        assert_eq!(form.value(Field::Name), "A");
    }
}
