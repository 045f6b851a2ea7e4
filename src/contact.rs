use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "hydrate")]
use gloo_net::http::Request;

/// Third-party form-collection service. The response body is never read;
/// only the status matters.
pub const FORM_ENDPOINT: &str = "https://formspree.io/f/mblyqwkz";

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_MESSAGE_LEN: usize = 10;

/// One contact form submission. Built only from fields that passed
/// validation, sent once, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your name (at least 2 characters)")]
    NameTooShort,
    #[error("Please enter a valid email address")]
    EmailMalformed,
    #[error("Please enter a message (at least 10 characters)")]
    MessageTooShort,
}

/// Per-field validation state for the form. `None` means the field is fine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldErrors {
    pub name: Option<ValidationError>,
    pub email: Option<ValidationError>,
    pub message: Option<ValidationError>,
}

impl FieldErrors {
    pub fn is_clean(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

pub fn validate_name(name: &str) -> Option<ValidationError> {
    if name.chars().count() < MIN_NAME_LEN {
        Some(ValidationError::NameTooShort)
    } else {
        None
    }
}

pub fn validate_email(email: &str) -> Option<ValidationError> {
    if email_is_well_formed(email) {
        None
    } else {
        Some(ValidationError::EmailMalformed)
    }
}

pub fn validate_message(message: &str) -> Option<ValidationError> {
    if message.chars().count() < MIN_MESSAGE_LEN {
        Some(ValidationError::MessageTooShort)
    } else {
        None
    }
}

// Conventional address shape only: local-part, "@", domain with at least
// one dot. The collection service does its own verification downstream.
fn email_is_well_formed(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|label| !label.is_empty())
}

impl ContactSubmission {
    /// Checks every field independently and reports all failures at once,
    /// so the form can show inline errors next to each offending input.
    pub fn parse(name: &str, email: &str, message: &str) -> Result<Self, FieldErrors> {
        let errors = FieldErrors {
            name: validate_name(name),
            email: validate_email(email),
            message: validate_message(message),
        };
        if errors.is_clean() {
            Ok(Self {
                name: name.to_string(),
                email: email.to_string(),
                message: message.to_string(),
            })
        } else {
            Err(errors)
        }
    }
}

#[cfg(feature = "hydrate")]
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("couldn't encode submission: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("network error: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("form endpoint returned status {0}")]
    Status(u16),
}

/// Sends a submission to the collection endpoint. One POST, no retries.
#[cfg(feature = "hydrate")]
pub async fn deliver(submission: &ContactSubmission) -> Result<(), SubmitError> {
    let body = serde_json::to_string(submission)?;
    let res = Request::post(FORM_ENDPOINT)
        .header("Content-Type", "application/json")
        .body(body)?
        .send()
        .await?;
    if res.ok() {
        Ok(())
    } else {
        Err(SubmitError::Status(res.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name_is_rejected() {
        let errors = ContactSubmission::parse("J", "jo@example.com", "A long enough message")
            .expect_err("single-character name should not validate");
        assert_eq!(errors.name, Some(ValidationError::NameTooShort));
        assert_eq!(errors.email, None);
        assert_eq!(errors.message, None);
    }

    #[test]
    fn test_email_requires_at_sign() {
        assert_eq!(
            validate_email("jo.example.com"),
            Some(ValidationError::EmailMalformed)
        );
    }

    #[test]
    fn test_email_requires_domain_dot() {
        assert_eq!(
            validate_email("jo@example"),
            Some(ValidationError::EmailMalformed)
        );
        assert_eq!(
            validate_email("jo@example."),
            Some(ValidationError::EmailMalformed)
        );
        assert_eq!(
            validate_email("jo@.com"),
            Some(ValidationError::EmailMalformed)
        );
    }

    #[test]
    fn test_email_rejects_empty_local_part_and_whitespace() {
        assert_eq!(
            validate_email("@example.com"),
            Some(ValidationError::EmailMalformed)
        );
        assert_eq!(
            validate_email("jo doe@example.com"),
            Some(ValidationError::EmailMalformed)
        );
    }

    #[test]
    fn test_short_message_is_rejected() {
        let errors = ContactSubmission::parse("Jo", "jo@example.com", "Hi there")
            .expect_err("nine-character message should not validate");
        assert_eq!(errors.message, Some(ValidationError::MessageTooShort));
        assert_eq!(errors.name, None);
        assert_eq!(errors.email, None);
    }

    #[test]
    fn test_all_failures_reported_at_once() {
        let errors = ContactSubmission::parse("", "not-an-email", "short")
            .expect_err("empty form should not validate");
        assert_eq!(errors.name, Some(ValidationError::NameTooShort));
        assert_eq!(errors.email, Some(ValidationError::EmailMalformed));
        assert_eq!(errors.message, Some(ValidationError::MessageTooShort));
    }

    #[test]
    fn test_valid_fields_parse() {
        let submission =
            ContactSubmission::parse("Jo", "jo@example.com", "Hello, I would like to talk.")
                .expect("example fields should validate");
        assert_eq!(submission.name, "Jo");
        assert_eq!(submission.email, "jo@example.com");
        assert_eq!(submission.message, "Hello, I would like to talk.");
    }

    #[test]
    fn test_submission_body_matches_wire_format() {
        let submission =
            ContactSubmission::parse("Jo", "jo@example.com", "Hello, I would like to talk.")
                .expect("example fields should validate");
        assert_eq!(
            serde_json::to_string(&submission).expect("submission should encode"),
            r#"{"name":"Jo","email":"jo@example.com","message":"Hello, I would like to talk."}"#
        );
    }

    #[test]
    fn test_validation_is_idempotent() {
        let fields = ("Jo", "jo@example", "Hello, I would like to talk.");
        let first = ContactSubmission::parse(fields.0, fields.1, fields.2);
        let second = ContactSubmission::parse(fields.0, fields.1, fields.2);
        assert_eq!(first, second);
    }
}
