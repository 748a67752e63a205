//! Error types for the interactive state machines.

use std::time::Duration;

use thiserror::Error;

use crate::contact::Field;

/// Carousel construction and navigation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("Carousel needs at least one item")]
    Empty,

    #[error("Index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Contact form transition errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// Required fields are blank. Lists every one of them.
    #[error("Missing required fields: {}", join_labels(.missing))]
    Validation { missing: Vec<Field> },

    #[error("A submission is already in progress")]
    AlreadySubmitting,

    #[error("The form has already been submitted")]
    AlreadySubmitted,

    #[error("No submission is in progress")]
    NotSubmitting,

    /// A result arrived for a submission that is no longer in flight.
    #[error("Stale submission result: {0}")]
    StaleSubmission(u64),
}

impl ContactError {
    /// Missing fields for a validation failure, empty otherwise.
    pub fn missing_fields(&self) -> &[Field] {
        match self {
            ContactError::Validation { missing } => missing,
            _ => &[],
        }
    }
}

fn join_labels(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Gateway delivery errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The form refused to start or finish the submission.
    #[error(transparent)]
    Form(#[from] ContactError),

    #[error("Submission failed: {0}")]
    Gateway(String),

    #[error("Submission timed out after {0:?}")]
    Timeout(Duration),
}

impl SubmitError {
    /// Whether the user may retry with the same details.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SubmitError::Gateway(_) | SubmitError::Timeout(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_fields() {
        let err = ContactError::Validation {
            missing: vec![Field::FirstName, Field::Email],
        };
        assert_eq!(
            err.to_string(),
            "Missing required fields: First Name, Email"
        );
        assert_eq!(err.missing_fields().len(), 2);
    }

    #[test]
    fn test_retryable() {
        assert!(SubmitError::Timeout(Duration::from_secs(10)).is_retryable());
        assert!(!SubmitError::Form(ContactError::AlreadySubmitted).is_retryable());
    }
}
