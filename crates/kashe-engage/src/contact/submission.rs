//! Contact form submission state machine.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::contact::{ContactFields, FormVariant};
use crate::error::{ContactError, SubmitError};

/// Where the contact form is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SubmissionStatus {
    /// Editable.
    #[default]
    Idle,
    /// Waiting on the gateway; inputs and the submit button are disabled.
    Submitting,
    /// Confirmation shown in place of the form.
    Submitted,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Submitting => "submitting",
            SubmissionStatus::Submitted => "submitted",
        }
    }
}

static NEXT_SUBMISSION: AtomicU64 = AtomicU64::new(1);

/// Identifies one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(u64);

impl SubmissionId {
    fn next() -> Self {
        Self(NEXT_SUBMISSION.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// A validated enquiry handed to the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub id: SubmissionId,
    pub variant: FormVariant,
    pub fields: ContactFields,
}

/// Gateway acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub id: SubmissionId,
    /// Reference quoted back to the visitor.
    pub reference: String,
}

/// Contact form state owned by the contact page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    variant: FormVariant,
    status: SubmissionStatus,
    in_flight: Option<SubmissionId>,
    receipt: Option<SubmissionReceipt>,
}

impl ContactForm {
    pub const SUBMIT_LABEL: &'static str = "Send Message";
    pub const SUBMITTING_LABEL: &'static str = "Sending...";
    pub const CONFIRMATION_TITLE: &'static str = "Thank You!";
    pub const CONFIRMATION_MESSAGE: &'static str =
        "We've received your message and will get back to you within 24 hours.";

    pub fn new(variant: FormVariant) -> Self {
        Self {
            variant,
            status: SubmissionStatus::Idle,
            in_flight: None,
            receipt: None,
        }
    }

    pub fn variant(&self) -> FormVariant {
        self.variant
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.status == SubmissionStatus::Submitted
    }

    /// Acknowledgement of the delivered submission.
    pub fn receipt(&self) -> Option<&SubmissionReceipt> {
        self.receipt.as_ref()
    }

    /// Label of the submit button for the current status.
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            Self::SUBMITTING_LABEL
        } else {
            Self::SUBMIT_LABEL
        }
    }

    /// Validate and move `Idle` to `Submitting`.
    ///
    /// On validation failure the form stays `Idle` and the error lists every
    /// missing field. Re-entrant and post-confirmation calls are rejected.
    pub fn begin(&mut self, fields: &ContactFields) -> Result<Submission, ContactError> {
        match self.status {
            SubmissionStatus::Submitting => return Err(ContactError::AlreadySubmitting),
            SubmissionStatus::Submitted => return Err(ContactError::AlreadySubmitted),
            SubmissionStatus::Idle => {}
        }
        fields.validate(self.variant)?;

        let submission = Submission {
            id: SubmissionId::next(),
            variant: self.variant,
            fields: fields.normalized(self.variant),
        };
        self.status = SubmissionStatus::Submitting;
        self.in_flight = Some(submission.id);
        tracing::debug!(id = %submission.id, variant = self.variant.as_str(), "contact submission started");
        Ok(submission)
    }

    /// Move `Submitting` to `Submitted`.
    pub fn complete(&mut self) -> Result<(), ContactError> {
        if self.status != SubmissionStatus::Submitting {
            return Err(match self.status {
                SubmissionStatus::Submitted => ContactError::AlreadySubmitted,
                _ => ContactError::NotSubmitting,
            });
        }
        self.status = SubmissionStatus::Submitted;
        self.in_flight = None;
        Ok(())
    }

    /// Apply the gateway outcome for submission `id`.
    ///
    /// Success confirms the form; failure returns it to `Idle` so the
    /// visitor can retry. Outcomes for any other submission are ignored.
    pub fn finish(
        &mut self,
        id: SubmissionId,
        outcome: Result<SubmissionReceipt, SubmitError>,
    ) -> Result<SubmissionReceipt, SubmitError> {
        if self.in_flight != Some(id) {
            return Err(ContactError::StaleSubmission(id.as_u64()).into());
        }
        match outcome {
            Ok(receipt) => {
                self.complete()?;
                self.receipt = Some(receipt.clone());
                tracing::info!(id = %id, reference = %receipt.reference, "contact submission delivered");
                Ok(receipt)
            }
            Err(err) => {
                self.status = SubmissionStatus::Idle;
                self.in_flight = None;
                tracing::warn!(id = %id, error = %err, "contact submission failed");
                Err(err)
            }
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(FormVariant::Default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::Field;

    fn filled() -> ContactFields {
        ContactFields::new()
            .with(Field::FirstName, "Jane")
            .with(Field::LastName, "Doe")
            .with(Field::Email, "jane@fleet.example")
            .with(Field::Message, "Bulk pricing please")
    }

    fn receipt(id: SubmissionId) -> SubmissionReceipt {
        SubmissionReceipt {
            id,
            reference: "KE-TEST".to_string(),
        }
    }

    #[test]
    fn test_begin_then_complete() {
        let mut form = ContactForm::default();
        form.begin(&filled()).unwrap();
        assert!(form.is_submitting());
        assert_eq!(form.submit_label(), "Sending...");

        form.complete().unwrap();
        assert!(form.is_submitted());
    }

    #[test]
    fn test_invalid_stays_idle() {
        let mut form = ContactForm::new(FormVariant::Distributor);
        let err = form.begin(&filled()).unwrap_err();
        assert_eq!(err.missing_fields(), &[Field::Region]);
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_no_reentrant_begin() {
        let mut form = ContactForm::default();
        form.begin(&filled()).unwrap();
        assert_eq!(
            form.begin(&filled()).unwrap_err(),
            ContactError::AlreadySubmitting
        );
    }

    #[test]
    fn test_no_begin_after_submitted() {
        let mut form = ContactForm::default();
        form.begin(&filled()).unwrap();
        form.complete().unwrap();
        assert_eq!(
            form.begin(&filled()).unwrap_err(),
            ContactError::AlreadySubmitted
        );
    }

    #[test]
    fn test_complete_requires_submitting() {
        let mut form = ContactForm::default();
        assert_eq!(form.complete().unwrap_err(), ContactError::NotSubmitting);
    }

    #[test]
    fn test_finish_success() {
        let mut form = ContactForm::default();
        let submission = form.begin(&filled()).unwrap();
        let got = form
            .finish(submission.id, Ok(receipt(submission.id)))
            .unwrap();
        assert_eq!(got.reference, "KE-TEST");
        assert!(form.is_submitted());
        assert_eq!(form.receipt(), Some(&got));
    }

    #[test]
    fn test_finish_failure_allows_retry() {
        let mut form = ContactForm::default();
        let submission = form.begin(&filled()).unwrap();
        let err = form
            .finish(submission.id, Err(SubmitError::Gateway("offline".into())))
            .unwrap_err();
        assert!(err.is_retryable());
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert!(form.begin(&filled()).is_ok());
    }

    #[test]
    fn test_stale_outcome_ignored() {
        let mut form = ContactForm::default();
        let first = form.begin(&filled()).unwrap();
        form.finish(first.id, Err(SubmitError::Gateway("x".into())))
            .unwrap_err();
        let second = form.begin(&filled()).unwrap();

        let err = form.finish(first.id, Ok(receipt(first.id))).unwrap_err();
        assert!(matches!(
            err,
            SubmitError::Form(ContactError::StaleSubmission(_))
        ));
        assert!(form.is_submitting());

        form.finish(second.id, Ok(receipt(second.id))).unwrap();
        assert!(form.is_submitted());
    }

    #[test]
    fn test_submission_ids_unique() {
        let mut a = ContactForm::default();
        let mut b = ContactForm::default();
        let first = a.begin(&filled()).unwrap();
        let second = b.begin(&filled()).unwrap();
        assert_ne!(first.id, second.id);
    }
}
