//! Submission delivery.

use std::cell::RefCell;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::{select, Either};

use crate::contact::{ContactFields, ContactForm, Submission, SubmissionReceipt};
use crate::error::SubmitError;

/// An async clock.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}

/// Delivers a validated enquiry.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait SubmissionGateway {
    async fn submit(&self, submission: &Submission) -> Result<SubmissionReceipt, SubmitError>;
}

/// Gateway that waits a fixed delay and acknowledges every submission.
///
/// No network call is made.
#[derive(Debug, Clone)]
pub struct SimulatedGateway<S> {
    sleeper: S,
    delay: Duration,
}

impl<S: Sleeper> SimulatedGateway<S> {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1_500);

    pub fn new(sleeper: S) -> Self {
        Self {
            sleeper,
            delay: Self::DEFAULT_DELAY,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl<S: Sleeper + Send + Sync> SubmissionGateway for SimulatedGateway<S> {
    async fn submit(&self, submission: &Submission) -> Result<SubmissionReceipt, SubmitError> {
        self.sleeper.sleep(self.delay).await;
        Ok(SubmissionReceipt {
            id: submission.id,
            reference: format!("KE-{:06}", submission.id.as_u64()),
        })
    }
}

/// Sleeper backed by the tokio timer.
#[cfg(feature = "tokio")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[cfg(feature = "tokio")]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Hand `submission` to the gateway, giving up after `timeout`.
pub async fn send<G, S>(
    gateway: &G,
    sleeper: &S,
    submission: &Submission,
    timeout: Duration,
) -> Result<SubmissionReceipt, SubmitError>
where
    G: SubmissionGateway + ?Sized,
    S: Sleeper + ?Sized,
{
    match select(gateway.submit(submission), sleeper.sleep(timeout)).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(((), _)) => Err(SubmitError::Timeout(timeout)),
    }
}

/// Form state owned by a view that may be torn down mid-submission.
pub trait FormCell {
    /// Run `f` against the form, or return `None` once the owner is gone.
    fn update_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R>;
}

impl FormCell for RefCell<ContactForm> {
    fn update_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Validate, deliver and record one contact submission.
///
/// The form guards against duplicate submits: a second call while one is
/// in flight fails with [`ContactError::AlreadySubmitting`](crate::ContactError::AlreadySubmitting).
/// Returns `None` when the form's owner went away before the outcome could
/// be recorded.
pub async fn submit_contact<C, G, S>(
    form: &C,
    fields: &ContactFields,
    gateway: &G,
    sleeper: &S,
    timeout: Duration,
) -> Option<Result<SubmissionReceipt, SubmitError>>
where
    C: FormCell,
    G: SubmissionGateway + ?Sized,
    S: Sleeper + ?Sized,
{
    let submission = match form.update_form(|f| f.begin(fields))? {
        Ok(submission) => submission,
        Err(e) => return Some(Err(e.into())),
    };
    let outcome = send(gateway, sleeper, &submission, timeout).await;
    form.update_form(|f| f.finish(submission.id, outcome))
}

#[cfg(all(test, feature = "tokio"))]
mod tests {
    use super::*;
    use crate::contact::{Field, FormVariant, SubmissionStatus};
    use crate::error::ContactError;
    use std::cell::Cell;
    use tokio::time::Instant;

    const TIMEOUT: Duration = Duration::from_secs(10);

    fn quote_fields() -> ContactFields {
        ContactFields::new()
            .with(Field::FirstName, "Sam")
            .with(Field::LastName, "Rivera")
            .with(Field::Email, "sam@plant.example")
            .with(Field::Products, "Kashe Hydraulic 46")
            .with(Field::Message, "Monthly supply for two plants")
    }

    struct OfflineGateway;

    #[async_trait]
    impl SubmissionGateway for OfflineGateway {
        async fn submit(&self, _: &Submission) -> Result<SubmissionReceipt, SubmitError> {
            Err(SubmitError::Gateway("network unreachable".to_string()))
        }
    }

    /// A view that unmounts as soon as the submission starts.
    struct UnmountingForm {
        form: RefCell<ContactForm>,
        mounted: Cell<bool>,
    }

    impl FormCell for UnmountingForm {
        fn update_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
            if !self.mounted.replace(false) {
                return None;
            }
            Some(f(&mut self.form.borrow_mut()))
        }
    }

    fn quote_form() -> RefCell<ContactForm> {
        RefCell::new(ContactForm::new(FormVariant::Quote))
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_submission_takes_delay() {
        let gateway = SimulatedGateway::new(TokioSleeper);
        let form = quote_form();
        let start = Instant::now();

        let receipt = submit_contact(&form, &quote_fields(), &gateway, &TokioSleeper, TIMEOUT)
            .await
            .unwrap()
            .unwrap();

        assert!(start.elapsed() >= Duration::from_millis(1_500));
        assert!(start.elapsed() < TIMEOUT);
        assert!(receipt.reference.starts_with("KE-"));
        assert_eq!(form.borrow().status(), SubmissionStatus::Submitted);
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_fields_never_reach_gateway() {
        let gateway = SimulatedGateway::new(TokioSleeper);
        let form = quote_form();
        let start = Instant::now();

        let err = submit_contact(
            &form,
            &quote_fields().with(Field::Products, ""),
            &gateway,
            &TokioSleeper,
            TIMEOUT,
        )
        .await
        .unwrap()
        .unwrap_err();

        assert_eq!(
            err,
            SubmitError::Form(ContactError::Validation {
                missing: vec![Field::Products]
            })
        );
        assert_eq!(start.elapsed(), Duration::ZERO);
        assert_eq!(form.borrow().status(), SubmissionStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_returns_to_idle() {
        let gateway = SimulatedGateway::new(TokioSleeper).with_delay(Duration::from_secs(60));
        let form = quote_form();

        let err = submit_contact(&form, &quote_fields(), &gateway, &TokioSleeper, TIMEOUT)
            .await
            .unwrap()
            .unwrap_err();

        assert_eq!(err, SubmitError::Timeout(TIMEOUT));
        assert_eq!(form.borrow().status(), SubmissionStatus::Idle);
    }

    #[tokio::test]
    async fn test_gateway_failure_is_retryable() {
        let form = RefCell::new(ContactForm::default());
        let fields = quote_fields();

        let err = submit_contact(&form, &fields, &OfflineGateway, &TokioSleeper, TIMEOUT)
            .await
            .unwrap()
            .unwrap_err();
        assert!(err.is_retryable());
        assert_eq!(form.borrow().status(), SubmissionStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_submit_rejected_after_confirmation() {
        let gateway = SimulatedGateway::new(TokioSleeper);
        let form = quote_form();
        submit_contact(&form, &quote_fields(), &gateway, &TokioSleeper, TIMEOUT)
            .await
            .unwrap()
            .unwrap();

        let err = submit_contact(&form, &quote_fields(), &gateway, &TokioSleeper, TIMEOUT)
            .await
            .unwrap()
            .unwrap_err();
        assert_eq!(err, SubmitError::Form(ContactError::AlreadySubmitted));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmounted_view_drops_outcome() {
        let gateway = SimulatedGateway::new(TokioSleeper);
        let view = UnmountingForm {
            form: quote_form(),
            mounted: Cell::new(true),
        };

        let outcome = submit_contact(&view, &quote_fields(), &gateway, &TokioSleeper, TIMEOUT).await;

        assert!(outcome.is_none());
        assert_eq!(view.form.borrow().status(), SubmissionStatus::Submitting);
    }
}
