//! Contact form: variants, validation and submission.

mod form;
mod gateway;
mod submission;
mod variant;

pub use form::ContactFields;
#[cfg(feature = "tokio")]
pub use gateway::TokioSleeper;
pub use gateway::{
    send, submit_contact, FormCell, SimulatedGateway, Sleeper, SubmissionGateway,
};
pub use submission::{ContactForm, Submission, SubmissionId, SubmissionReceipt, SubmissionStatus};
pub use variant::{Field, FormVariant};
