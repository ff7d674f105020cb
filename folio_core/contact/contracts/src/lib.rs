use std::{future::Future, sync::Arc};

use folio_models::{contact::ContactValidationErrors, l10n::Language, notification::Toast};
use thiserror::Error;
use tokio::sync::Mutex;

pub use crate::form::{ContactForm, ContactFormState};

mod form;

/// A contact form shared between the task that submits it and the host
/// showing it.
pub type SharedContactForm = Arc<Mutex<ContactForm>>;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Validate the form and submit it to the contact relay.
    ///
    /// - Invalid forms are never submitted, the violations are recorded on
    ///   the form and returned.
    /// - The form is `submitting` while the relay is being called and the
    ///   lock on the form is not held in the meantime.
    /// - The form is reset if and only if the relay accepted the message.
    /// - The returned toast reports the outcome in the given language.
    fn submit(
        &self,
        form: &SharedContactForm,
        language: Language,
    ) -> impl Future<Output = Result<ContactSubmitted, ContactSubmitError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmitted {
    pub outcome: ContactSubmitOutcome,
    pub toast: Toast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactSubmitOutcome {
    /// The relay accepted the message.
    Sent,
    /// The relay answered but did not accept the message.
    Rejected,
    /// The relay could not be reached or sent an unexpected response.
    Failed,
}

impl ContactSubmitOutcome {
    pub fn is_sent(self) -> bool {
        self == Self::Sent
    }
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("The form is already being submitted.")]
    AlreadySubmitting,
    #[error("The form contains invalid fields.")]
    Invalid(ContactValidationErrors),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit(
        mut self,
        language: Language,
        result: Result<ContactSubmitted, ContactSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(language),
            )
            .return_once(move |_, _| Box::pin(std::future::ready(result)));
        self
    }
}
