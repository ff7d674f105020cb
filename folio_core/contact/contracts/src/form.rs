use folio_models::{
    contact::{ContactFormInput, ContactMessage, ContactValidationErrors},
    l10n::{Language, Localized},
};

use crate::{ContactSubmitError, ContactSubmitOutcome};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ContactFormState {
    #[default]
    Idle,
    Submitting,
    /// The last submission failed. The form keeps its values and can be
    /// submitted again.
    Failed,
}

const SUBMIT_LABEL: Localized<&str> = Localized::new("Send Message", "Отправить Сообщение");
const SENDING_LABEL: Localized<&str> = Localized::new("Sending...", "Отправка...");

/// The contact form as seen by the visitor.
///
/// Errors are only shown after the first attempt to submit. From then on
/// the page re-validates every field the visitor changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    input: ContactFormInput,
    errors: ContactValidationErrors,
    state: ContactFormState,
    show_errors: bool,
}

impl ContactForm {
    pub fn new(input: ContactFormInput) -> Self {
        Self {
            input,
            ..Default::default()
        }
    }

    pub fn input(&self) -> &ContactFormInput {
        &self.input
    }

    pub fn errors(&self) -> &ContactValidationErrors {
        &self.errors
    }

    pub fn state(&self) -> ContactFormState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == ContactFormState::Submitting
    }

    /// Whether the visitor already tried to submit this form. Sending a
    /// message resets the flag together with the fields.
    pub fn errors_shown(&self) -> bool {
        self.show_errors
    }

    /// Validate the form and enter the `submitting` state.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, ContactSubmitError> {
        if self.is_submitting() {
            return Err(ContactSubmitError::AlreadySubmitting);
        }

        self.show_errors = true;
        match self.input.validate() {
            Ok(message) => {
                self.errors = ContactValidationErrors::default();
                self.state = ContactFormState::Submitting;
                Ok(message)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(ContactSubmitError::Invalid(errors))
            }
        }
    }

    /// Leave the `submitting` state. A sent message resets the form.
    pub fn finish_submit(&mut self, outcome: ContactSubmitOutcome) {
        match outcome {
            ContactSubmitOutcome::Sent => *self = Self::default(),
            ContactSubmitOutcome::Rejected | ContactSubmitOutcome::Failed => {
                self.state = ContactFormState::Failed
            }
        }
    }

    /// Label of the submit button.
    pub fn submit_label(&self, language: Language) -> &'static str {
        if self.is_submitting() {
            Self::sending_label(language)
        } else {
            *SUBMIT_LABEL.get(language)
        }
    }

    /// Label of the submit button while a submission is in flight.
    pub fn sending_label(language: Language) -> &'static str {
        *SENDING_LABEL.get(language)
    }
}
