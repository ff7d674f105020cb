use std::future::Future;

use folio_models::{contact::ContactMessage, email_address::EmailAddress};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactRelayApiService: Send + Sync + 'static {
    /// Deliver a contact message to the configured relay.
    ///
    /// Returns an error if the relay could not be reached, answered with a
    /// non-success status code or sent a response that could not be parsed.
    fn submit(
        &self,
        submission: &ContactSubmission,
    ) -> impl Future<Output = anyhow::Result<ContactRelayResponse>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub message: ContactMessage,
    /// Sender label shown by the relay.
    pub from_name: String,
    pub reply_to: EmailAddress,
}

impl ContactSubmission {
    /// Replies go to the author of the message.
    pub fn new(message: ContactMessage, from_name: String) -> Self {
        let reply_to = message.author.email.clone();
        Self {
            message,
            from_name,
            reply_to,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactRelayResponse {
    Accepted { message: Option<String> },
    Rejected { message: Option<String> },
}

impl ContactRelayResponse {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

#[cfg(feature = "mock")]
impl MockContactRelayApiService {
    pub fn with_submit(
        mut self,
        submission: ContactSubmission,
        result: anyhow::Result<ContactRelayResponse>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
