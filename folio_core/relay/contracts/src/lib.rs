use std::future::Future;

use serde::Deserialize;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait RelayFeatureService: Send + Sync + 'static {
    /// Accept a contact message posted to the relay endpoint.
    ///
    /// The message is logged and acknowledged, it is not forwarded anywhere.
    fn receive(
        &self,
        message: RelayContactMessage,
    ) -> impl Future<Output = Result<(), RelayReceiveError>> + Send;
}

/// A message as posted to the relay. Any json object is accepted: the relay
/// trusts its callers, so missing fields are left empty and nothing is
/// validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RelayContactMessage {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Error)]
pub enum RelayReceiveError {
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockRelayFeatureService {
    pub fn with_receive(
        mut self,
        message: RelayContactMessage,
        result: Result<(), RelayReceiveError>,
    ) -> Self {
        self.expect_receive()
            .once()
            .with(mockall::predicate::eq(message))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
