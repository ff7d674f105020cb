use folio_core_relay_contracts::{RelayContactMessage, RelayFeatureService, RelayReceiveError};
use tracing::info;

#[derive(Debug, Clone, Copy, Default)]
pub struct RelayFeatureServiceImpl;

impl RelayFeatureService for RelayFeatureServiceImpl {
    async fn receive(&self, message: RelayContactMessage) -> Result<(), RelayReceiveError> {
        let RelayContactMessage {
            name,
            email,
            subject,
            message,
        } = message;

        info!(from = ?email, ?name, ?subject, ?message, "received contact message");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ok() {
        // Arrange
        let sut = RelayFeatureServiceImpl;

        // Act
        let result = sut
            .receive(RelayContactMessage {
                name: Some("Max Mustermann".into()),
                email: Some("max.mustermann@example.de".into()),
                subject: Some("Test".into()),
                message: Some("Hello World!".into()),
            })
            .await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn missing_fields() {
        // Arrange
        let sut = RelayFeatureServiceImpl;

        // Act
        let result = sut.receive(RelayContactMessage::default()).await;

        // Assert
        result.unwrap();
    }
}
