use folio_core_contact_contracts::{
    ContactFeatureService, ContactSubmitError, ContactSubmitOutcome, ContactSubmitted,
    SharedContactForm,
};
use folio_core_notification_contracts::NotificationFeatureService;
use folio_extern_contracts::contact::{
    ContactRelayApiService, ContactRelayResponse, ContactSubmission,
};
use folio_models::{
    l10n::{Language, Localized},
    notification::{Notification, NotificationVariant},
};
use tracing::{error, info};

#[derive(Debug, Clone)]
pub struct ContactFeatureServiceImpl<RelayApi, NotificationS> {
    relay_api: RelayApi,
    notification: NotificationS,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// Sender label attached to every submission.
    pub sender_name: String,
}

impl<RelayApi, NotificationS> ContactFeatureServiceImpl<RelayApi, NotificationS> {
    pub fn new(
        relay_api: RelayApi,
        notification: NotificationS,
        config: ContactFeatureConfig,
    ) -> Self {
        Self {
            relay_api,
            notification,
            config,
        }
    }
}

impl<RelayApi, NotificationS> ContactFeatureService
    for ContactFeatureServiceImpl<RelayApi, NotificationS>
where
    RelayApi: ContactRelayApiService,
    NotificationS: NotificationFeatureService,
{
    async fn submit(
        &self,
        form: &SharedContactForm,
        language: Language,
    ) -> Result<ContactSubmitted, ContactSubmitError> {
        let message = form.lock().await.begin_submit()?;
        let submission = ContactSubmission::new(message, self.config.sender_name.clone());

        let outcome = match self.relay_api.submit(&submission).await {
            Ok(ContactRelayResponse::Accepted { .. }) => {
                info!(from = %submission.reply_to, "contact message sent");
                ContactSubmitOutcome::Sent
            }
            Ok(ContactRelayResponse::Rejected { message }) => {
                error!(?message, "contact relay rejected the message");
                ContactSubmitOutcome::Rejected
            }
            Err(err) => {
                error!("failed to submit contact message: {err:#}");
                ContactSubmitOutcome::Failed
            }
        };

        form.lock().await.finish_submit(outcome);

        let toast = self.notification.show(notification(outcome, language));

        Ok(ContactSubmitted { outcome, toast })
    }
}

fn notification(outcome: ContactSubmitOutcome, language: Language) -> Notification {
    let (title, description, variant) = match outcome {
        ContactSubmitOutcome::Sent => (
            Localized::new("Message Sent Successfully!", "Сообщение успешно отправлено!"),
            Localized::new(
                "Thanks for reaching out. I'll get back to you soon.",
                "Спасибо за обращение. Я свяжусь с вами в ближайшее время.",
            ),
            NotificationVariant::Default,
        ),
        ContactSubmitOutcome::Rejected | ContactSubmitOutcome::Failed => (
            Localized::new("Failed to send message", "Не удалось отправить сообщение"),
            Localized::new(
                "Please try again or contact me directly via email.",
                "Пожалуйста, попробуйте еще раз или свяжитесь со мной напрямую по электронной \
                 почте.",
            ),
            NotificationVariant::Destructive,
        ),
    };

    Notification {
        title: (*title.get(language)).into(),
        description: (*description.get(language)).into(),
        variant,
    }
}

#[cfg(test)]
mod tests;
