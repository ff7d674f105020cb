use std::sync::Arc;

use anyhow::anyhow;
use chrono::{DateTime, TimeDelta};
use folio_core_contact_contracts::{ContactForm, ContactFormState};
use folio_core_notification_contracts::MockNotificationFeatureService;
use folio_demo::{CONTACT_FORM_INPUT, CONTACT_MESSAGE, INVALID_CONTACT_FORM_INPUT, SENDER_NAME};
use folio_extern_contracts::contact::MockContactRelayApiService;
use folio_models::notification::{Toast, ToastId};
use folio_utils::assert_matches;
use pretty_assertions::assert_eq;
use tokio::sync::Mutex;

use super::*;

#[tokio::test]
async fn sent() {
    // Arrange
    let form = shared_form(&CONTACT_FORM_INPUT);

    let relay_api = MockContactRelayApiService::new().with_submit(
        submission(),
        Ok(ContactRelayResponse::Accepted {
            message: Some("Email sent successfully!".into()),
        }),
    );

    let expected_notification = Notification {
        title: "Message Sent Successfully!".into(),
        description: "Thanks for reaching out. I'll get back to you soon.".into(),
        variant: NotificationVariant::Default,
    };
    let notification = MockNotificationFeatureService::new()
        .with_show(expected_notification.clone(), toast(&expected_notification));

    let sut = ContactFeatureServiceImpl::new(relay_api, notification, config());

    // Act
    let result = sut.submit(&form, Language::En).await;

    // Assert
    assert_eq!(
        result.unwrap(),
        ContactSubmitted {
            outcome: ContactSubmitOutcome::Sent,
            toast: toast(&expected_notification),
        }
    );
    assert_eq!(*form.lock().await, ContactForm::default());
}

#[tokio::test]
async fn rejected() {
    // Arrange
    let form = shared_form(&CONTACT_FORM_INPUT);

    let relay_api = MockContactRelayApiService::new().with_submit(
        submission(),
        Ok(ContactRelayResponse::Rejected {
            message: Some("Invalid access key".into()),
        }),
    );

    let expected_notification = Notification {
        title: "Не удалось отправить сообщение".into(),
        description: "Пожалуйста, попробуйте еще раз или свяжитесь со мной напрямую по \
                      электронной почте."
            .into(),
        variant: NotificationVariant::Destructive,
    };
    let notification = MockNotificationFeatureService::new()
        .with_show(expected_notification.clone(), toast(&expected_notification));

    let sut = ContactFeatureServiceImpl::new(relay_api, notification, config());

    // Act
    let result = sut.submit(&form, Language::Ru).await;

    // Assert
    let result = result.unwrap();
    assert_eq!(result.outcome, ContactSubmitOutcome::Rejected);
    assert_eq!(result.toast.notification, expected_notification);

    let form = form.lock().await;
    assert_eq!(form.state(), ContactFormState::Failed);
    assert_eq!(*form.input(), *CONTACT_FORM_INPUT);
}

#[tokio::test]
async fn transport_error() {
    // Arrange
    let form = shared_form(&CONTACT_FORM_INPUT);

    let relay_api = MockContactRelayApiService::new()
        .with_submit(submission(), Err(anyhow!("connection refused")));

    let expected_notification = notification(ContactSubmitOutcome::Failed, Language::En);
    let notification = MockNotificationFeatureService::new()
        .with_show(expected_notification.clone(), toast(&expected_notification));

    let sut = ContactFeatureServiceImpl::new(relay_api, notification, config());

    // Act
    let result = sut.submit(&form, Language::En).await;

    // Assert
    let result = result.unwrap();
    assert_eq!(result.outcome, ContactSubmitOutcome::Failed);
    assert_eq!(result.toast.notification.title, "Failed to send message");
    assert_eq!(form.lock().await.state(), ContactFormState::Failed);
}

#[tokio::test]
async fn invalid() {
    // Arrange
    let form = shared_form(&INVALID_CONTACT_FORM_INPUT);

    let relay_api = MockContactRelayApiService::new();
    let notification = MockNotificationFeatureService::new();

    let sut = ContactFeatureServiceImpl::new(relay_api, notification, config());

    // Act
    let result = sut.submit(&form, Language::En).await;

    // Assert
    assert_matches!(result, Err(ContactSubmitError::Invalid(errors)) if errors.len() == 4);
    let form = form.lock().await;
    assert_eq!(form.state(), ContactFormState::Idle);
    assert_eq!(form.errors().len(), 4);
}

#[tokio::test]
async fn already_submitting() {
    // Arrange
    let form = shared_form(&CONTACT_FORM_INPUT);
    form.lock().await.begin_submit().unwrap();

    let relay_api = MockContactRelayApiService::new();
    let notification = MockNotificationFeatureService::new();

    let sut = ContactFeatureServiceImpl::new(relay_api, notification, config());

    // Act
    let result = sut.submit(&form, Language::En).await;

    // Assert
    assert_matches!(result, Err(ContactSubmitError::AlreadySubmitting));
}

#[tokio::test]
async fn submitting_while_relay_is_called() {
    // Arrange
    let form = shared_form(&CONTACT_FORM_INPUT);

    let mut relay_api = MockContactRelayApiService::new();
    let observed = Arc::clone(&form);
    relay_api.expect_submit().once().return_once(move |_| {
        Box::pin(async move {
            let form = observed.lock().await;
            assert!(form.is_submitting());
            assert_eq!(form.submit_label(Language::En), "Sending...");
            Ok(ContactRelayResponse::Accepted { message: None })
        })
    });

    let mut notification = MockNotificationFeatureService::new();
    notification
        .expect_show()
        .once()
        .returning(|notification| toast(&notification));

    let sut = ContactFeatureServiceImpl::new(relay_api, notification, config());

    // Act
    let result = sut.submit(&form, Language::En).await;

    // Assert
    assert!(result.unwrap().outcome.is_sent());
    assert!(!form.lock().await.is_submitting());
}

#[test]
fn notifications() {
    for (outcome, language, title, variant) in [
        (
            ContactSubmitOutcome::Sent,
            Language::En,
            "Message Sent Successfully!",
            NotificationVariant::Default,
        ),
        (
            ContactSubmitOutcome::Sent,
            Language::Ru,
            "Сообщение успешно отправлено!",
            NotificationVariant::Default,
        ),
        (
            ContactSubmitOutcome::Rejected,
            Language::En,
            "Failed to send message",
            NotificationVariant::Destructive,
        ),
        (
            ContactSubmitOutcome::Failed,
            Language::Ru,
            "Не удалось отправить сообщение",
            NotificationVariant::Destructive,
        ),
    ] {
        let notification = notification(outcome, language);
        assert_eq!(notification.title, title);
        assert_eq!(notification.variant, variant);
    }
}

fn config() -> ContactFeatureConfig {
    ContactFeatureConfig {
        sender_name: SENDER_NAME.into(),
    }
}

fn shared_form(input: &folio_models::contact::ContactFormInput) -> SharedContactForm {
    Arc::new(Mutex::new(ContactForm::new(input.clone())))
}

fn submission() -> ContactSubmission {
    ContactSubmission::new(CONTACT_MESSAGE.clone(), SENDER_NAME.into())
}

fn toast(notification: &Notification) -> Toast {
    let created_at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
    Toast {
        id: ToastId(1),
        notification: notification.clone(),
        created_at,
        expires_at: created_at + TimeDelta::seconds(5),
    }
}
