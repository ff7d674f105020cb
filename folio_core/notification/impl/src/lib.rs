use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use chrono::{DateTime, TimeDelta, Utc};
use folio_core_notification_contracts::NotificationFeatureService;
use folio_models::notification::{Notification, Toast, ToastId};
use folio_shared_contracts::time::TimeService;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct NotificationFeatureServiceImpl<Time> {
    time: Time,
    config: NotificationFeatureConfig,
    next_id: Arc<AtomicU64>,
}

#[derive(Debug, Clone)]
pub struct NotificationFeatureConfig {
    pub duration: std::time::Duration,
}

impl<Time> NotificationFeatureServiceImpl<Time> {
    pub fn new(time: Time, config: NotificationFeatureConfig) -> Self {
        Self {
            time,
            config,
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }
}

impl<Time> NotificationFeatureService for NotificationFeatureServiceImpl<Time>
where
    Time: TimeService,
{
    fn show(&self, notification: Notification) -> Toast {
        let id = ToastId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let created_at = self.time.now();
        let expires_at = TimeDelta::from_std(self.config.duration)
            .ok()
            .and_then(|duration| created_at.checked_add_signed(duration))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        debug!(
            id = id.0,
            title = %notification.title,
            variant = ?notification.variant,
            %expires_at,
            "show notification"
        );

        Toast {
            id,
            notification,
            created_at,
            expires_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use folio_models::notification::NotificationVariant;
    use folio_shared_contracts::time::MockTimeService;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn show() {
        // Arrange
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let mut time = MockTimeService::new();
        time.expect_now().times(2).return_const(now);
        let sut = NotificationFeatureServiceImpl::new(
            time,
            NotificationFeatureConfig {
                duration: std::time::Duration::from_secs(5),
            },
        );

        // Act
        let first = sut.show(notification());
        let second = sut.show(notification());

        // Assert
        assert_eq!(
            first,
            Toast {
                id: ToastId(1),
                notification: notification(),
                created_at: now,
                expires_at: now + TimeDelta::seconds(5),
            }
        );
        assert_eq!(second.id, ToastId(2));
    }

    #[test]
    fn expires_after_configured_duration() {
        // Arrange
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let time = MockTimeService::new().with_now(now);
        let sut = NotificationFeatureServiceImpl::new(
            time,
            NotificationFeatureConfig {
                duration: std::time::Duration::from_millis(1500),
            },
        );

        // Act
        let toast = sut.show(notification());

        // Assert
        assert_eq!(toast.created_at, now);
        assert_eq!(toast.expires_at, now + TimeDelta::milliseconds(1500));
        assert!(toast.is_active(now + TimeDelta::milliseconds(1499)));
        assert!(!toast.is_active(toast.expires_at));
    }

    fn notification() -> Notification {
        Notification {
            title: "Message Sent Successfully!".into(),
            description: "Thanks for reaching out. I'll get back to you soon.".into(),
            variant: NotificationVariant::Default,
        }
    }
}
