use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use folio_models::notification::{Notification, Toast};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait NotificationFeatureService: Send + Sync + 'static {
    /// Turn a notification into a toast that expires after the configured
    /// duration.
    fn show(&self, notification: Notification) -> Toast;
}

#[cfg(feature = "mock")]
impl MockNotificationFeatureService {
    pub fn with_show(mut self, notification: Notification, result: Toast) -> Self {
        self.expect_show()
            .once()
            .with(mockall::predicate::eq(notification))
            .return_once(move |_| result);
        self
    }
}

/// The stack of toasts on screen.
///
/// Holds at most `limit` toasts. Pushing onto a full stack drops the oldest
/// toast, so with a limit of one every toast replaces the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toaster {
    limit: usize,
    toasts: VecDeque<Toast>,
}

impl Toaster {
    pub fn new(limit: usize) -> Self {
        Self {
            limit: limit.max(1),
            toasts: VecDeque::new(),
        }
    }

    pub fn push(&mut self, toast: Toast) {
        self.toasts.push_back(toast);
        while self.toasts.len() > self.limit {
            self.toasts.pop_front();
        }
    }

    /// The toasts that have not expired yet, oldest first.
    pub fn active(&self, now: DateTime<Utc>) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().filter(move |toast| toast.is_active(now))
    }
}
