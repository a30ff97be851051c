//! Notification service

use super::SharedStore;
use crate::{
    error::AppResult,
    models::notification::{Notification, NotificationFeed},
};

#[derive(Clone)]
pub struct NotificationsService {
    store: SharedStore,
}

impl NotificationsService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// All notifications, newest first, split into unread and read
    pub async fn feed(&self) -> AppResult<NotificationFeed> {
        let store = self.store.read().await;
        let (read, unread): (Vec<Notification>, Vec<Notification>) =
            store.notifications().iter().cloned().partition(|n| n.read);
        Ok(NotificationFeed {
            unread_count: unread.len(),
            unread,
            read,
        })
    }

    pub async fn unread_count(&self) -> AppResult<usize> {
        Ok(self.store.read().await.unread_notifications())
    }

    pub async fn mark_read(&self, id: &str) -> AppResult<Notification> {
        self.store.write().await.mark_notification_read(id)
    }
}
