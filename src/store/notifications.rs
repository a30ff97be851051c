//! Notification feed on DataStore

use chrono::Utc;

use super::DataStore;
use crate::{
    error::AppResult,
    models::{Notification, NotificationKind},
    repository::keys,
};

impl DataStore {
    /// Prepend a notification; index 0 is always the newest
    pub(crate) fn notify(&mut self, kind: NotificationKind, message: String) -> AppResult<()> {
        let notification = Notification {
            id: self.next_id("n"),
            message,
            kind,
            timestamp: Utc::now(),
            read: false,
        };
        tracing::debug!(
            id = %notification.id,
            message = %notification.message,
            "Notification emitted"
        );
        self.notifications.insert(0, notification);
        self.repository.save(keys::NOTIFICATIONS, &self.notifications)
    }

    pub fn mark_notification_read(&mut self, id: &str) -> AppResult<Notification> {
        let notification = self
            .notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| Self::not_found("Notification", id))?;

        notification.read = true;
        let updated = notification.clone();
        self.repository.save(keys::NOTIFICATIONS, &self.notifications)?;
        Ok(updated)
    }

    pub fn unread_notifications(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::empty_store;
    use crate::{error::AppError, models::NotificationKind};

    #[test]
    fn test_newest_notification_is_first() {
        let mut store = empty_store();
        store.notify(NotificationKind::Info, "first".into()).unwrap();
        store.notify(NotificationKind::Warning, "second".into()).unwrap();
        store.notify(NotificationKind::Error, "third".into()).unwrap();

        let messages: Vec<&str> = store
            .notifications()
            .iter()
            .map(|n| n.message.as_str())
            .collect();
        assert_eq!(messages, ["third", "second", "first"]);
        assert!(store.notifications()[0].timestamp >= store.notifications()[2].timestamp);
    }

    #[test]
    fn test_mark_read() {
        let mut store = empty_store();
        store.notify(NotificationKind::Info, "hello".into()).unwrap();
        let id = store.notifications()[0].id.clone();
        assert_eq!(store.unread_notifications(), 1);

        let read = store.mark_notification_read(&id).unwrap();

        assert!(read.read);
        assert_eq!(store.unread_notifications(), 0);
        assert!(matches!(
            store.mark_notification_read("n0"),
            Err(AppError::NotFound(_))
        ));
    }
}
