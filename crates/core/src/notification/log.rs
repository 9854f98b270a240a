//! In-memory notification log
//!
//! Records are only ever appended; no update or delete operation exists.

use tokio::sync::RwLock;
use tracing::info;

use super::model::Notification;

/// Append-only, in-memory notification log
pub struct NotificationLog {
    entries: RwLock<Vec<Notification>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        info!("NotificationLog initialized");
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Record a notification and return it
    ///
    /// Always succeeds: there is no delivery mechanism whose failure could
    /// surface here.
    pub async fn send(
        &self,
        message: impl Into<String>,
        recipient: impl Into<String>,
    ) -> Notification {
        let notification = Notification::new(message, recipient);
        let mut entries = self.entries.write().await;
        entries.push(notification.clone());
        info!(
            recipient = %notification.recipient,
            notification_message = %notification.message,
            "Notification sent"
        );
        notification
    }

    /// All notifications in append order
    pub async fn list(&self) -> Vec<Notification> {
        let entries = self.entries.read().await;
        info!(count = entries.len(), "Retrieving notifications");
        entries.clone()
    }
}

impl Default for NotificationLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send_appends_in_order() {
        let log = NotificationLog::new();

        log.send("New task created: Task 1", "admin").await;
        log.send("Task 1 updated to done", "admin").await;
        log.send("Task 1 deleted", "admin").await;

        let notifications = log.list().await;
        assert_eq!(notifications.len(), 3);
        assert_eq!(notifications[0].message, "New task created: Task 1");
        assert_eq!(notifications[1].message, "Task 1 updated to done");
        assert_eq!(notifications[2].message, "Task 1 deleted");
    }

    #[tokio::test]
    async fn test_sent_is_always_true() {
        let log = NotificationLog::new();

        let notification = log.send("Task 2 deleted", "admin").await;
        assert!(notification.sent);

        let listed = log.list().await;
        assert!(listed.iter().all(|n| n.sent));
    }

    #[tokio::test]
    async fn test_list_on_empty_log() {
        let log = NotificationLog::new();
        assert!(log.list().await.is_empty());
    }
}
