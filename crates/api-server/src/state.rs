//! Application state

use std::sync::Arc;

use tm_core::notification::NotificationLog;
use tm_core::task::TaskStore;

use crate::config::Config;

/// Shared application state
///
/// The task store and notification log are single instances for the whole
/// process, constructed here and handed to the router at startup.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    task_store: TaskStore,
    notification_log: NotificationLog,
}

impl AppState {
    /// Create a new AppState with the given configuration
    pub fn new(config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                task_store: TaskStore::new(),
                notification_log: NotificationLog::new(),
            }),
        }
    }

    /// Get the service configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get reference to the task store
    pub fn task_store(&self) -> &TaskStore {
        &self.inner.task_store
    }

    /// Get reference to the notification log
    pub fn notification_log(&self) -> &NotificationLog {
        &self.inner.notification_log
    }
}
