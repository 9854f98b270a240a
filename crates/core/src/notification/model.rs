//! Notification record definitions

use serde::{Deserialize, Serialize};

/// An audit record of a task-mutating event
///
/// `sent` is always true: no delivery mechanism exists, so the log is an
/// audit trail rather than a transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub recipient: String,
    pub sent: bool,
}

impl Notification {
    /// Create a notification for the given recipient
    pub fn new(message: impl Into<String>, recipient: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            recipient: recipient.into(),
            sent: true,
        }
    }
}
