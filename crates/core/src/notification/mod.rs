//! Notification module
//!
//! Append-only audit log of task-mutating events.

mod log;
mod model;

pub use log::NotificationLog;
pub use model::Notification;
