//! Task model definitions

use serde::{Deserialize, Serialize};

/// Status assigned to newly created tasks
pub const DEFAULT_STATUS: &str = "pending";

/// A unit of work record
///
/// `title` and `description` are immutable after creation; only `status` can
/// change, and it carries no enumerated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub status: String,
}

impl Task {
    /// Create a task with the given id, title and description
    pub fn new(id: u64, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            status: DEFAULT_STATUS.to_string(),
        }
    }
}
