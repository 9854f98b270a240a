//! Task repository trait
//!
//! Defines the interface for task storage operations.

use async_trait::async_trait;

use super::model::Task;

/// Repository interface for task CRUD operations
///
/// Absence is a normal outcome here: lookups return `Option` and `delete`
/// reports the result as a boolean instead of raising an error.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Create a new task with a freshly assigned id
    async fn create(&self, title: String, description: String) -> Task;

    /// Get a task by ID
    async fn get(&self, id: u64) -> Option<Task>;

    /// Get all tasks in creation order
    async fn list(&self) -> Vec<Task>;

    /// Update the status of an existing task
    async fn update_status(&self, id: u64, status: String) -> Option<Task>;

    /// Delete a task by ID, returning whether it existed
    async fn delete(&self, id: u64) -> bool;
}
