//! In-memory task storage implementation
//!
//! Holds the task collection and the id counter behind a read-write lock.
//! State is lost on restart.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{info, warn};

use super::model::Task;
use super::repository::TaskRepository;

struct TaskState {
    tasks: Vec<Task>,
    next_id: u64,
}

/// In-memory task store with an auto-incrementing id counter
///
/// Ids start at 1, are strictly increasing in creation order and are never
/// reused, even after a delete. The counter only advances under the write
/// lock.
pub struct TaskStore {
    state: RwLock<TaskState>,
}

impl TaskStore {
    pub fn new() -> Self {
        info!("TaskStore initialized");
        Self {
            state: RwLock::new(TaskState {
                tasks: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskRepository for TaskStore {
    async fn create(&self, title: String, description: String) -> Task {
        let mut state = self.state.write().await;
        let task = Task::new(state.next_id, title, description);
        state.next_id += 1;
        state.tasks.push(task.clone());
        info!(task_id = task.id, title = %task.title, "Task created");
        task
    }

    async fn get(&self, id: u64) -> Option<Task> {
        let state = self.state.read().await;
        match state.tasks.iter().find(|task| task.id == id) {
            Some(task) => {
                info!(task_id = id, "Task retrieved");
                Some(task.clone())
            }
            None => {
                warn!(task_id = id, "Task not found");
                None
            }
        }
    }

    async fn list(&self) -> Vec<Task> {
        let state = self.state.read().await;
        info!(count = state.tasks.len(), "Retrieving all tasks");
        state.tasks.clone()
    }

    async fn update_status(&self, id: u64, status: String) -> Option<Task> {
        let mut state = self.state.write().await;
        let Some(task) = state.tasks.iter_mut().find(|task| task.id == id) else {
            warn!(task_id = id, "Task not found");
            return None;
        };
        task.status = status;
        info!(task_id = id, status = %task.status, "Task status updated");
        Some(task.clone())
    }

    async fn delete(&self, id: u64) -> bool {
        let mut state = self.state.write().await;
        let before = state.tasks.len();
        state.tasks.retain(|task| task.id != id);
        let deleted = state.tasks.len() != before;
        if deleted {
            info!(task_id = id, "Task deleted");
        } else {
            warn!(task_id = id, "Task not found");
        }
        deleted
    }
}
