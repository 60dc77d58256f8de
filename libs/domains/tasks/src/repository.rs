use async_trait::async_trait;
use uuid::Uuid;

use crate::error::TaskResult;
use crate::models::{NewTask, Task};

/// Repository trait for Task persistence
///
/// Defines the data access interface for tasks. Deletion is unconditional
/// at this level; ownership is enforced by [`crate::service::TaskService`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Insert a new task, assigning its id and creation timestamp
    async fn create(&self, input: NewTask) -> TaskResult<Task>;

    /// Get a task by ID
    async fn get_by_id(&self, id: Uuid) -> TaskResult<Option<Task>>;

    /// List an owner's tasks, newest first
    async fn list_by_owner(&self, owner: &str) -> TaskResult<Vec<Task>>;

    /// Delete a task by ID; returns whether a row was removed
    async fn delete(&self, id: Uuid) -> TaskResult<bool>;

    /// Count all tasks across all owners
    async fn count(&self) -> TaskResult<usize>;
}
