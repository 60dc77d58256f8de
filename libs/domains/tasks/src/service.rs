use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, NewTask, Task};
use crate::repository::TaskRepository;
use crate::watch::TaskWatch;

/// Service layer for Task business logic
///
/// Validates input, enforces ownership on deletes, and publishes a watch
/// event after every successful write.
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
    watch: TaskWatch,
}

impl<R: TaskRepository> Clone for TaskService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            watch: self.watch.clone(),
        }
    }
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            watch: TaskWatch::default(),
        }
    }

    /// The change hub live dashboards subscribe to.
    pub fn watch(&self) -> &TaskWatch {
        &self.watch
    }

    /// Create a task owned by `owner`.
    #[instrument(skip(self, input), fields(owner = %owner))]
    pub async fn create_task(&self, owner: &str, input: CreateTask) -> TaskResult<Task> {
        input
            .validate()
            .map_err(|e| TaskError::Validation(e.to_string()))?;

        let task = self.repository.create(NewTask::new(owner, input)).await?;
        self.watch.notify(owner);
        Ok(task)
    }

    /// Get a task by ID
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn get_task(&self, id: Uuid) -> TaskResult<Task> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id))
    }

    /// List an owner's tasks, newest first
    pub async fn list_tasks(&self, owner: &str) -> TaskResult<Vec<Task>> {
        self.repository.list_by_owner(owner).await
    }

    /// Delete a task on behalf of `caller`.
    ///
    /// Only the owner may delete; anyone else gets `Forbidden` regardless of
    /// what the UI offered them.
    #[instrument(skip(self), fields(task_id = %id, caller = %caller))]
    pub async fn delete_task(&self, id: Uuid, caller: &str) -> TaskResult<()> {
        let task = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id))?;

        if task.owner != caller {
            return Err(TaskError::Forbidden(id));
        }

        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(TaskError::NotFound(id));
        }

        self.watch.notify(&task.owner);
        Ok(())
    }

    /// Count all tasks (homepage counter)
    pub async fn count_tasks(&self) -> TaskResult<usize> {
        self.repository.count().await
    }
}
