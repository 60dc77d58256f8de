use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::TaskResult;
use crate::models::{NewTask, Task};
use crate::repository::TaskRepository;

/// In-memory implementation of TaskRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<HashMap<Uuid, Task>>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, input: NewTask) -> TaskResult<Task> {
        let task = Task {
            id: Uuid::now_v7(),
            owner: input.owner,
            body: input.body,
            is_public: input.is_public,
            created_at: Utc::now(),
        };

        let mut tasks = self.tasks.write().await;
        tasks.insert(task.id, task.clone());

        tracing::info!(task_id = %task.id, "Created task");
        Ok(task)
    }

    async fn get_by_id(&self, id: Uuid) -> TaskResult<Option<Task>> {
        let tasks = self.tasks.read().await;
        Ok(tasks.get(&id).cloned())
    }

    async fn list_by_owner(&self, owner: &str) -> TaskResult<Vec<Task>> {
        let tasks = self.tasks.read().await;

        let mut result: Vec<Task> = tasks
            .values()
            .filter(|t| t.owner == owner)
            .cloned()
            .collect();

        // Newest first; ids are time-ordered (v7) and break timestamp ties
        result.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(result)
    }

    async fn delete(&self, id: Uuid) -> TaskResult<bool> {
        let mut tasks = self.tasks.write().await;
        Ok(tasks.remove(&id).is_some())
    }

    async fn count(&self) -> TaskResult<usize> {
        let tasks = self.tasks.read().await;
        Ok(tasks.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateTask;

    fn new_task(owner: &str, body: &str) -> NewTask {
        NewTask::new(
            owner,
            CreateTask {
                body: body.to_string(),
                is_public: false,
            },
        )
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryTaskRepository::new();

        let created = repo.create(new_task("a@example.com", "Buy milk")).await.unwrap();
        assert_eq!(created.owner, "a@example.com");

        let fetched = repo.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_list_is_owner_scoped_and_newest_first() {
        let repo = InMemoryTaskRepository::new();

        let first = repo.create(new_task("a@example.com", "first")).await.unwrap();
        let second = repo.create(new_task("a@example.com", "second")).await.unwrap();
        repo.create(new_task("b@example.com", "other")).await.unwrap();

        let listed = repo.list_by_owner("a@example.com").await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
    }

    #[tokio::test]
    async fn test_delete_reports_missing_rows() {
        let repo = InMemoryTaskRepository::new();

        let created = repo.create(new_task("a@example.com", "gone soon")).await.unwrap();
        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_count_spans_all_owners() {
        let repo = InMemoryTaskRepository::new();

        repo.create(new_task("a@example.com", "one")).await.unwrap();
        repo.create(new_task("b@example.com", "two")).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 2);
    }
}
