use async_trait::async_trait;
use uuid::Uuid;

use crate::error::CommentResult;
use crate::models::{Comment, NewComment};

/// Repository trait for Comment persistence
///
/// Deletion is unconditional at this level; authorship is enforced by
/// [`crate::service::CommentService`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Insert a new comment, assigning its id and creation timestamp
    async fn create(&self, input: NewComment) -> CommentResult<Comment>;

    /// Get a comment by ID
    async fn get_by_id(&self, id: Uuid) -> CommentResult<Option<Comment>>;

    /// List a task's comments, oldest first
    async fn list_by_task(&self, task_id: Uuid) -> CommentResult<Vec<Comment>>;

    /// Delete a comment by ID; returns whether a row was removed
    async fn delete(&self, id: Uuid) -> CommentResult<bool>;

    /// Count all comments across all tasks
    async fn count(&self) -> CommentResult<usize>;
}
