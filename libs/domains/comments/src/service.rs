use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{CommentError, CommentResult};
use crate::models::{Comment, CommentAuthor, CreateComment, NewComment};
use crate::repository::CommentRepository;

/// Service layer for Comment business logic
pub struct CommentService<R: CommentRepository> {
    repository: Arc<R>,
}

impl<R: CommentRepository> Clone for CommentService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
        }
    }
}

impl<R: CommentRepository> CommentService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a comment on `task_id`, stamped with the caller's identity.
    ///
    /// The task's existence is not re-checked here; the page handler has
    /// already gated on it, and orphaned ids are tolerated by design.
    #[instrument(skip(self, author, input), fields(task_id = %task_id))]
    pub async fn create_comment(
        &self,
        task_id: Uuid,
        author: CommentAuthor,
        input: CreateComment,
    ) -> CommentResult<Comment> {
        input
            .validate()
            .map_err(|e| CommentError::Validation(e.to_string()))?;

        self.repository
            .create(NewComment::new(task_id, author, input))
            .await
    }

    /// List a task's comments, oldest first (one-shot fetch)
    pub async fn list_comments(&self, task_id: Uuid) -> CommentResult<Vec<Comment>> {
        self.repository.list_by_task(task_id).await
    }

    /// Delete a comment on behalf of `caller`.
    ///
    /// Only the author may delete; anyone else gets `Forbidden` regardless
    /// of what the UI offered them.
    #[instrument(skip(self), fields(comment_id = %id, caller = %caller))]
    pub async fn delete_comment(&self, id: Uuid, caller: &str) -> CommentResult<()> {
        let comment = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(CommentError::NotFound(id))?;

        if comment.author_email != caller {
            return Err(CommentError::Forbidden(id));
        }

        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(CommentError::NotFound(id));
        }

        Ok(())
    }

    /// Count all comments (homepage counter)
    pub async fn count_comments(&self) -> CommentResult<usize> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryCommentRepository;
    use crate::repository::MockCommentRepository;

    fn author(email: &str, name: &str) -> CommentAuthor {
        CommentAuthor {
            email: email.to_string(),
            name: name.to_string(),
        }
    }

    fn input(body: &str) -> CreateComment {
        CreateComment {
            body: body.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_comment_stamps_author() {
        let service = CommentService::new(InMemoryCommentRepository::new());
        let task_id = Uuid::now_v7();

        let comment = service
            .create_comment(task_id, author("b@example.com", "B"), input("Nice!"))
            .await
            .unwrap();

        assert_eq!(comment.task_id, task_id);
        assert_eq!(comment.author_email, "b@example.com");
        assert_eq!(comment.author_name, "B");
    }

    #[tokio::test]
    async fn test_create_comment_rejects_empty_body() {
        let service = CommentService::new(InMemoryCommentRepository::new());

        let result = service
            .create_comment(Uuid::now_v7(), author("b@example.com", "B"), input(""))
            .await;
        assert!(matches!(result, Err(CommentError::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_comment_enforces_authorship() {
        let service = CommentService::new(InMemoryCommentRepository::new());

        let comment = service
            .create_comment(Uuid::now_v7(), author("b@example.com", "B"), input("mine"))
            .await
            .unwrap();

        let result = service.delete_comment(comment.id, "a@example.com").await;
        assert!(matches!(result, Err(CommentError::Forbidden(_))));

        service
            .delete_comment(comment.id, "b@example.com")
            .await
            .unwrap();
        assert!(service
            .list_comments(comment.task_id)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_comment() {
        let service = CommentService::new(InMemoryCommentRepository::new());

        let result = service.delete_comment(Uuid::now_v7(), "b@example.com").await;
        assert!(matches!(result, Err(CommentError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_repository_errors_propagate() {
        let mut repo = MockCommentRepository::new();
        repo.expect_count()
            .returning(|| Err(CommentError::Database("connection reset".into())));

        let service = CommentService::new(repo);
        assert!(matches!(
            service.count_comments().await,
            Err(CommentError::Database(_))
        ));
    }
}
