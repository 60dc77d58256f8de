use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::CommentResult;
use crate::models::{Comment, NewComment};
use crate::repository::CommentRepository;

/// In-memory implementation of CommentRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryCommentRepository {
    comments: Arc<RwLock<HashMap<Uuid, Comment>>>,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn create(&self, input: NewComment) -> CommentResult<Comment> {
        let comment = Comment {
            id: Uuid::now_v7(),
            task_id: input.task_id,
            body: input.body,
            author_email: input.author_email,
            author_name: input.author_name,
            created_at: Utc::now(),
        };

        let mut comments = self.comments.write().await;
        comments.insert(comment.id, comment.clone());

        tracing::info!(comment_id = %comment.id, "Created comment");
        Ok(comment)
    }

    async fn get_by_id(&self, id: Uuid) -> CommentResult<Option<Comment>> {
        let comments = self.comments.read().await;
        Ok(comments.get(&id).cloned())
    }

    async fn list_by_task(&self, task_id: Uuid) -> CommentResult<Vec<Comment>> {
        let comments = self.comments.read().await;

        let mut result: Vec<Comment> = comments
            .values()
            .filter(|c| c.task_id == task_id)
            .cloned()
            .collect();

        // Oldest first; ids are time-ordered (v7) and break timestamp ties
        result.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
        Ok(result)
    }

    async fn delete(&self, id: Uuid) -> CommentResult<bool> {
        let mut comments = self.comments.write().await;
        Ok(comments.remove(&id).is_some())
    }

    async fn count(&self) -> CommentResult<usize> {
        let comments = self.comments.read().await;
        Ok(comments.len())
    }
}
