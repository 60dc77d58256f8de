use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Comment entity - a text reply attached to a task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique identifier (store-assigned)
    pub id: Uuid,
    /// Id of the task this comment replies to; may be orphaned
    pub task_id: Uuid,
    /// Free-text body
    pub body: String,
    /// Author email, from the session at creation time
    pub author_email: String,
    /// Author display name, from the session at creation time
    pub author_name: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a comment, as submitted by the task-page form
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateComment {
    #[validate(length(min = 1, max = 500))]
    pub body: String,
}

/// The session identity stamped onto a comment
#[derive(Debug, Clone)]
pub struct CommentAuthor {
    pub email: String,
    pub name: String,
}

/// A validated comment ready for insertion
#[derive(Debug, Clone)]
pub struct NewComment {
    pub task_id: Uuid,
    pub body: String,
    pub author_email: String,
    pub author_name: String,
}

impl NewComment {
    pub fn new(task_id: Uuid, author: CommentAuthor, input: CreateComment) -> Self {
        Self {
            task_id,
            body: input.body,
            author_email: author.email,
            author_name: author.name,
        }
    }
}
