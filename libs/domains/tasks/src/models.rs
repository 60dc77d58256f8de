use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Task entity - a user-authored text item, optionally public
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier (store-assigned)
    pub id: Uuid,
    /// Owner email; immutable after creation
    pub owner: String,
    /// Free-text body
    pub body: String,
    /// Whether the task is visible to non-owners
    pub is_public: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a task, as submitted by the dashboard form
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTask {
    #[validate(length(min = 1, max = 500))]
    pub body: String,
    #[serde(default)]
    pub is_public: bool,
}

/// A validated task ready for insertion, with its owner attached
#[derive(Debug, Clone)]
pub struct NewTask {
    pub owner: String,
    pub body: String,
    pub is_public: bool,
}

impl NewTask {
    pub fn new(owner: impl Into<String>, input: CreateTask) -> Self {
        Self {
            owner: owner.into(),
            body: input.body,
            is_public: input.is_public,
        }
    }
}
