use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CommentError {
    #[error("Comment not found: {0}")]
    NotFound(Uuid),

    #[error("Not the author of comment {0}")]
    Forbidden(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type CommentResult<T> = Result<T, CommentError>;

impl From<CommentError> for AppError {
    fn from(err: CommentError) -> Self {
        match err {
            CommentError::NotFound(id) => AppError::NotFound(format!("Comment {} not found", id)),
            CommentError::Forbidden(id) => {
                AppError::Forbidden(format!("Comment {} belongs to another user", id))
            }
            CommentError::Validation(msg) => AppError::BadRequest(msg),
            CommentError::Database(msg) => {
                AppError::InternalServerError(format!("Database error: {}", msg))
            }
            CommentError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for CommentError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<sea_orm::DbErr> for CommentError {
    fn from(err: sea_orm::DbErr) -> Self {
        CommentError::Database(err.to_string())
    }
}
