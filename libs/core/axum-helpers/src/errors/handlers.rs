use crate::errors::AppError;
use axum::response::IntoResponse;

/// Fallback handler for unmatched routes.
pub async fn not_found() -> impl IntoResponse {
    AppError::NotFound("The requested resource was not found".to_string())
}
