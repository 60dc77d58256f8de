//! Server-rendered pages and their form actions.

pub mod dashboard;
pub mod home;
pub mod task;

use askama::Template;
use axum::{
    Router,
    response::Html,
    routing::{get, post},
};
use axum_helpers::AppError;
use domain_comments::CommentRepository;
use domain_tasks::TaskRepository;
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Create the page routes
pub fn router<T, C>(state: AppState<T, C>) -> Router
where
    T: TaskRepository + 'static,
    C: CommentRepository + 'static,
{
    Router::new()
        .route("/", get(home::home))
        .route("/dashboard", get(dashboard::dashboard))
        .route("/dashboard/events", get(dashboard::events))
        .route("/dashboard/tasks", post(dashboard::create_task))
        .route("/dashboard/tasks/{id}/delete", post(dashboard::delete_task))
        .route("/task/{id}", get(task::show))
        .route("/task/{id}/comments", post(task::create_comment))
        .route(
            "/task/{id}/comments/{comment_id}/delete",
            post(task::delete_comment),
        )
        .nest_service(
            "/static",
            ServeDir::new(concat!(env!("CARGO_MANIFEST_DIR"), "/static")),
        )
        .with_state(state)
}

pub(crate) fn render<T: Template>(template: &T) -> Result<Html<String>, AppError> {
    template
        .render()
        .map(Html)
        .map_err(|e| AppError::InternalServerError(format!("Template rendering failed: {}", e)))
}
