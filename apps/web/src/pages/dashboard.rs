//! Authenticated dashboard: task form plus a live list.
//!
//! The list itself is delivered over `/dashboard/events`: the page opens an
//! EventSource and replaces its entire rendered list with every snapshot the
//! server pushes. One subscription per connected dashboard; it is released
//! when the stream is dropped.

use askama::Template;
use axum::{
    extract::{Form, Path, State},
    response::{
        Html, Redirect,
        sse::{Event, KeepAlive, Sse},
    },
};
use axum_helpers::AppError;
use domain_comments::CommentRepository;
use domain_tasks::{CreateTask, Task, TaskRepository};
use domain_users::{CurrentUser, SessionUser};
use futures::stream::Stream;
use serde::Serialize;
use std::convert::Infallible;
use uuid::Uuid;

use crate::pages::render;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardTemplate {
    user: SessionUser,
    public_url: String,
}

/// A task as serialized into the snapshot stream
#[derive(Debug, Serialize)]
struct TaskView {
    id: Uuid,
    body: String,
    is_public: bool,
    created_at: String,
}

impl From<Task> for TaskView {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            body: task.body,
            is_public: task.is_public,
            created_at: task.created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Dashboard shell; redirects to `/` when unauthenticated.
pub async fn dashboard<T, C>(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState<T, C>>,
) -> Result<Html<String>, AppError>
where
    T: TaskRepository + 'static,
    C: CommentRepository + 'static,
{
    render(&DashboardTemplate {
        user,
        public_url: state.config.public_url.clone(),
    })
}

/// Live task-list snapshots for the signed-in owner.
///
/// Emits the full ordered list on connect and again after every change to
/// this owner's tasks. A failed re-materialization is logged and skipped,
/// leaving the client on its previous snapshot.
pub async fn events<T, C>(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState<T, C>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>>
where
    T: TaskRepository + 'static,
    C: CommentRepository + 'static,
{
    let service = state.tasks.clone();
    let owner = user.email;

    let stream = async_stream::stream! {
        let mut subscription = service.watch().subscribe(&owner);

        loop {
            match service.list_tasks(&owner).await {
                Ok(tasks) => {
                    let views: Vec<TaskView> = tasks.into_iter().map(Into::into).collect();
                    let payload =
                        serde_json::to_string(&views).unwrap_or_else(|_| "[]".to_string());
                    yield Ok(Event::default().event("tasks").data(payload));
                }
                Err(e) => {
                    tracing::error!(owner = %owner, "Failed to materialize task list: {}", e);
                }
            }

            if !subscription.changed().await {
                break;
            }
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Create a task from the dashboard form.
///
/// Failures are logged and swallowed; the client is redirected back either
/// way and the live list reflects whatever actually happened.
pub async fn create_task<T, C>(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState<T, C>>,
    Form(input): Form<CreateTask>,
) -> Redirect
where
    T: TaskRepository + 'static,
    C: CommentRepository + 'static,
{
    if let Err(e) = state.tasks.create_task(&user.email, input).await {
        tracing::error!(owner = %user.email, "Failed to create task: {}", e);
    }

    Redirect::to("/dashboard")
}

/// Delete one of the caller's own tasks.
pub async fn delete_task<T, C>(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState<T, C>>,
    Path(id): Path<String>,
) -> Redirect
where
    T: TaskRepository + 'static,
    C: CommentRepository + 'static,
{
    match Uuid::parse_str(&id) {
        Ok(task_id) => {
            if let Err(e) = state.tasks.delete_task(task_id, &user.email).await {
                tracing::error!(owner = %user.email, task_id = %task_id, "Failed to delete task: {}", e);
            }
        }
        Err(_) => {
            tracing::warn!(owner = %user.email, "Delete requested for unparseable task id");
        }
    }

    Redirect::to("/dashboard")
}
