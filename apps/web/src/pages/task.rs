//! Public task page: the task body, its comments, and the comment form.
//!
//! The gate: a task that does not exist, has an unparseable id, or is not
//! flagged public sends every requester back to `/` with a non-permanent
//! redirect. Comments are fetched once at render time.

use askama::Template;
use axum::{
    extract::{Form, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use domain_comments::{Comment, CommentAuthor, CommentRepository, CreateComment};
use domain_tasks::{Task, TaskError, TaskRepository};
use domain_users::{CurrentUser, MaybeUser, SessionUser};
use uuid::Uuid;

use crate::pages::render;
use crate::share::share_url;
use crate::state::AppState;

#[derive(Template)]
#[template(path = "task.html")]
struct TaskTemplate {
    user: Option<SessionUser>,
    task: TaskPageView,
    comments: Vec<CommentView>,
    share_url: String,
}

struct TaskPageView {
    id: Uuid,
    body: String,
    created_at: String,
}

impl From<Task> for TaskPageView {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            body: task.body,
            created_at: task.created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

struct CommentView {
    id: Uuid,
    name: String,
    body: String,
    can_delete: bool,
}

impl CommentView {
    fn new(comment: Comment, viewer: Option<&SessionUser>) -> Self {
        let can_delete = viewer.is_some_and(|u| u.email == comment.author_email);
        Self {
            id: comment.id,
            name: comment.author_name,
            body: comment.body,
            can_delete,
        }
    }
}

/// Render a public task, or redirect.
pub async fn show<T, C>(
    Path(id): Path<String>,
    MaybeUser(user): MaybeUser,
    State(state): State<AppState<T, C>>,
) -> Response
where
    T: TaskRepository + 'static,
    C: CommentRepository + 'static,
{
    let Ok(task_id) = Uuid::parse_str(&id) else {
        return Redirect::temporary("/").into_response();
    };

    let task = match state.tasks.get_task(task_id).await {
        Ok(task) => task,
        Err(TaskError::NotFound(_)) => return Redirect::temporary("/").into_response(),
        Err(e) => {
            tracing::error!(task_id = %task_id, "Failed to load task: {}", e);
            return Redirect::temporary("/").into_response();
        }
    };

    if !task.is_public {
        return Redirect::temporary("/").into_response();
    }

    let comments = match state.comments.list_comments(task_id).await {
        Ok(comments) => comments,
        Err(e) => {
            tracing::error!(task_id = %task_id, "Failed to load comments: {}", e);
            Vec::new()
        }
    };

    let comments = comments
        .into_iter()
        .map(|c| CommentView::new(c, user.as_ref()))
        .collect();

    let template = TaskTemplate {
        share_url: share_url(&state.config.public_url, task_id),
        task: task.into(),
        comments,
        user,
    };

    match render(&template) {
        Ok(html) => html.into_response(),
        Err(e) => e.into_response(),
    }
}

/// Post a comment on a task (authenticated).
pub async fn create_comment<T, C>(
    Path(id): Path<String>,
    CurrentUser(user): CurrentUser,
    State(state): State<AppState<T, C>>,
    Form(input): Form<CreateComment>,
) -> Redirect
where
    T: TaskRepository + 'static,
    C: CommentRepository + 'static,
{
    let Ok(task_id) = Uuid::parse_str(&id) else {
        return Redirect::to("/");
    };

    let author = CommentAuthor {
        email: user.email,
        name: user.name,
    };

    if let Err(e) = state.comments.create_comment(task_id, author, input).await {
        tracing::error!(task_id = %task_id, "Failed to create comment: {}", e);
    }

    Redirect::to(&format!("/task/{}", task_id))
}

/// Delete one of the caller's own comments.
pub async fn delete_comment<T, C>(
    Path((id, comment_id)): Path<(String, String)>,
    CurrentUser(user): CurrentUser,
    State(state): State<AppState<T, C>>,
) -> Redirect
where
    T: TaskRepository + 'static,
    C: CommentRepository + 'static,
{
    let Ok(task_id) = Uuid::parse_str(&id) else {
        return Redirect::to("/");
    };

    match Uuid::parse_str(&comment_id) {
        Ok(comment_id) => {
            if let Err(e) = state.comments.delete_comment(comment_id, &user.email).await {
                tracing::error!(comment_id = %comment_id, "Failed to delete comment: {}", e);
            }
        }
        Err(_) => {
            tracing::warn!(task_id = %task_id, "Delete requested for unparseable comment id");
        }
    }

    Redirect::to(&format!("/task/{}", task_id))
}
