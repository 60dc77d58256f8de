use askama::Template;
use axum::{extract::State, response::Html};
use axum_helpers::AppError;
use domain_comments::CommentRepository;
use domain_tasks::TaskRepository;
use domain_users::{MaybeUser, SessionUser};

use crate::pages::render;
use crate::state::AppState;
use crate::stats::Stats;

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    user: Option<SessionUser>,
    tasks: usize,
    comments: usize,
}

/// Public landing page with aggregate counters.
///
/// The counters come from the stats cache and may lag reality by up to the
/// revalidation window.
pub async fn home<T, C>(
    State(state): State<AppState<T, C>>,
    MaybeUser(user): MaybeUser,
) -> Result<Html<String>, AppError>
where
    T: TaskRepository + 'static,
    C: CommentRepository + 'static,
{
    let tasks = state.tasks.clone();
    let comments = state.comments.clone();

    let stats = state
        .stats
        .get_or_refresh(|| async move {
            let tasks = tasks.count_tasks().await.map_err(|e| e.to_string())?;
            let comments = comments.count_comments().await.map_err(|e| e.to_string())?;
            Ok::<_, String>(Stats { tasks, comments })
        })
        .await;

    render(&HomeTemplate {
        user,
        tasks: stats.tasks,
        comments: stats.comments,
    })
}
