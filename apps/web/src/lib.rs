//! Task+ web application.
//!
//! Server-rendered task tracking: authenticated users manage short text
//! tasks on a live dashboard, optionally mark them public, and visitors
//! comment on public tasks.

pub mod config;
pub mod pages;
pub mod share;
pub mod state;
pub mod stats;

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use axum_helpers::{HealthCheckFuture, create_router, create_session_layer, run_health_checks};
use core_config::Environment;
use database::postgres::DatabaseConnection;
use domain_comments::CommentRepository;
use domain_tasks::TaskRepository;
use domain_users::{AuthState, auth_router};
use serde_json::Value;

pub use config::{AuthConfig, Config};
pub use state::AppState;

/// All application routes (pages + auth), without cross-cutting layers.
///
/// Kept separate from [`build_app`] so tests can compose these routes with
/// their own session layer and helpers.
pub fn routes<T, C>(state: AppState<T, C>, auth: AuthState) -> Router
where
    T: TaskRepository + 'static,
    C: CommentRepository + 'static,
{
    pages::router(state).merge(auth_router(auth))
}

/// The full application: routes, common middleware, and the session layer.
pub fn build_app<T, C>(
    state: AppState<T, C>,
    auth: AuthState,
    environment: &Environment,
) -> Router
where
    T: TaskRepository + 'static,
    C: CommentRepository + 'static,
{
    create_router(routes(state, auth)).layer(create_session_layer(environment))
}

/// Readiness endpoint backed by a live database check.
pub fn ready_router(db: DatabaseConnection) -> Router {
    Router::new().route("/ready", get(ready)).with_state(db)
}

async fn ready(
    State(db): State<DatabaseConnection>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "database",
        Box::pin(async {
            database::postgres::check_health(&db)
                .await
                .map_err(|e| e.to_string())
        }),
    )];

    run_health_checks(checks).await
}
