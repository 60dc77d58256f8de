use axum_helpers::server::{create_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_comments::{CommentService, PgCommentRepository};
use domain_tasks::{PgTaskRepository, TaskService};
use domain_users::{AuthState, GoogleProvider};
use std::sync::Arc;
use tracing::info;

use taskplus_web::{AppState, Config, build_app, ready_router};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    init_tracing(&config.environment);

    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    database::postgres::run_migrations::<migration::Migrator>(&db, config.app.name).await?;

    let tasks = TaskService::new(PgTaskRepository::new(db.clone()));
    let comments = CommentService::new(PgCommentRepository::new(db.clone()));

    let provider = Arc::new(GoogleProvider::new(
        config.auth.google_client_id.clone(),
        config.auth.google_client_secret.clone(),
    ));
    let auth = AuthState::new(provider, config.public_url.clone());

    let state = AppState::new(config.clone(), tasks, comments);

    let app = build_app(state, auth, &config.environment)
        .merge(health_router(config.app))
        .merge(ready_router(db.clone()));

    create_app(app, &config.server).await?;

    info!("Shutting down: closing database connection");
    match db.close().await {
        Ok(_) => info!("PostgreSQL connection closed successfully"),
        Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
    }

    Ok(())
}
