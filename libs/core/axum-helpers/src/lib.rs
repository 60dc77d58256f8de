//! # Axum Helpers
//!
//! Shared utilities for the workspace's Axum web applications.
//!
//! ## Modules
//!
//! - **[`errors`]**: structured error responses
//! - **[`server`]**: server setup, health checks, graceful shutdown
//! - **[`session`]**: cookie session layer

pub mod errors;
pub mod server;
pub mod session;

// Re-export error types
pub use errors::{AppError, ErrorResponse};

// Re-export server types
pub use server::{
    HealthCheckFuture, HealthResponse, create_app, create_router, health_router,
    run_health_checks, shutdown_signal,
};

// Re-export the session layer builder
pub use session::create_session_layer;
