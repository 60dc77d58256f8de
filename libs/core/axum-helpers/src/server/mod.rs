//! Server infrastructure module.
//!
//! This module provides:
//! - Application setup with common middleware
//! - Health and readiness endpoints
//! - Graceful shutdown

pub mod app;
pub mod health;
pub mod shutdown;

// Re-export commonly used types and functions
pub use app::{create_app, create_router};
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use shutdown::shutdown_signal;
