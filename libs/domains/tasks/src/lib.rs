//! Tasks Domain
//!
//! Domain implementation for user-authored tasks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← Business logic, validation, ownership checks
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! The [`watch`] module carries change notifications from the service to
//! live dashboard subscribers.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_tasks::{PgTaskRepository, TaskService};
//! use sea_orm::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::connect("postgres://...").await?;
//! let service = TaskService::new(PgTaskRepository::new(db));
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod watch;

// Re-export commonly used types
pub use error::{TaskError, TaskResult};
pub use memory::InMemoryTaskRepository;
pub use models::{CreateTask, NewTask, Task};
pub use postgres::PgTaskRepository;
pub use repository::TaskRepository;
pub use service::TaskService;
pub use watch::{TaskChange, TaskSubscription, TaskWatch};
