//! Comments Domain
//!
//! Replies attached to public tasks. Same layering as `domain_tasks`
//! (service → repository trait → models), without a live channel: comment
//! lists are fetched once at page-render time.
//!
//! Comments reference their task by id only. There is no referential
//! integrity to the tasks table; deleting a task leaves its comments in
//! place.

pub mod entity;
pub mod error;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{CommentError, CommentResult};
pub use memory::InMemoryCommentRepository;
pub use models::{Comment, CommentAuthor, CreateComment, NewComment};
pub use postgres::PgCommentRepository;
pub use repository::CommentRepository;
pub use service::CommentService;
