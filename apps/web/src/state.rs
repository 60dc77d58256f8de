//! Application state shared by all page handlers.

use domain_comments::{CommentRepository, CommentService};
use domain_tasks::{TaskRepository, TaskService};

use crate::config::Config;
use crate::stats::{STATS_REVALIDATE, StatsCache};

/// Shared application state.
///
/// Generic over the repository implementations so tests can run the full
/// router against in-memory stores.
pub struct AppState<T: TaskRepository, C: CommentRepository> {
    /// Application configuration loaded from environment variables
    pub config: Config,
    /// Task service
    pub tasks: TaskService<T>,
    /// Comment service
    pub comments: CommentService<C>,
    /// Homepage counter cache
    pub stats: StatsCache,
}

impl<T: TaskRepository, C: CommentRepository> AppState<T, C> {
    pub fn new(config: Config, tasks: TaskService<T>, comments: CommentService<C>) -> Self {
        Self {
            config,
            tasks,
            comments,
            stats: StatsCache::new(STATS_REVALIDATE),
        }
    }
}

impl<T: TaskRepository, C: CommentRepository> Clone for AppState<T, C> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            tasks: self.tasks.clone(),
            comments: self.comments.clone(),
            stats: self.stats.clone(),
        }
    }
}
