//! Shareable task links.

use uuid::Uuid;

/// Build the absolute URL a task is shared under.
pub fn share_url(public_url: &str, task_id: Uuid) -> String {
    format!("{}/task/{}", public_url.trim_end_matches('/'), task_id)
}
