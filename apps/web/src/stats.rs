//! Cached aggregate counts for the landing page.
//!
//! The landing page serves totals that may be stale by up to the
//! revalidation window; a failed refresh keeps serving the last known
//! counts.

use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// How long homepage counters may be served stale.
pub const STATS_REVALIDATE: Duration = Duration::from_secs(600);

/// Aggregate document counts shown on the landing page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub tasks: usize,
    pub comments: usize,
}

#[derive(Clone)]
pub struct StatsCache {
    ttl: Duration,
    inner: Arc<RwLock<Option<(Stats, Instant)>>>,
}

impl StatsCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            inner: Arc::new(RwLock::new(None)),
        }
    }

    /// Return the cached counts, refreshing them once the window has passed.
    ///
    /// On refresh failure the error is logged and the previous counts (zero
    /// before the first success) are returned.
    pub async fn get_or_refresh<F, Fut, E>(&self, refresh: F) -> Stats
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Stats, E>>,
        E: std::fmt::Display,
    {
        {
            let cached = self.inner.read().await;
            if let Some((stats, refreshed_at)) = *cached {
                if refreshed_at.elapsed() < self.ttl {
                    return stats;
                }
            }
        }

        let mut cached = self.inner.write().await;

        // Another request may have refreshed while we waited for the lock
        if let Some((stats, refreshed_at)) = *cached {
            if refreshed_at.elapsed() < self.ttl {
                return stats;
            }
        }

        match refresh().await {
            Ok(stats) => {
                *cached = Some((stats, Instant::now()));
                stats
            }
            Err(e) => {
                tracing::error!("Failed to refresh homepage counters: {}", e);
                cached.map(|(stats, _)| stats).unwrap_or_default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(tasks: usize, comments: usize) -> Stats {
        Stats { tasks, comments }
    }

    #[tokio::test]
    async fn test_first_refresh_populates() {
        let cache = StatsCache::new(Duration::from_secs(600));

        let stats = cache
            .get_or_refresh(|| async { Ok::<_, String>(counts(3, 7)) })
            .await;
        assert_eq!(stats, counts(3, 7));
    }

    #[tokio::test]
    async fn test_within_window_serves_cached() {
        let cache = StatsCache::new(Duration::from_secs(600));

        cache
            .get_or_refresh(|| async { Ok::<_, String>(counts(1, 1)) })
            .await;

        // A newer value is not picked up until the window passes
        let stats = cache
            .get_or_refresh(|| async { Ok::<_, String>(counts(9, 9)) })
            .await;
        assert_eq!(stats, counts(1, 1));
    }

    #[tokio::test]
    async fn test_expired_window_refreshes() {
        let cache = StatsCache::new(Duration::ZERO);

        cache
            .get_or_refresh(|| async { Ok::<_, String>(counts(1, 1)) })
            .await;
        let stats = cache
            .get_or_refresh(|| async { Ok::<_, String>(counts(2, 5)) })
            .await;
        assert_eq!(stats, counts(2, 5));
    }

    #[tokio::test]
    async fn test_failed_refresh_serves_stale() {
        let cache = StatsCache::new(Duration::ZERO);

        cache
            .get_or_refresh(|| async { Ok::<_, String>(counts(4, 2)) })
            .await;
        let stats = cache
            .get_or_refresh(|| async { Err::<Stats, _>("backend down".to_string()) })
            .await;
        assert_eq!(stats, counts(4, 2));
    }

    #[tokio::test]
    async fn test_failure_before_first_success_is_zero() {
        let cache = StatsCache::new(Duration::ZERO);

        let stats = cache
            .get_or_refresh(|| async { Err::<Stats, _>("backend down".to_string()) })
            .await;
        assert_eq!(stats, Stats::default());
    }
}
