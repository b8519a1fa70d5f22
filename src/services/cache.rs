use crate::models::FrequencyReport;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// In-process cache of derived frequency reports
///
/// Draw data never changes after load, so a cached report is always
/// identical to a fresh computation. The TTL only bounds memory held for
/// games nobody asks about.
#[derive(Clone)]
pub struct FrequencyCache {
    reports: moka::future::Cache<String, Arc<FrequencyReport>>,
    ttl_secs: u64,
}

impl FrequencyCache {
    /// Create a new cache
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let reports = moka::future::CacheBuilder::new(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { reports, ttl_secs }
    }

    /// Return the cached report for a game, computing it on a miss
    ///
    /// Concurrent misses for the same game wait on a single computation.
    pub async fn get_or_compute<F>(&self, game_id: &str, compute: F) -> Arc<FrequencyReport>
    where
        F: FnOnce() -> FrequencyReport,
    {
        let key = CacheKey::frequencies(game_id);
        let entry = self
            .reports
            .entry_by_ref(&key)
            .or_insert_with(async { Arc::new(compute()) })
            .await;

        if entry.is_fresh() {
            tracing::trace!("Frequency cache miss: {}", key);
        } else {
            tracing::trace!("Frequency cache hit: {}", key);
        }
        entry.into_value()
    }

    /// Drop every cached report
    pub async fn invalidate_all(&self) {
        self.reports.invalidate_all();
        self.reports.run_pending_tasks().await;
        tracing::debug!("Frequency cache cleared");
    }

    /// Get cache statistics
    pub async fn stats(&self) -> CacheStats {
        self.reports.run_pending_tasks().await;
        CacheStats {
            entries: self.reports.entry_count(),
            ttl_secs: self.ttl_secs,
        }
    }
}

/// Cache statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: u64,
    pub ttl_secs: u64,
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Build a cache key for a game's frequency report
    pub fn frequencies(game_id: &str) -> String {
        format!("frequencies:{}", game_id)
    }
}
