use async_trait::async_trait;

use crate::error::ProviderError;
use crate::platform::{CacheStatsProvider, QueueStatsProvider};
use crate::report::models::{CacheStats, QueueStats};

/// The development server keeps no cache counters.
#[derive(Debug, Clone, Default)]
pub struct DevCache;

#[async_trait]
impl CacheStatsProvider for DevCache {
    async fn stats(&self) -> Result<Option<CacheStats>, ProviderError> {
        Ok(None)
    }
}

/// Every queue exists and is idle.
#[derive(Debug, Clone)]
pub struct DevTaskQueue {
    enforced_rate: f64,
}

impl DevTaskQueue {
    pub fn new(enforced_rate: f64) -> Self {
        Self { enforced_rate }
    }
}

#[async_trait]
impl QueueStatsProvider for DevTaskQueue {
    async fn queue_stats(&self, names: &[String]) -> Result<Vec<QueueStats>, ProviderError> {
        Ok(names
            .iter()
            .map(|name| QueueStats {
                name: name.clone(),
                enforced_rate: self.enforced_rate,
                ..QueueStats::default()
            })
            .collect())
    }
}
