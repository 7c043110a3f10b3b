//! Report aggregation: one fan-out over the platform services per request.
//!
//! Cache, queue, module and runtime queries run concurrently and are joined
//! with `tokio::try_join!`, so the first failure wins and the remaining
//! queries are dropped. Environment and caller details are read last; they
//! cannot fail.

use chrono::Utc;
use futures_util::{stream, StreamExt, TryStreamExt};
use tracing::{debug, warn};

use crate::error::{GatherError, ProviderError};
use crate::platform::request::{HEADER_CITY, HEADER_CITY_LAT_LONG, HEADER_COUNTRY, HEADER_REGION};
use crate::platform::{RequestContext, User};
use crate::report::models::{CacheStats, CallerInfo, ModuleInfo, QueueStats, Snapshot};
use crate::InfoEngine;

/// The only queue the report covers.
pub const DEFAULT_QUEUE: &str = "default";

/// Version lookups allowed in flight at once.
pub const MAX_VERSION_LOOKUPS: usize = 4;

/// Builds a full [`Snapshot`] or fails with the first error encountered.
pub async fn gather(
    engine: &InfoEngine,
    request: &RequestContext,
    caller: Option<&User>,
) -> Result<Snapshot, GatherError> {
    let (memcache, taskqueue, modules, runtime) = tokio::try_join!(
        cache_stats(engine),
        queue_stats(engine),
        module_versions(engine),
        async { engine.runtime.stats().await.map_err(GatherError::Runtime) },
    )?;

    let env = &engine.env;
    Ok(Snapshot {
        app_id: env.app_id(),
        datacenter: env.datacenter(),
        default_version_hostname: env.default_version_hostname(),
        instance_id: env.instance_id(),
        is_dev_app_server: env.is_dev_app_server(),
        module_name: env.module_name(),
        server_software: env.server_software(),
        version_id: env.version_id(),
        server_time: Utc::now(),
        runtime_version: env.runtime_version(),
        cpu: runtime.cpu,
        ram: runtime.ram,
        modules,
        memcache,
        taskqueue,
        caller: caller_info(request, caller),
    })
}

async fn cache_stats(engine: &InfoEngine) -> Result<CacheStats, GatherError> {
    match engine.cache.stats().await {
        Ok(Some(stats)) => Ok(stats),
        Ok(None) => {
            debug!("cache has no statistics yet, reporting zeros");
            Ok(CacheStats::default())
        }
        Err(e) => Err(GatherError::Cache(e)),
    }
}

async fn queue_stats(engine: &InfoEngine) -> Result<QueueStats, GatherError> {
    let names = [DEFAULT_QUEUE.to_string()];
    let stats = engine.taskqueue.queue_stats(&names).await.map_err(|e| {
        warn!(queue = DEFAULT_QUEUE, error = %e, "Queue stats query failed");
        GatherError::QueueStats
    })?;

    let mut stats = stats.into_iter().next().ok_or_else(|| {
        warn!(queue = DEFAULT_QUEUE, "Queue stats query returned no queues");
        GatherError::QueueStats
    })?;
    stats.name = DEFAULT_QUEUE.to_string();
    Ok(stats)
}

/// Lists modules, then fetches their versions, at most `MAX_VERSION_LOOKUPS`
/// at a time, in registry order. Any failure drops the whole list.
async fn module_versions(engine: &InfoEngine) -> Result<Vec<ModuleInfo>, GatherError> {
    let names = engine.modules.list().await.map_err(GatherError::Modules)?;

    stream::iter(names)
        .map(|name| async move {
            let versions = engine.modules.versions(&name).await?;
            Ok::<_, ProviderError>(ModuleInfo { name, versions })
        })
        .buffered(MAX_VERSION_LOOKUPS)
        .try_collect()
        .await
        .map_err(GatherError::Modules)
}

fn caller_info(request: &RequestContext, caller: Option<&User>) -> CallerInfo {
    CallerInfo {
        remote_addr: request.remote_addr(),
        user_agent: request.user_agent(),
        country: request.header(HEADER_COUNTRY),
        region: request.header(HEADER_REGION),
        city: request.header(HEADER_CITY),
        city_lat_long: request.header(HEADER_CITY_LAT_LONG),
        email: caller.map(|u| u.email.clone()).unwrap_or_default(),
    }
}
