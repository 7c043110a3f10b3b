pub mod config;
pub mod error;
pub mod platform;
pub mod report;
pub mod server;
pub mod utils;

use std::sync::Arc;

use crate::config::PlatformConfig;
use crate::error::{ConfigError, StartupError};
use crate::platform::local::{
    ConfiguredModules, DevCache, DevTaskQueue, HeaderIdentity, ProcessRuntime, StaticEnvironment,
};
use crate::platform::{
    CacheStatsProvider, EnvironmentInfo, IdentityService, ModuleRegistry, QueueStatsProvider,
    RuntimeStatsProvider,
};

// ========================================
// ENGINE
// ========================================

/// Handles to every platform service the report reads from.
/// Cheap to clone (all fields are Arcs), shared read-only across requests.
#[derive(Clone)]
pub struct InfoEngine {
    pub env: Arc<dyn EnvironmentInfo>,
    pub identity: Arc<dyn IdentityService>,
    pub cache: Arc<dyn CacheStatsProvider>,
    pub taskqueue: Arc<dyn QueueStatsProvider>,
    pub modules: Arc<dyn ModuleRegistry>,
    pub runtime: Arc<dyn RuntimeStatsProvider>,
}

impl InfoEngine {
    /// Engine backed by the in-process development platform.
    pub fn local(config: &PlatformConfig) -> Result<Self, StartupError> {
        let modules = ConfiguredModules::parse(&config.modules, &config.module_name, &config.version_id)
            .map_err(ConfigError::from)?;

        Ok(Self {
            env: Arc::new(StaticEnvironment::new(config.clone())),
            identity: Arc::new(HeaderIdentity::new(config.login_url.clone())),
            cache: Arc::new(DevCache),
            taskqueue: Arc::new(DevTaskQueue::new(config.queue_enforced_rate)),
            modules: Arc::new(modules),
            runtime: Arc::new(ProcessRuntime::new()?),
        })
    }
}
