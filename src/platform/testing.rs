//! Mock-backed engines for unit tests.

use std::sync::Arc;

use crate::error::ProviderError;
use crate::platform::{
    MockCacheStatsProvider, MockEnvironmentInfo, MockIdentityService, MockModuleRegistry,
    MockQueueStatsProvider, MockRuntimeStatsProvider, User,
};
use crate::report::models::{CacheStats, CpuUsage, QueueStats, RamUsage, RuntimeStats};
use crate::InfoEngine;

/// What each mocked service answers. Defaults describe a healthy production app.
#[derive(Clone)]
pub struct Scenario {
    pub dev: bool,
    pub user: Option<User>,
    pub login: Result<String, ProviderError>,
    pub cache: Result<Option<CacheStats>, ProviderError>,
    pub queue: Result<Vec<QueueStats>, ProviderError>,
    pub modules: Result<Vec<String>, ProviderError>,
    /// Module whose version lookup fails.
    pub broken_module: Option<String>,
    pub runtime: Result<RuntimeStats, ProviderError>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            dev: false,
            user: Some(User { email: "admin@example.com".into(), admin: true }),
            login: Ok("https://login.example.com/?continue=x".into()),
            cache: Ok(Some(CacheStats { hits: 10, misses: 2, byte_hits: 64, items: 5, bytes: 640, oldest: 30 })),
            queue: Ok(vec![QueueStats {
                name: "default".into(),
                tasks: 3,
                oldest_eta: None,
                executed_1_minute: 12,
                in_flight: 1,
                enforced_rate: 5.0,
            }]),
            modules: Ok(vec!["default".into(), "worker".into()]),
            broken_module: None,
            runtime: Ok(RuntimeStats {
                cpu: CpuUsage { total: 0.5, rate_1m: 0.25, rate_10m: 0.125 },
                ram: RamUsage { current: 64.0, average_1m: 60.0, average_10m: 56.0 },
            }),
        }
    }
}

impl Scenario {
    pub fn engine(self) -> InfoEngine {
        let mut env = MockEnvironmentInfo::new();
        let dev = self.dev;
        env.expect_app_id().returning(|| "s~demo".into());
        env.expect_datacenter().returning(|| "us2".into());
        env.expect_default_version_hostname().returning(|| "demo.appspot.com".into());
        env.expect_instance_id().returning(|| "inst-1".into());
        env.expect_is_dev_app_server().returning(move || dev);
        env.expect_module_name().returning(|| "default".into());
        env.expect_server_software().returning(|| "Platform/1.0".into());
        env.expect_version_id().returning(|| "v1.42".into());
        env.expect_runtime_version().returning(|| "rustc 1.80.0".into());

        let mut identity = MockIdentityService::new();
        let user = self.user.clone();
        identity.expect_current_user().returning(move |_| user.clone());
        let login = self.login.clone();
        identity.expect_login_url().returning(move |_| login.clone());

        let mut cache = MockCacheStatsProvider::new();
        let cached = self.cache.clone();
        cache.expect_stats().returning(move || cached.clone());

        let mut taskqueue = MockQueueStatsProvider::new();
        let queue = self.queue.clone();
        taskqueue.expect_queue_stats().returning(move |_| queue.clone());

        let mut modules = MockModuleRegistry::new();
        let names = self.modules.clone();
        modules.expect_list().returning(move || names.clone());
        let broken = self.broken_module.clone();
        modules.expect_versions().returning(move |name| {
            if broken.as_deref() == Some(name) {
                return Err(ProviderError::Unavailable(format!("versions of '{}' unavailable", name)));
            }
            Ok(vec!["v1".into(), "v2".into()])
        });

        let mut runtime = MockRuntimeStatsProvider::new();
        let stats = self.runtime.clone();
        runtime.expect_stats().returning(move || stats.clone());

        InfoEngine {
            env: Arc::new(env),
            identity: Arc::new(identity),
            cache: Arc::new(cache),
            taskqueue: Arc::new(taskqueue),
            modules: Arc::new(modules),
            runtime: Arc::new(runtime),
        }
    }
}
