use std::net::SocketAddr;
use std::sync::Arc;

use appinfo::error::ProviderError;
use appinfo::platform::local::HeaderIdentity;
use appinfo::platform::{
    CacheStatsProvider, EnvironmentInfo, ModuleRegistry, QueueStatsProvider, RuntimeStatsProvider,
};
use appinfo::report::models::{CacheStats, CpuUsage, QueueStats, RamUsage, RuntimeStats};
use appinfo::InfoEngine;
use async_trait::async_trait;
use tokio::net::TcpListener;

pub const LOGIN_PAGE: &str = "https://login.example.com/auth";

// --- FIXED-VALUE PLATFORM ---

pub struct FixedEnv {
    pub dev: bool,
}

impl EnvironmentInfo for FixedEnv {
    fn app_id(&self) -> String { "s~fixture".into() }
    fn datacenter(&self) -> String { "us1".into() }
    fn default_version_hostname(&self) -> String { "fixture.example.com".into() }
    fn instance_id(&self) -> String { "instance-7".into() }
    fn is_dev_app_server(&self) -> bool { self.dev }
    fn module_name(&self) -> String { "default".into() }
    fn server_software(&self) -> String { "Fixture/2.0".into() }
    fn version_id(&self) -> String { "v2.1".into() }
    fn runtime_version(&self) -> String { "rustc 1.80.0".into() }
}

pub struct FixedCache(pub Result<Option<CacheStats>, ProviderError>);

#[async_trait]
impl CacheStatsProvider for FixedCache {
    async fn stats(&self) -> Result<Option<CacheStats>, ProviderError> {
        self.0.clone()
    }
}

pub struct FixedQueue(pub Result<Vec<QueueStats>, ProviderError>);

#[async_trait]
impl QueueStatsProvider for FixedQueue {
    async fn queue_stats(&self, _names: &[String]) -> Result<Vec<QueueStats>, ProviderError> {
        self.0.clone()
    }
}

pub struct FixedModules {
    pub list: Result<Vec<String>, ProviderError>,
    pub versions: Result<Vec<String>, ProviderError>,
}

#[async_trait]
impl ModuleRegistry for FixedModules {
    async fn list(&self) -> Result<Vec<String>, ProviderError> {
        self.list.clone()
    }

    async fn versions(&self, _module: &str) -> Result<Vec<String>, ProviderError> {
        self.versions.clone()
    }
}

pub struct FixedRuntime(pub Result<RuntimeStats, ProviderError>);

#[async_trait]
impl RuntimeStatsProvider for FixedRuntime {
    async fn stats(&self) -> Result<RuntimeStats, ProviderError> {
        self.0.clone()
    }
}

/// Knobs for one test platform. Defaults: production, healthy services.
pub struct Fixture {
    pub dev: bool,
    pub cache: Result<Option<CacheStats>, ProviderError>,
    pub queue: Result<Vec<QueueStats>, ProviderError>,
    pub modules: Result<Vec<String>, ProviderError>,
    pub versions: Result<Vec<String>, ProviderError>,
    pub runtime: Result<RuntimeStats, ProviderError>,
}

impl Default for Fixture {
    fn default() -> Self {
        Self {
            dev: false,
            cache: Ok(Some(CacheStats { hits: 10, misses: 2, byte_hits: 300, items: 6, bytes: 900, oldest: 42 })),
            queue: Ok(vec![QueueStats {
                name: "default".into(),
                tasks: 3,
                oldest_eta: None,
                executed_1_minute: 9,
                in_flight: 2,
                enforced_rate: 4.5,
            }]),
            modules: Ok(vec!["default".into()]),
            versions: Ok(vec!["v1".into(), "v2".into()]),
            runtime: Ok(RuntimeStats {
                cpu: CpuUsage { total: 1.5, rate_1m: 1.25, rate_10m: 0.5 },
                ram: RamUsage { current: 128.0, average_1m: 120.5, average_10m: 100.25 },
            }),
        }
    }
}

impl Fixture {
    pub fn engine(self) -> InfoEngine {
        InfoEngine {
            env: Arc::new(FixedEnv { dev: self.dev }),
            identity: Arc::new(HeaderIdentity::new(LOGIN_PAGE)),
            cache: Arc::new(FixedCache(self.cache)),
            taskqueue: Arc::new(FixedQueue(self.queue)),
            modules: Arc::new(FixedModules { list: self.modules, versions: self.versions }),
            runtime: Arc::new(FixedRuntime(self.runtime)),
        }
    }
}

// --- SERVER ---

/// Spawns the report server on an ephemeral port and returns its address.
pub async fn spawn_server(engine: InfoEngine) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        appinfo::server::serve(listener, engine).await.unwrap();
    });
    addr
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

pub fn unavailable(msg: &str) -> ProviderError {
    ProviderError::Unavailable(msg.to_string())
}
