//! Platform collaborators: the services the report is gathered from.
//!
//! Each concern sits behind its own trait so the handler can be driven by the
//! real platform, by the [`local`] development backend, or by test doubles.
//! The async traits are annotated with `#[cfg_attr(test, mockall::automock)]`.

pub mod local;
pub mod request;
#[cfg(test)]
pub(crate) mod testing;

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::report::models::{CacheStats, QueueStats, RuntimeStats};
pub use request::RequestContext;

/// An authenticated platform user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub email: String,
    pub admin: bool,
}

/// Read-only facts about the running instance.
#[cfg_attr(test, mockall::automock)]
pub trait EnvironmentInfo: Send + Sync {
    fn app_id(&self) -> String;
    fn datacenter(&self) -> String;
    fn default_version_hostname(&self) -> String;
    fn instance_id(&self) -> String;
    /// True when running on a local development server.
    fn is_dev_app_server(&self) -> bool;
    fn module_name(&self) -> String;
    fn server_software(&self) -> String;
    fn version_id(&self) -> String;
    fn runtime_version(&self) -> String;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// The signed-in caller, if any.
    fn current_user(&self, request: &RequestContext) -> Option<User>;

    /// URL of the login page that sends the user back to `dest` afterwards.
    async fn login_url(&self, dest: &str) -> Result<String, ProviderError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheStatsProvider: Send + Sync {
    /// `Ok(None)` means the cache has no statistics yet, which is not a failure.
    async fn stats(&self) -> Result<Option<CacheStats>, ProviderError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QueueStatsProvider: Send + Sync {
    /// One entry per requested queue, in request order.
    async fn queue_stats(&self, names: &[String]) -> Result<Vec<QueueStats>, ProviderError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModuleRegistry: Send + Sync {
    async fn list(&self) -> Result<Vec<String>, ProviderError>;

    async fn versions(&self, module: &str) -> Result<Vec<String>, ProviderError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RuntimeStatsProvider: Send + Sync {
    async fn stats(&self) -> Result<RuntimeStats, ProviderError>;
}
