//! Development-server backend: every platform service answered in-process.

pub mod environment;
pub mod identity;
pub mod registry;
pub mod runtime;
pub mod services;

pub use environment::StaticEnvironment;
pub use identity::HeaderIdentity;
pub use registry::ConfiguredModules;
pub use runtime::{ProcessRuntime, RollingWindow};
pub use services::{DevCache, DevTaskQueue};
