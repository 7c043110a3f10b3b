use crate::config::PlatformConfig;
use crate::platform::EnvironmentInfo;

/// Compiler that built this binary, captured by `build.rs`.
pub const RUNTIME_VERSION: &str = env!("APPINFO_RUSTC_VERSION");

/// Environment facts fixed at startup from [`PlatformConfig`].
#[derive(Debug, Clone)]
pub struct StaticEnvironment {
    config: PlatformConfig,
}

impl StaticEnvironment {
    pub fn new(config: PlatformConfig) -> Self {
        Self { config }
    }
}

impl EnvironmentInfo for StaticEnvironment {
    fn app_id(&self) -> String {
        self.config.app_id.clone()
    }

    fn datacenter(&self) -> String {
        self.config.datacenter.clone()
    }

    fn default_version_hostname(&self) -> String {
        self.config.default_version_hostname.clone()
    }

    fn instance_id(&self) -> String {
        self.config.instance_id.clone()
    }

    fn is_dev_app_server(&self) -> bool {
        self.config.dev_server
    }

    fn module_name(&self) -> String {
        self.config.module_name.clone()
    }

    fn server_software(&self) -> String {
        self.config.server_software.clone()
    }

    fn version_id(&self) -> String {
        self.config.version_id.clone()
    }

    fn runtime_version(&self) -> String {
        RUNTIME_VERSION.to_string()
    }
}
