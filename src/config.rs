use std::env;
use std::sync::OnceLock;

use crate::error::ConfigError;

static CONFIG: OnceLock<Config> = OnceLock::new();

// Off unless asked for: dev mode skips the admin gate entirely.
const DEV_APPSERVER_DEFAULT: &str = "false";

// --- CONFIG AGGREGATOR ---

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub platform: PlatformConfig,
}

impl Config {
    /// Loads the process-wide config once; later calls return the same instance.
    pub fn init() -> Result<&'static Config, ConfigError> {
        if let Some(config) = CONFIG.get() {
            return Ok(config);
        }
        let config = Self::load()?;
        Ok(CONFIG.get_or_init(|| config))
    }

    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Ok(Self {
            server: ServerConfig::load()?,
            platform: PlatformConfig::load()?,
        })
    }
}

// --- MODULES ---

// SERVER
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl ServerConfig {
    fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            host:      get_env("SERVER_HOST", "127.0.0.1")?,
            port:      get_env("SERVER_PORT", "8080")?,
            log_level: get_env("APPINFO_LOG", "info")?,
        })
    }
}

// PLATFORM
// Values the hosting platform would normally inject. Locally they come from env.
#[derive(Debug, Clone)]
pub struct PlatformConfig {
    pub app_id: String,
    pub datacenter: String,
    pub default_version_hostname: String,
    pub instance_id: String,
    pub dev_server: bool,
    pub module_name: String,
    pub version_id: String,
    pub server_software: String,
    pub login_url: String,
    /// Raw registry list, e.g. `default=v1|v2;worker=v1`. Empty means "just this module".
    pub modules: String,
    pub queue_enforced_rate: f64,
}

impl PlatformConfig {
    fn load() -> Result<Self, ConfigError> {
        let default_software = format!("appinfo/{}", env!("CARGO_PKG_VERSION"));
        Ok(Self {
            app_id:                   get_env("APP_ID", "dev~appinfo")?,
            datacenter:               get_env("DATACENTER", "local")?,
            default_version_hostname: get_env("DEFAULT_VERSION_HOSTNAME", "localhost:8080")?,
            instance_id:              get_env("INSTANCE_ID", "local-instance")?,
            dev_server:               get_env("DEV_APPSERVER", DEV_APPSERVER_DEFAULT)?,
            module_name:              get_env("MODULE_NAME", "default")?,
            version_id:               get_env("VERSION_ID", "1")?,
            server_software:          get_env("SERVER_SOFTWARE", &default_software)?,
            login_url:                get_env("LOGIN_URL", "http://localhost:8080/_ah/login")?,
            modules:                  get_env("PLATFORM_MODULES", "")?,
            queue_enforced_rate:      get_env("QUEUE_ENFORCED_RATE", "5.0")?,
        })
    }
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            app_id: "dev~appinfo".to_string(),
            datacenter: "local".to_string(),
            default_version_hostname: "localhost:8080".to_string(),
            instance_id: "local-instance".to_string(),
            dev_server: false,
            module_name: "default".to_string(),
            version_id: "1".to_string(),
            server_software: format!("appinfo/{}", env!("CARGO_PKG_VERSION")),
            login_url: "http://localhost:8080/_ah/login".to_string(),
            modules: String::new(),
            queue_enforced_rate: 5.0,
        }
    }
}

// --- PRIVATE HELPER ---

fn get_env<T: std::str::FromStr>(key: &str, default: &str) -> Result<T, ConfigError> {
    let raw = env::var(key).unwrap_or_else(|_| default.to_string());
    parse_value(key, &raw)
}

fn parse_value<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        key: key.to_string(),
        value: raw.to_string(),
    })
}
