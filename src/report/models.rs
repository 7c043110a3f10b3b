use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::utils_time::zero_as_none;

/// Everything `GET /_ah/aeinfo/` reports. Built per request, never cached.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Snapshot {
    #[serde(rename = "appID")]
    pub app_id: String,
    pub datacenter: String,
    #[serde(rename = "defaultVersionHostname")]
    pub default_version_hostname: String,
    #[serde(rename = "instanceID")]
    pub instance_id: String,
    #[serde(rename = "isDevAppServer")]
    pub is_dev_app_server: bool,
    #[serde(rename = "moduleName")]
    pub module_name: String,
    #[serde(rename = "serverSoftware")]
    pub server_software: String,
    #[serde(rename = "versionID")]
    pub version_id: String,
    #[serde(rename = "serverTime")]
    pub server_time: DateTime<Utc>,
    // Key kept for wire compatibility with existing consumers.
    #[serde(rename = "goVersion")]
    pub runtime_version: String,
    pub cpu: CpuUsage,
    pub ram: RamUsage,
    pub modules: Vec<ModuleInfo>,
    pub memcache: CacheStats,
    pub taskqueue: QueueStats,
    pub caller: CallerInfo,
}

/// Normalized CPU consumption rate, in cores.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct CpuUsage {
    pub total: f64,
    #[serde(rename = "rate1M")]
    pub rate_1m: f64,
    #[serde(rename = "rate10M")]
    pub rate_10m: f64,
}

/// Memory used by the instance, in megabytes.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct RamUsage {
    pub current: f64,
    #[serde(rename = "average1M")]
    pub average_1m: f64,
    #[serde(rename = "average10M")]
    pub average_10m: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RuntimeStats {
    pub cpu: CpuUsage,
    pub ram: RamUsage,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ModuleInfo {
    pub name: String,
    pub versions: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    #[serde(rename = "byteHits")]
    pub byte_hits: u64, // bytes transferred for gets
    pub items: u64,
    pub bytes: u64,
    pub oldest: i64, // seconds since the oldest item was accessed
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct QueueStats {
    pub name: String,
    pub tasks: i64, // approximate
    #[serde(rename = "oldestETA", with = "zero_as_none")]
    pub oldest_eta: Option<DateTime<Utc>>,
    #[serde(rename = "executed1Minute")]
    pub executed_1_minute: i64,
    #[serde(rename = "inFlight")]
    pub in_flight: i64,
    #[serde(rename = "enforcedRate")]
    pub enforced_rate: f64, // tasks per second
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CallerInfo {
    #[serde(rename = "remoteAddr")]
    pub remote_addr: String,
    #[serde(rename = "userAgent")]
    pub user_agent: String,
    pub country: String,
    pub region: String,
    pub city: String,
    #[serde(rename = "cityLatLong")]
    pub city_lat_long: String,
    pub email: String,
}
