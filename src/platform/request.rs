use std::net::SocketAddr;

use axum::http::{header, HeaderMap, Uri};

// Injected by the platform's edge infrastructure.
pub const HEADER_COUNTRY: &str = "x-appengine-country";
pub const HEADER_REGION: &str = "x-appengine-region";
pub const HEADER_CITY: &str = "x-appengine-city";
pub const HEADER_CITY_LAT_LONG: &str = "x-appengine-citylatlong";

/// The parts of an inbound request the gate and the aggregator read.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub uri: Uri,
    pub remote_addr: Option<SocketAddr>,
    pub headers: HeaderMap,
}

impl RequestContext {
    pub fn new(uri: Uri, remote_addr: Option<SocketAddr>, headers: HeaderMap) -> Self {
        Self { uri, remote_addr, headers }
    }

    /// Header value as a string, empty when missing or not valid UTF-8.
    pub fn header(&self, name: &str) -> String {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    pub fn user_agent(&self) -> String {
        self.header(header::USER_AGENT.as_str())
    }

    pub fn remote_addr(&self) -> String {
        self.remote_addr.map(|a| a.to_string()).unwrap_or_default()
    }

    /// Path plus query, the post-login return target.
    pub fn return_path(&self) -> String {
        self.uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| self.uri.path().to_string())
    }
}
