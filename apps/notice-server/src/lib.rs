use std::net::IpAddr;

use serde::{Deserialize, Serialize};

pub mod dto;
pub mod endpoint;
pub mod extractor;
pub mod metrics;
pub mod router;
pub mod serialize;
mod middleware;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    pub database_url: String,
    pub server_ip: Option<IpAddr>,
    pub server_port: Option<u16>,
    pub trace_json: Option<bool>,
    pub trace_level: Option<String>,
    pub sentry_dsn: Option<String>,
    pub sentry_environment: Option<String>,
    /// whether endpoint metrics are available
    pub enable_metrics: bool,
    /// whether the health endpoint is available
    pub enable_server_info: bool,
}
