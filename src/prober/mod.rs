use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::future::Future;
use anyhow::Result;

pub mod http;
pub mod probe;

pub use http::ReqwestTransport;
pub use probe::HttpProbe;

/// Provider-defined description of the host running the probe.
pub type ServerInfo = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct GetRequest {
    pub uri: String,
    pub wait_timeout: u64,
    pub headers: BTreeMap<String, String>,
}

impl GetRequest {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            wait_timeout: 5,
            headers: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct GetResult {
    pub status_code: u16,
    pub reason: String,
    pub elapsed_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ProbeResult {
    pub get: GetResult,
    pub server: ServerInfo,
}

/// Status code and reason phrase of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub code: u16,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GetOutcome {
    Response(StatusLine),
    TransportFailure(String),
}

impl GetOutcome {
    /// Transport failures report as a synthetic 500 carrying the error text.
    pub const FAILURE_STATUS: u16 = 500;

    pub fn into_result(self, elapsed_ms: u64) -> GetResult {
        let (status_code, reason) = match self {
            GetOutcome::Response(line) => (line.code, line.reason),
            GetOutcome::TransportFailure(reason) => (Self::FAILURE_STATUS, reason),
        };
        GetResult {
            status_code,
            reason,
            elapsed_ms,
        }
    }
}

/// Performs the single GET behind a probe.
pub trait Transport {
    fn get(&self, request: &GetRequest) -> impl Future<Output = Result<StatusLine>> + Send;
}

pub trait CompatibilityChecker {
    fn is_compatible(&self) -> bool;
}

pub trait ServerInfoProvider {
    fn get_server_info(&self) -> ServerInfo;
}
