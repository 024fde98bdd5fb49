use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use anyhow::Result;
use crate::prober::GetRequest;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ProbeConfig {
    #[serde(default = "default_wait_timeout_secs")]
    pub wait_timeout_secs: u64,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_wait_timeout_secs() -> u64 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            wait_timeout_secs: default_wait_timeout_secs(),
            headers: BTreeMap::new(),
            log_level: default_log_level(),
        }
    }
}

impl ProbeConfig {
    /// Get the log level as a tracing::Level
    pub fn get_tracing_level(&self) -> Result<tracing::Level> {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Ok(tracing::Level::TRACE),
            "debug" => Ok(tracing::Level::DEBUG),
            "info" => Ok(tracing::Level::INFO),
            "warn" | "warning" => Ok(tracing::Level::WARN),
            "error" => Ok(tracing::Level::ERROR),
            _ => Err(anyhow::anyhow!("Invalid log level: {}. Valid levels are: trace, debug, info, warn, error", self.log_level))
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.wait_timeout_secs == 0 {
            return Err(anyhow::anyhow!("wait_timeout_secs must be at least 1"));
        }
        self.get_tracing_level().map(|_| ())
    }

    /// Build a request for `uri` carrying this config's timeout and headers.
    pub fn request(&self, uri: &str) -> GetRequest {
        let mut request = GetRequest::new(uri);
        request.wait_timeout = self.wait_timeout_secs;
        request.headers = self.headers.clone();
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProbeConfig::default();
        assert_eq!(config.wait_timeout_secs, 5);
        assert!(config.headers.is_empty());
        assert_eq!(config.get_tracing_level().unwrap(), tracing::Level::INFO);
    }

    fn parse(content: &str) -> Result<ProbeConfig> {
        let config: ProbeConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    #[test]
    fn test_json_fills_defaults() {
        let config = parse(r#"{"headers": {"Accept": "text/html"}}"#).unwrap();
        assert_eq!(config.wait_timeout_secs, 5);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.headers.get("Accept").map(String::as_str), Some("text/html"));
    }

    #[test]
    fn test_log_level_aliases() {
        let config = ProbeConfig { log_level: "WARNING".to_string(), ..Default::default() };
        assert_eq!(config.get_tracing_level().unwrap(), tracing::Level::WARN);

        let config = ProbeConfig { log_level: "loud".to_string(), ..Default::default() };
        assert!(config.get_tracing_level().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(parse(r#"{"wait_timeout_secs": 0}"#).is_err());
        assert!(parse(r#"{"log_level": "nope"}"#).is_err());
    }

    #[test]
    fn test_request_carries_timeout_and_headers() {
        let mut config = ProbeConfig { wait_timeout_secs: 2, ..Default::default() };
        config.headers.insert("X-Probe".to_string(), "1".to_string());

        let request = config.request("http://example.com/");
        assert_eq!(request.uri, "http://example.com/");
        assert_eq!(request.wait_timeout, 2);
        assert_eq!(request.headers, config.headers);
    }
}
