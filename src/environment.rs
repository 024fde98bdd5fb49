// Collaborators describing the host the probe runs on.

use serde_json::json;
use std::env::consts;

use crate::prober::{CompatibilityChecker, ServerInfo, ServerInfoProvider};

const SUPPORTED_OS: &[&str] = &["linux", "macos", "windows"];

#[derive(Debug, Clone, Default)]
pub struct HostEnvironment;

impl CompatibilityChecker for HostEnvironment {
    fn is_compatible(&self) -> bool {
        SUPPORTED_OS.contains(&consts::OS)
    }
}

impl ServerInfoProvider for HostEnvironment {
    fn get_server_info(&self) -> ServerInfo {
        let cpus = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);

        let mut info = ServerInfo::new();
        info.insert("os".to_string(), json!(consts::OS));
        info.insert("arch".to_string(), json!(consts::ARCH));
        info.insert("family".to_string(), json!(consts::FAMILY));
        info.insert("pid".to_string(), json!(std::process::id()));
        info.insert("cpus".to_string(), json!(cpus));
        info.insert("probe_version".to_string(), json!(env!("CARGO_PKG_VERSION")));
        info
    }
}
