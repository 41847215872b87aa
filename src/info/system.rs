//! Host and application metadata served on `/system`.

use serde::{Deserialize, Serialize};

/// Kernel release file on Linux hosts.
const OS_RELEASE_PATH: &str = "/proc/sys/kernel/osrelease";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInfo {
    pub os: OsInfo,
    pub app: AppInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsInfo {
    /// Kernel release, or `"unknown"` when the host does not expose one.
    pub release: String,
    pub name: String,
    pub arch: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
}

impl SystemInfo {
    /// Collect metadata for the running host and this build.
    pub fn collect() -> Self {
        let release = std::fs::read_to_string(OS_RELEASE_PATH)
            .map(|text| text.trim().to_string())
            .ok()
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| "unknown".to_string());

        Self {
            os: OsInfo {
                release,
                name: std::env::consts::OS.to_string(),
                arch: std::env::consts::ARCH.to_string(),
            },
            app: AppInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect() {
        let info = SystemInfo::collect();
        assert_eq!(info.app.name, "echo-server");
        assert_eq!(info.app.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(info.os.name, std::env::consts::OS);
        assert!(!info.os.release.is_empty());
    }

    #[test]
    fn test_shape() {
        let value = serde_json::to_value(SystemInfo::collect()).unwrap();
        assert!(value["os"]["release"].is_string());
        assert!(value["app"]["name"].is_string());
        assert!(value["app"]["version"].is_string());
    }
}
