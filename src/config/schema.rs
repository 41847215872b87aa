//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files and
//! default every field, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};

/// Root configuration for the echo server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct EchoConfig {
    /// Listener configuration (port, environment).
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Request limits applied at the HTTP boundary.
    pub limits: LimitsConfig,

    /// What the auxiliary endpoints expose.
    pub exposure: ExposureConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Deployment environment; decides the bind interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Loopback only.
    Dev,
    /// All interfaces.
    #[default]
    Prod,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// TCP port (0 picks an ephemeral port).
    pub port: u16,

    pub environment: Environment,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            environment: Environment::Prod,
        }
    }
}

impl ListenerConfig {
    /// Bind address derived from the environment and port.
    pub fn bind_address(&self) -> String {
        match self.environment {
            Environment::Dev => format!("127.0.0.1:{}", self.port),
            Environment::Prod => format!("0.0.0.0:{}", self.port),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Request limits.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum request body size in bytes. Unset means no cap.
    pub max_body_bytes: Option<usize>,
}

/// Exposure of process details on the auxiliary endpoints.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ExposureConfig {
    /// Environment variables listed on `/env`. Empty lists every variable.
    pub env_vars: Vec<String>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Filter directives used when `RUST_LOG` is not set.
    pub log_filter: String,

    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "echo_server=debug,tower_http=debug".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config: EchoConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.port, 8080);
        assert_eq!(config.listener.environment, Environment::Prod);
        assert_eq!(config.timeouts.request_secs, 30);
        assert!(config.limits.max_body_bytes.is_none());
        assert!(config.exposure.env_vars.is_empty());
    }

    #[test]
    fn test_parse_full() {
        let config: EchoConfig = toml::from_str(
            r#"
            [listener]
            port = 9000
            environment = "dev"

            [limits]
            max_body_bytes = 1024

            [exposure]
            env_vars = ["HOME", "PATH"]

            [observability]
            log_format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.listener.bind_address(), "127.0.0.1:9000");
        assert_eq!(config.limits.max_body_bytes, Some(1024));
        assert_eq!(config.exposure.env_vars, vec!["HOME", "PATH"]);
        assert_eq!(config.observability.log_format, LogFormat::Json);
    }

    #[test]
    fn test_prod_binds_all_interfaces() {
        assert_eq!(ListenerConfig::default().bind_address(), "0.0.0.0:8080");
    }
}
