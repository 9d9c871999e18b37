//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the host process.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct HostConfig {
    /// Deployment environment name (e.g. "dev", "prod").
    pub env: Env,

    /// Logging settings.
    pub log: LogConfig,
}

/// Environment name wrapper so the default is "dev" rather than "".
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Env(pub String);

impl Default for Env {
    fn default() -> Self {
        Self("dev".to_string())
    }
}

impl std::fmt::Display for Env {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log level filter (trace, debug, info, warn, error), or any
    /// tracing-subscriber filter directive.
    pub level: String,

    /// Emit log lines to the console.
    pub console: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
            console: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HostConfig::default();
        assert_eq!(config.env.0, "dev");
        assert_eq!(config.log.level, "debug");
        assert!(config.log.console);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: HostConfig = toml::from_str("env = \"prod\"").unwrap();
        assert_eq!(config.env.0, "prod");
        assert_eq!(config.log.level, "debug");
        assert!(config.log.console);
    }
}
