use config::{Config, ConfigError, Environment, File, Map};
use serde::Deserialize;

use crate::domain::access_key::DEFAULT_KEY_NAME;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub store: StoreConfig,
    pub verify: VerifyConfig,
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Backend holding the key record
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// `in_memory` or `redis`
    pub backend: String,
    pub redis_url: Option<String>,
    pub key_prefix: Option<String>,
    /// Name the current key is stored under
    pub key_name: String,
}

/// Behaviour of the verification endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VerifyConfig {
    /// Where holders of an expired key are sent to obtain a new one
    pub redirect_url: String,
    /// Answer expired keys with a redirect instead of a JSON body
    pub redirect_on_expired: bool,
}

/// Prometheus metrics configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub enabled: bool,
    pub path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: "in_memory".to_string(),
            redis_url: None,
            key_prefix: None,
            key_name: DEFAULT_KEY_NAME.to_string(),
        }
    }
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            redirect_url: "https://linkvertise.com/your-first-step".to_string(),
            redirect_on_expired: true,
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "/metrics".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads config files, then `APP__`-prefixed environment variables
    ///
    /// Any invalid value is an error; nothing falls back to defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_env(None)
    }

    /// Same as `load`, reading variables from `env` instead of the process
    fn load_with_env(env: Option<Map<String, String>>) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.store.backend, "in_memory");
        assert_eq!(config.store.key_name, "current_key");
        assert!(config.verify.redirect_on_expired);
        assert!(config.metrics.enabled);
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let config: AppConfig = serde_json::from_value(serde_json::json!({
            "server": { "port": 9000 },
            "store": { "backend": "redis", "redis_url": "redis://cache:6379" },
            "logging": { "format": "json" }
        }))
        .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.store.backend, "redis");
        assert_eq!(config.store.redis_url.as_deref(), Some("redis://cache:6379"));
        assert_eq!(config.store.key_name, "current_key");
        assert!(matches!(config.logging.format, LogFormat::Json));
        assert_eq!(config.logging.level, "info");
    }

    fn env(vars: &[(&str, &str)]) -> Option<Map<String, String>> {
        Some(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_load_from_environment() {
        let config = AppConfig::load_with_env(env(&[
            ("APP__STORE__BACKEND", "redis"),
            ("APP__STORE__REDIS_URL", "redis://cache:6379"),
            ("APP__SERVER__PORT", "9090"),
        ]))
        .unwrap();

        assert_eq!(config.store.backend, "redis");
        assert_eq!(config.store.redis_url.as_deref(), Some("redis://cache:6379"));
        assert_eq!(config.server.port, 9090);
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        let result = AppConfig::load_with_env(env(&[
            ("APP__STORE__BACKEND", "redis"),
            ("APP__STORE__REDIS_URL", "redis://cache:6379"),
            ("APP__SERVER__PORT", "80800"),
        ]));

        let err = result.unwrap_err();
        assert!(err.to_string().contains("port"), "unexpected error: {}", err);
    }
}
