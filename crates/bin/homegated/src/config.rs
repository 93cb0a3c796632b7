//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `homegate.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values. The endpoint tables are validated here and
//! turned into the immutable registry the dispatcher reads.

use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use homegate_domain::registry::{EndpointRegistry, GROUP_NAME, Target};

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Upstream proxy settings.
    pub proxy: ProxyConfig,
    /// Endpoint name → target tables.
    pub endpoints: EndpointsConfig,
    /// Integration toggles.
    pub integrations: IntegrationsConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Upstream HTTP client configuration.
///
/// Both timeouts must be finite and non-zero so an unresponsive device
/// always classifies as unreachable.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// Connection timeout in seconds.
    pub connect_timeout_secs: u64,
}

/// The four endpoint tables, exactly as written in the file.
///
/// Light and switch values are URLs; thermometer values are URLs or the
/// literal `"local"` for the on-board sensor.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EndpointsConfig {
    /// Dimmable lights.
    pub dimmable: HashMap<String, String>,
    /// Non-dimmable lights.
    pub nondimmable: HashMap<String, String>,
    /// Switches.
    pub switches: HashMap<String, String>,
    /// Thermometers.
    pub thermometers: HashMap<String, String>,
}

/// Per-integration toggles.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct IntegrationsConfig {
    /// Spawn simulated upstream devices and register them, so the gateway
    /// runs without any hardware.
    pub virtual_enabled: bool,
}

impl Config {
    /// Load configuration from `homegate.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("homegate.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("HOMEGATE_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("HOMEGATE_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("HOMEGATE_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("HOMEGATE_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.proxy.timeout_secs == 0 || self.proxy.connect_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "proxy timeouts must be non-zero".to_string(),
            ));
        }

        let urls = [
            ("dimmable", &self.endpoints.dimmable),
            ("nondimmable", &self.endpoints.nondimmable),
            ("switches", &self.endpoints.switches),
        ];
        for (category, table) in urls {
            for (name, url) in table {
                if name == GROUP_NAME {
                    return Err(ConfigError::Validation(format!(
                        "endpoint name '{GROUP_NAME}' in [endpoints.{category}] is reserved for group operations"
                    )));
                }
                check_url(category, name, url)?;
            }
        }
        for (name, value) in &self.endpoints.thermometers {
            if !value.eq_ignore_ascii_case("local") {
                check_url("thermometers", name, value)?;
            }
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Whole-request timeout for upstream calls.
    #[must_use]
    pub fn proxy_timeout(&self) -> Duration {
        Duration::from_secs(self.proxy.timeout_secs)
    }

    /// Connection timeout for upstream calls.
    #[must_use]
    pub fn proxy_connect_timeout(&self) -> Duration {
        Duration::from_secs(self.proxy.connect_timeout_secs)
    }

    /// Build the immutable endpoint registry from the endpoint tables.
    #[must_use]
    pub fn registry(&self) -> EndpointRegistry {
        let thermometers = self
            .endpoints
            .thermometers
            .iter()
            .map(|(name, value)| (name.clone(), Target::parse(value)))
            .collect();
        EndpointRegistry::new(
            self.endpoints.dimmable.clone(),
            self.endpoints.nondimmable.clone(),
            self.endpoints.switches.clone(),
            thermometers,
        )
    }
}

fn check_url(category: &str, name: &str, url: &str) -> Result<(), ConfigError> {
    Url::parse(url).map_err(|err| {
        ConfigError::Validation(format!(
            "invalid URL for [endpoints.{category}] {name}: {err}"
        ))
    })?;
    Ok(())
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "homegated=info,homegate=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 5,
            connect_timeout_secs: 2,
        }
    }
}

impl Default for IntegrationsConfig {
    fn default() -> Self {
        Self {
            virtual_enabled: false,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
