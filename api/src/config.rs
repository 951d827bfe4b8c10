//! Configuration

use std::{fmt, net::SocketAddr, time::Duration};

use config::{builder::DefaultState, Config, ConfigBuilder};
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Server config
    pub server: ServerConfig,
    /// Upstream news provider config
    pub provider: ProviderConfig,
    /// CORS config
    pub cors: CorsConfig,
    /// Trace configuration
    pub trace: TraceConfig,
}

/// Application configuration error
#[derive(Debug, thiserror::Error)]
pub enum AppConfigError {
    /// Invalid server host configuration
    #[error("invalid server address")]
    InvalidServerHost(#[from] std::net::AddrParseError),
    /// Missing or malformed configuration values
    #[error("invalid configuration: {0}")]
    Invalid(#[from] config::ConfigError),
}

impl AppConfig {
    /// Loads a configuration from the environment
    ///
    /// Every key can be set with an `APP_` variable, e.g. `APP_PROVIDER_KEY`.
    pub fn load() -> Result<Self, AppConfigError> {
        let config = Self::defaults()?
            .add_source(
                config::Environment::with_prefix("APP")
                    .try_parsing(false)
                    .separator("_")
                    .list_separator(" "),
            )
            .build()?;

        Ok(config.try_deserialize::<AppConfig>()?)
    }

    /// Returns a builder preloaded with the default values
    ///
    /// The provider key has no default.
    pub(crate) fn defaults() -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
        Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("provider.url", "https://newsapi.org")?
            .set_default("provider.timeout", 10)?
            .set_default("cors.origin", "*")?
            .set_default("trace.stdout", true)?
            .set_default("trace.filter", "info")
    }
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Host
    pub host: String,
    /// Port
    pub port: u16,
}

impl ServerConfig {
    /// Returns the server [SocketAddr]
    pub fn addr(&self) -> Result<SocketAddr, AppConfigError> {
        let addr_str = self.host.to_string() + ":" + self.port.to_string().as_str();
        addr_str.parse::<SocketAddr>().map_err(|err| err.into())
    }
}

/// Upstream provider configuration
#[derive(Deserialize, Clone)]
pub struct ProviderConfig {
    /// Base URL
    pub url: String,
    /// API key, sent upstream only
    pub key: String,
    /// Request timeout in seconds
    pub timeout: u64,
}

impl ProviderConfig {
    /// Returns the upstream request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

// NB: the key must never end up in the logs
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("url", &self.url)
            .field("key", &"***")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// CORS configuration
#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    /// Allowed origin (`*` for any)
    pub origin: String,
}

/// Trace configuration
#[derive(Debug, Deserialize, Clone)]
pub struct TraceConfig {
    /// Export traces to stdout
    pub stdout: bool,
    /// Trace filter
    pub filter: String,
}
