//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `AGENDA_*` environment variables.
//! The analyzer credential additionally falls back to `OPENAI_API_KEY`.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::time::Duration;

use crate::analyzer::AnalyzerConfig;
use crate::constants::{
    DEFAULT_ANALYZER_MODEL, DEFAULT_ANALYZER_TIMEOUT, DEFAULT_ANALYZER_URL,
    DEFAULT_EXCERPT_WORDS, DEFAULT_FETCH_CONCURRENCY, DEFAULT_FETCH_TIMEOUT, MAX_ANALYZER_TIMEOUT,
    MAX_FETCH_TIMEOUT,
};
use crate::evidence::CollectorConfig;

/// Default CORS origins (local frontend dev servers).
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:3000"];

/// Server configuration loaded from environment variables.
///
/// Built once at start-up and handed to the router state; nothing reads the
/// environment after that.
#[derive(Clone)]
pub struct Config {
    /// HTTP server port. Default: `8000`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Origins accepted by the CORS layer.
    pub allowed_origins: Vec<String>,

    /// Per-page fetch timeout. Default and maximum: 5s.
    pub fetch_timeout: Duration,

    /// Word budget for page excerpts. Default: `200`.
    pub excerpt_words: usize,

    /// Max in-flight page fetches per analysis. Default: `4`.
    pub fetch_concurrency: usize,

    /// Bearer credential for the external analyzer. `None` disables it.
    pub analyzer_api_key: Option<String>,

    /// Chat-completion endpoint of the external analyzer.
    pub analyzer_url: String,

    /// Model name sent to the external analyzer.
    pub analyzer_model: String,

    /// Timeout for the analyzer call. Default and maximum: 45s.
    pub analyzer_timeout: Duration,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("bind_addr", &self.bind_addr)
            .field("allowed_origins", &self.allowed_origins)
            .field("fetch_timeout", &self.fetch_timeout)
            .field("excerpt_words", &self.excerpt_words)
            .field("fetch_concurrency", &self.fetch_concurrency)
            .field(
                "analyzer_api_key",
                &self.analyzer_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("analyzer_url", &self.analyzer_url)
            .field("analyzer_model", &self.analyzer_model)
            .field("analyzer_timeout", &self.analyzer_timeout)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8000,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|o| o.to_string())
                .collect(),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            excerpt_words: DEFAULT_EXCERPT_WORDS,
            fetch_concurrency: DEFAULT_FETCH_CONCURRENCY,
            analyzer_api_key: None,
            analyzer_url: DEFAULT_ANALYZER_URL.to_string(),
            analyzer_model: DEFAULT_ANALYZER_MODEL.to_string(),
            analyzer_timeout: DEFAULT_ANALYZER_TIMEOUT,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "AGENDA_PORT";
    const ENV_BIND_ADDR: &'static str = "AGENDA_BIND_ADDR";
    const ENV_ALLOWED_ORIGINS: &'static str = "AGENDA_ALLOWED_ORIGINS";
    const ENV_FETCH_TIMEOUT_SECS: &'static str = "AGENDA_FETCH_TIMEOUT_SECS";
    const ENV_EXCERPT_WORDS: &'static str = "AGENDA_EXCERPT_WORDS";
    const ENV_FETCH_CONCURRENCY: &'static str = "AGENDA_FETCH_CONCURRENCY";
    const ENV_ANALYZER_API_KEY: &'static str = "AGENDA_ANALYZER_API_KEY";
    const ENV_OPENAI_API_KEY: &'static str = "OPENAI_API_KEY";
    const ENV_ANALYZER_URL: &'static str = "AGENDA_ANALYZER_URL";
    const ENV_ANALYZER_MODEL: &'static str = "AGENDA_ANALYZER_MODEL";
    const ENV_ANALYZER_TIMEOUT_SECS: &'static str = "AGENDA_ANALYZER_TIMEOUT_SECS";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let allowed_origins =
            Self::parse_list_from_env(Self::ENV_ALLOWED_ORIGINS).unwrap_or(defaults.allowed_origins);
        let fetch_timeout =
            Self::parse_secs_from_env(Self::ENV_FETCH_TIMEOUT_SECS, defaults.fetch_timeout)?;
        let excerpt_words =
            Self::parse_usize_from_env(Self::ENV_EXCERPT_WORDS, defaults.excerpt_words)?;
        let fetch_concurrency =
            Self::parse_usize_from_env(Self::ENV_FETCH_CONCURRENCY, defaults.fetch_concurrency)?;
        let analyzer_api_key = Self::parse_optional_string_from_env(Self::ENV_ANALYZER_API_KEY)
            .or_else(|| Self::parse_optional_string_from_env(Self::ENV_OPENAI_API_KEY));
        let analyzer_url = Self::parse_optional_string_from_env(Self::ENV_ANALYZER_URL)
            .unwrap_or(defaults.analyzer_url);
        let analyzer_model = Self::parse_optional_string_from_env(Self::ENV_ANALYZER_MODEL)
            .unwrap_or(defaults.analyzer_model);
        let analyzer_timeout =
            Self::parse_secs_from_env(Self::ENV_ANALYZER_TIMEOUT_SECS, defaults.analyzer_timeout)?;

        Ok(Self {
            port,
            bind_addr,
            allowed_origins,
            fetch_timeout,
            excerpt_words,
            fetch_concurrency,
            analyzer_api_key,
            analyzer_url,
            analyzer_model,
            analyzer_timeout,
        })
    }

    /// Validates ranges and the analyzer endpoint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fetch_timeout.is_zero() || self.fetch_timeout > MAX_FETCH_TIMEOUT {
            return Err(ConfigError::OutOfRange {
                name: Self::ENV_FETCH_TIMEOUT_SECS,
                reason: format!(
                    "must be between 1 and {} seconds",
                    MAX_FETCH_TIMEOUT.as_secs()
                ),
            });
        }

        if self.analyzer_timeout.is_zero() || self.analyzer_timeout > MAX_ANALYZER_TIMEOUT {
            return Err(ConfigError::OutOfRange {
                name: Self::ENV_ANALYZER_TIMEOUT_SECS,
                reason: format!(
                    "must be between 1 and {} seconds",
                    MAX_ANALYZER_TIMEOUT.as_secs()
                ),
            });
        }

        if self.excerpt_words == 0 {
            return Err(ConfigError::OutOfRange {
                name: Self::ENV_EXCERPT_WORDS,
                reason: "must be at least 1".to_string(),
            });
        }

        if self.fetch_concurrency == 0 {
            return Err(ConfigError::OutOfRange {
                name: Self::ENV_FETCH_CONCURRENCY,
                reason: "must be at least 1".to_string(),
            });
        }

        match url::Url::parse(&self.analyzer_url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
            _ => Err(ConfigError::InvalidAnalyzerUrl {
                value: self.analyzer_url.clone(),
            }),
        }
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    /// Settings for the evidence collector.
    pub fn collector_config(&self) -> CollectorConfig {
        CollectorConfig {
            fetch_timeout: self.fetch_timeout,
            excerpt_words: self.excerpt_words,
            concurrency: self.fetch_concurrency,
        }
    }

    /// Settings for the external analyzer.
    pub fn analyzer_config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            api_key: self.analyzer_api_key.clone(),
            endpoint: self.analyzer_url.clone(),
            model: self.analyzer_model.clone(),
            timeout: self.analyzer_timeout,
        }
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_list_from_env(var_name: &str) -> Option<Vec<String>> {
        let raw = Self::parse_optional_string_from_env(var_name)?;
        let items: Vec<String> = raw
            .split(',')
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect();
        (!items.is_empty()).then_some(items)
    }

    fn parse_usize_from_env(name: &'static str, default: usize) -> Result<usize, ConfigError> {
        match Self::parse_optional_string_from_env(name) {
            Some(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidNumber {
                    name,
                    value,
                    source: e,
                }),
            None => Ok(default),
        }
    }

    fn parse_secs_from_env(name: &'static str, default: Duration) -> Result<Duration, ConfigError> {
        match Self::parse_optional_string_from_env(name) {
            Some(value) => value
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|e| ConfigError::InvalidNumber {
                    name,
                    value,
                    source: e,
                }),
            None => Ok(default),
        }
    }
}
