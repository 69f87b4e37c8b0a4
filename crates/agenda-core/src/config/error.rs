//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Port value is outside valid range (1-65535).
    #[error("invalid port '{value}': must be between 1 and 65535")]
    InvalidPort {
        /// Original string value.
        value: String,
    },

    /// Port string could not be parsed as a number.
    #[error("failed to parse port '{value}': {source}")]
    PortParseError {
        /// Original string value.
        value: String,
        #[source]
        /// Parse error.
        source: std::num::ParseIntError,
    },

    /// Bind address string could not be parsed.
    #[error("failed to parse bind address '{value}': {source}")]
    InvalidBindAddr {
        /// Original string value.
        value: String,
        #[source]
        /// Parse error.
        source: std::net::AddrParseError,
    },

    /// A numeric setting could not be parsed.
    #[error("failed to parse {name}='{value}': {source}")]
    InvalidNumber {
        /// Environment variable name.
        name: &'static str,
        /// Original string value.
        value: String,
        #[source]
        /// Parse error.
        source: std::num::ParseIntError,
    },

    /// A numeric setting is outside its accepted range.
    #[error("{name} out of range: {reason}")]
    OutOfRange {
        /// Setting name.
        name: &'static str,
        /// Human-readable constraint.
        reason: String,
    },

    /// The analyzer endpoint is not an absolute http(s) URL.
    #[error("invalid analyzer url '{value}'")]
    InvalidAnalyzerUrl {
        /// Original string value.
        value: String,
    },
}
