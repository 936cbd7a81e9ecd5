//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Port value is outside valid range (1-65535).
    #[error("invalid port '{value}': must be between 1 and 65535")]
    InvalidPort { value: String },

    /// Port string could not be parsed as a number.
    #[error("failed to parse port '{value}': {source}")]
    PortParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Bind address string could not be parsed.
    #[error("failed to parse bind address '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// An environment variable carried a value outside its accepted set.
    #[error("invalid value '{value}' for {var}: expected one of {expected}")]
    InvalidValue {
        var: &'static str,
        value: String,
        expected: &'static str,
    },

    /// Provider credentials are absent. Surfaced before any provider call is
    /// attempted, never degraded into a generic provider failure.
    #[error("missing search provider credentials: set {key_var} and {cx_var}")]
    MissingCredentials {
        key_var: &'static str,
        cx_var: &'static str,
    },

    /// Threshold or budget values that cannot express a valid scan.
    #[error("invalid configuration: {message}")]
    InvalidLimits { message: String },
}
