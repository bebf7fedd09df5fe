//! Structured logging setup.
//!
//! `RUST_LOG` wins when it is set; otherwise the filter comes from the
//! configured `log_level`.  Output goes to stderr so the form's own output on
//! stdout is not interleaved with log lines.

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Error type for logging initialisation.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The configured filter string is not a valid `EnvFilter` directive.
    #[error("invalid log level/filter '{value}': {source}")]
    Filter {
        value: String,
        #[source]
        source: ParseError,
    },

    /// A global subscriber was already installed.
    #[error("failed to install log subscriber: {0}")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Builds the filter: `RUST_LOG` if present and valid, else `fallback`.
///
/// # Errors
///
/// Returns [`LoggingError::Filter`] when `fallback` is needed and invalid.
pub fn build_filter(fallback: &str) -> Result<EnvFilter, LoggingError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(fallback).map_err(|source| LoggingError::Filter {
            value: fallback.to_string(),
            source,
        }),
    }
}

/// Installs the global `tracing` subscriber.
///
/// # Errors
///
/// See [`build_filter`]; also fails if a subscriber is already set.
pub fn init(log_level: &str) -> Result<(), LoggingError> {
    let filter = build_filter(log_level)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(LoggingError::Subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_accepts_plain_level() {
        assert!(build_filter("debug").is_ok());
    }

    #[test]
    fn test_build_filter_accepts_directive() {
        assert!(build_filter("seating_desk=debug,seating_core=trace").is_ok());
    }

    #[test]
    fn test_build_filter_rejects_garbage_when_rust_log_unset() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let err = build_filter("seating_desk=loud").unwrap_err();
        assert!(err.to_string().contains("seating_desk=loud"));
    }
}
