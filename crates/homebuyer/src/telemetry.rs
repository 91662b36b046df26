//! Structured logging for the estimator.
//!
//! Events are written to stderr, so the `estimate` command can log while its
//! report stays the only thing on stdout.

use crate::config::TelemetryConfig;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log filter `{value}`")]
    EnvFilter {
        value: String,
        #[source]
        source: ParseError,
    },
    #[error("tracing subscriber could not be installed")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Chooses the event filter.
///
/// A non-empty, valid `RUST_LOG` wins; otherwise the configured
/// `APP_LOG_LEVEL` directives are used and must parse.
pub fn env_filter(
    rust_log: Option<&str>,
    config: &TelemetryConfig,
) -> Result<EnvFilter, TelemetryError> {
    if let Some(filter) = rust_log
        .map(str::trim)
        .filter(|directives| !directives.is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
    {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.log_level).map_err(|source| TelemetryError::EnvFilter {
        value: config.log_level.clone(),
        source,
    })
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = env_filter(rust_log.as_deref(), config)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(log_level: &str) -> TelemetryConfig {
        TelemetryConfig {
            log_level: log_level.to_string(),
        }
    }

    #[test]
    fn configured_level_applies_without_rust_log() {
        assert!(env_filter(None, &level("info")).is_ok());
        assert!(env_filter(Some("   "), &level("homebuyer=debug")).is_ok());
    }

    #[test]
    fn rust_log_overrides_a_bad_configured_level() {
        assert!(env_filter(Some("debug"), &level("homebuyer=loud")).is_ok());
    }

    #[test]
    fn bad_configured_level_names_the_directive() {
        let err = env_filter(None, &level("homebuyer=loud")).expect_err("invalid level");
        assert_eq!(err.to_string(), "invalid log filter `homebuyer=loud`");
        assert!(std::error::Error::source(&err).is_some());
    }
}
