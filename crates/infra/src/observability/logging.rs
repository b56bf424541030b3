//! Tracing subscriber installation

use aura_domain::{AuraError, LoggingConfig, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter from `RUST_LOG`, falling back to the configured level.
///
/// An unparseable configured level degrades to `info` rather than failing
/// startup.
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber: plain text by default, JSON lines when
/// `config.json` is set.
///
/// # Errors
/// `AuraError::Internal` if a global subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config);

    let installed = if config.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer()).try_init()
    };

    installed.map_err(|e| AuraError::Internal(format!("failed to install tracing subscriber: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_is_reported_not_panicking() {
        let config = LoggingConfig { level: "debug".into(), json: true };

        let _ = init_tracing(&config);
        let second = init_tracing(&config);

        assert!(matches!(second, Err(AuraError::Internal(_))));
    }

    #[test]
    fn bogus_level_falls_back() {
        let config = LoggingConfig { level: "not a level[".into(), json: false };

        let filter = build_filter(&config);

        assert!(!filter.to_string().is_empty());
    }
}
