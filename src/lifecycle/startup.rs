//! Startup hook.
//!
//! Runs once before the listener accepts traffic. This is where a real model
//! would be loaded; the placeholder ranker needs nothing, so the hook only
//! performs the configured warm-up delay.

use std::time::Duration;

use thiserror::Error;

use crate::config::ServiceConfig;

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to install metrics exporter: {0}")]
    Metrics(String),
}

/// Application startup hook.
pub async fn on_startup(config: &ServiceConfig) -> Result<(), StartupError> {
    tracing::info!("Starting up application");

    if config.observability.metrics_enabled {
        let addr = config
            .observability
            .metrics_address
            .parse()
            .map_err(|e: std::net::AddrParseError| StartupError::Metrics(e.to_string()))?;
        crate::observability::metrics::init_metrics(addr)
            .map_err(|e| StartupError::Metrics(e.to_string()))?;
    }

    tokio::time::sleep(Duration::from_millis(config.lifecycle.warmup_ms)).await;

    tracing::info!("Startup complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn startup_with_defaults_succeeds() {
        let mut config = ServiceConfig::default();
        config.lifecycle.warmup_ms = 0;
        assert!(on_startup(&config).await.is_ok());
    }
}
