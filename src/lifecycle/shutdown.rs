//! Shutdown coordination and the shutdown hook.

use std::time::Duration;

use tokio::sync::broadcast;

use crate::config::ServiceConfig;

/// Coordinator for graceful shutdown.
///
/// `main` hands one receiver to `HttpServer::run(listener, shutdown)` and
/// triggers it from the signal task; the server then stops accepting and
/// drains before `on_shutdown` runs.
pub struct Shutdown {
    /// Broadcast channel sender.
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Get the number of active subscribers (tasks still running).
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Application shutdown hook. Called after the server has stopped.
pub async fn on_shutdown(config: &ServiceConfig) {
    tracing::info!("Shutting down application");
    tokio::time::sleep(Duration::from_millis(config.lifecycle.drain_ms)).await;
    tracing::info!("Shutdown complete");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn trigger_reaches_every_subscriber() {
        let shutdown = Shutdown::new();
        let mut a = shutdown.subscribe();
        let mut b = shutdown.subscribe();
        assert_eq!(shutdown.receiver_count(), 2);

        shutdown.trigger();
        assert!(a.recv().await.is_ok());
        assert!(b.recv().await.is_ok());

        drop(a);
        assert_eq!(shutdown.receiver_count(), 1);
    }

    #[tokio::test]
    async fn trigger_without_subscribers_is_harmless() {
        Shutdown::default().trigger();
    }
}
