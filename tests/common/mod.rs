//! Shared utilities for integration and load testing.

use std::net::SocketAddr;
use std::time::Duration;

use inference_api::config::ServiceConfig;
use inference_api::http::HttpServer;
use inference_api::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// A server running on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Trigger shutdown and wait for the server task to finish.
    pub async fn stop(self) {
        self.shutdown.trigger();
        let _ = tokio::time::timeout(Duration::from_secs(5), self.handle).await;
    }
}

/// Start the service with `config` on 127.0.0.1 and an OS-assigned port.
pub async fn start_server(mut config: ServiceConfig) -> TestServer {
    config.listener.host = "127.0.0.1".into();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    config.listener.port = addr.port();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);

    let handle = tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestServer {
        addr,
        shutdown,
        handle,
    }
}

/// HTTP client that never routes loopback traffic through a proxy.
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// SDK client bound to `server`.
#[allow(dead_code)]
pub fn api_client(server: &TestServer) -> inference_sdk::ApiClient {
    inference_sdk::ApiClient::with_client(http_client(), &server.url())
}
