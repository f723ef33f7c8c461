//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request ID, CORS, limits, timeout, metrics)
//! - Bind server to listener
//! - Stop accepting on shutdown and drain in-flight requests

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::Request,
    middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServiceConfig;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer, RequestIdExt};
use crate::http::response::{timeout_detail, ApiError};
use crate::http::{echo, health, predict};
use crate::inference::InferenceEngine;
use crate::security::{body_limit_layer, cors_layer};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<InferenceEngine>,
    pub started_at: Instant,
}

/// HTTP server for the inference API.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server backed by the placeholder ranker.
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_engine(config, InferenceEngine::default())
    }

    /// Create a new HTTP server around a specific engine.
    pub fn with_engine(config: ServiceConfig, engine: InferenceEngine) -> Self {
        let state = AppState {
            engine: Arc::new(engine),
            started_at: Instant::now(),
        };

        let routes = Router::new()
            .route("/", get(echo::root))
            .route("/health", get(health::health))
            .route("/echo/{message}", get(echo::echo))
            .route("/predict", post(predict::predict))
            .fallback(not_found)
            .method_not_allowed_fallback(method_not_allowed)
            .with_state(state);

        Self {
            router: Self::apply_layers(routes, &config),
        }
    }

    /// Wrap `routes` in the service's middleware stack.
    #[allow(deprecated)]
    fn apply_layers(routes: Router, config: &ServiceConfig) -> Router {
        routes
            .layer(body_limit_layer(&config.security))
            .layer(middleware::from_fn(crate::http::middleware::track_metrics))
            .layer(
                ServiceBuilder::new()
                    .layer(set_request_id_layer())
                    .layer(TraceLayer::new_for_http().make_span_with(make_span))
                    .layer(propagate_request_id_layer())
                    .layer(cors_layer(&config.cors))
                    .layer(middleware::map_response(timeout_detail))
                    .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs))),
            )
    }

    /// The fully layered router, for driving the service in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

fn make_span(req: &Request<Body>) -> tracing::Span {
    let client = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_default();

    tracing::info_span!(
        "request",
        request_id = %req.request_id(),
        method = %req.method(),
        path = %req.uri().path(),
        client = %client,
    )
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
