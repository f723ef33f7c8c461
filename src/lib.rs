//! Minimal inference HTTP service library.

pub mod config;
pub mod http;
pub mod inference;
pub mod lifecycle;
pub mod observability;
pub mod security;

pub use config::schema::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
