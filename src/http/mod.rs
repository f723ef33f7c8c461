//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (assign request ID)
//!     → handlers: health.rs, echo.rs, predict.rs
//!     → response.rs (errors → {"detail": ...})
//!     → Send to client
//! ```

pub mod echo;
pub mod health;
pub mod middleware;
pub mod predict;
pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestIdExt, X_REQUEST_ID};
pub use response::{ApiError, ErrorBody};
pub use server::{AppState, HttpServer};
