//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → cors.rs (preflight answers, origin allow-list)
//!     → limits.rs (request body size, enforced at extraction)
//!     → Pass to handlers
//! ```
//!
//! # Design Decisions
//! - Fail closed: a disallowed origin gets no CORS headers
//! - No trust in client input

pub mod cors;
pub mod limits;

pub use cors::cors_layer;
pub use limits::body_limit_layer;
