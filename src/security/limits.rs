//! Request limits.
//!
//! Bodies larger than `security.max_body_size` fail extraction with
//! 413 Payload Too Large, reported through the usual `{detail}` body.

use axum::extract::DefaultBodyLimit;

use crate::config::SecurityConfig;

/// Body size limit layer for the configured maximum.
pub fn body_limit_layer(config: &SecurityConfig) -> DefaultBodyLimit {
    DefaultBodyLimit::max(config.max_body_size)
}
