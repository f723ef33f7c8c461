//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Init logging/metrics → on_startup hook → Bind listener
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain in-flight requests → on_shutdown hook
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Hooks are plain functions called by the hosting process
//! - Hooks only see the config they are handed

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::{on_shutdown, Shutdown};
pub use signals::wait_for_signal;
pub use startup::{on_startup, StartupError};
