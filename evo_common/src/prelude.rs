//! Prelude module for common re-exports.
//!
//! # Usage
//!
//! ```rust
//! use evo_common::prelude::*;
//! ```

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, LogLevel};
pub use crate::hal::config::HostConfig;

// ─── Drivers ────────────────────────────────────────────────────────
pub use crate::hal::driver::{DriverError, DriverFailure, HalDriver, OrderingHints};
