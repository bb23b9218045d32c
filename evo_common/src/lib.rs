//! EVO Common Library
//!
//! Shared types for the EVO HAL tooling: the driver interface implemented by
//! every HAL driver, host configuration, and TOML loading utilities.
//!
//! # Module Structure
//!
//! - [`hal`] - Driver trait, driver errors, host configuration and probe paths
//! - [`config`] - Configuration loading traits and types
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use evo_common::prelude::*;
//!
//! struct Dummy;
//!
//! impl HalDriver for Dummy {
//!     fn name(&self) -> &'static str {
//!         "dummy"
//!     }
//!
//!     fn init(&mut self) -> Result<(), DriverError> {
//!         Err(DriverError::skipped("nothing to drive"))
//!     }
//! }
//! ```

pub mod config;
pub mod hal;
pub mod prelude;
