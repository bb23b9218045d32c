//! # EVO HAL Library
//!
//! Driver registry, built-in host drivers, and the driver state report
//! printed by the `evo_hal_info` binary.
//!
//! Drivers implement the `HalDriver` trait defined in `evo_common::hal::driver`.
//!
//! # Module Structure
//!
//! - [`driver_registry`] - Driver registration and one-shot, dependency-ordered init
//! - [`drivers`] - Built-in host probe drivers
//! - [`report`] - Three-section text report of a registry `State`
//! - [`error`] - Tool-level error type
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                     evo_hal (single crate)                       │
//! │  ┌─────────────┐    ┌──────────────────┐    ┌────────────────┐   │
//! │  │  drivers    │───►│  DriverRegistry  │───►│  State         │   │
//! │  │ (probes)    │    │  (staged init)   │    │  (snapshot)    │   │
//! │  └─────────────┘    └──────────────────┘    └───────┬────────┘   │
//! │                                                     │            │
//! │                                                     ▼            │
//! │                                            ┌────────────────┐    │
//! │                                            │  report        │    │
//! │                                            │  (stdout)      │    │
//! │                                            └────────────────┘    │
//! └──────────────────────────────────────────────────────────────────┘
//! ```

#![deny(warnings)]
#![deny(missing_docs)]

pub mod driver_registry;
pub mod drivers;
pub mod error;
pub mod report;

// Re-export key types for convenience
pub use crate::driver_registry::{DriverRegistry, InitError, InitOptions, RegistryError, State};
pub use crate::error::HalInfoError;
pub use crate::report::{report_registry, write_report};
