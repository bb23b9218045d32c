//! HAL driver trait and error types.
//!
//! This module defines:
//! - `HalDriver` trait - Interface for drivers managed by the driver registry
//! - `OrderingHints` trait - Optional capability listing soft ordering constraints
//! - `DriverError` enum - Per-driver initialization outcomes other than success
//! - `DriverFailure` struct - A driver name paired with its `DriverError`

use std::fmt;
use thiserror::Error;

/// Why a driver did not load.
///
/// Neither variant is a tool failure: both end up in the report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DriverError {
    /// The driver is not applicable on this host (hardware absent, disabled, ...).
    #[error("{0}")]
    Skipped(String),

    /// The driver is applicable but initialization failed.
    #[error("{0}")]
    Failed(String),
}

impl DriverError {
    /// Shorthand for `DriverError::Skipped`.
    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped(reason.into())
    }

    /// Shorthand for `DriverError::Failed`.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// A driver that was skipped or failed, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverFailure {
    /// Driver name.
    pub name: &'static str,
    /// Skip reason or failure message.
    pub error: DriverError,
}

/// Soft ordering constraints.
///
/// Drivers named in `after()` are initialized first when they are registered,
/// but their absence or failure never prevents this driver from loading.
pub trait OrderingHints {
    /// Names of drivers that should be initialized before this one, if present.
    fn after(&self) -> &[&'static str];
}

/// Trait implemented by every driver known to the registry.
///
/// # Lifecycle
///
/// 1. Registered once with the driver registry
/// 2. `init()` - Called at most once, after every prerequisite loaded
/// 3. Kept in the loaded list of the resulting snapshot, or dropped
pub trait HalDriver: Send + Sync {
    /// Returns the driver's unique identifier (e.g., "sysfs-gpio").
    fn name(&self) -> &'static str;

    /// Names of drivers that must be loaded before this one.
    ///
    /// If any of them does not load, this driver is skipped.
    fn prerequisites(&self) -> &[&'static str] {
        &[]
    }

    /// Probe and initialize the driver.
    ///
    /// # Errors
    /// `DriverError::Skipped` when the driver does not apply to this host,
    /// `DriverError::Failed` when it applies but cannot be brought up.
    fn init(&mut self) -> Result<(), DriverError>;

    /// Optional capability: soft ordering constraints.
    /// Default: None
    fn ordering_hints(&self) -> Option<&dyn OrderingHints> {
        None
    }
}

impl fmt::Debug for dyn HalDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HalDriver")
            .field("name", &self.name())
            .field("prerequisites", &self.prerequisites())
            .finish()
    }
}
