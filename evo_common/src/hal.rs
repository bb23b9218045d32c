//! Hardware abstraction layer types shared by the registry and its drivers.
//!
//! - [`driver`] - `HalDriver` trait, `OrderingHints` capability, driver errors
//! - [`config`] - `HostConfig` loaded from TOML
//! - [`consts`] - Host probe paths

pub mod config;
pub mod consts;
pub mod driver;
