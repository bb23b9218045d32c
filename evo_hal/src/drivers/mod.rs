//! HAL driver implementations.
//!
//! Built-in drivers only probe the host; none of them drives hardware.
//!
//! - [`cpuinfo`] - `/proc/cpuinfo` availability
//! - [`sysfs`] - sysfs class directories (GPIO, I²C, SPI, LED, thermal)
//! - [`bcm283x`] - Broadcom BCM283x GPIO register window
//!
//! # Adding New Drivers
//!
//! 1. Create a new submodule under `drivers/`
//! 2. Implement the `HalDriver` trait from `evo_common::hal::driver`
//! 3. Register the driver in `register_all_drivers()`

pub mod bcm283x;
pub mod cpuinfo;
pub mod sysfs;

use crate::driver_registry::{DriverRegistry, RegistryError};
use evo_common::hal::config::HostConfig;

/// Register all built-in drivers, probing under `config.root`.
///
/// Registration order is the initialization order within a stage.
pub fn register_all_drivers(
    registry: &mut DriverRegistry,
    config: &HostConfig,
) -> Result<(), RegistryError> {
    registry.register(Box::new(cpuinfo::CpuInfoDriver::new(config)))?;
    registry.register(Box::new(sysfs::SysfsClassDriver::gpio(config)))?;
    registry.register(Box::new(sysfs::SysfsClassDriver::i2c(config)))?;
    registry.register(Box::new(sysfs::SysfsClassDriver::spi(config)))?;
    registry.register(Box::new(sysfs::SysfsClassDriver::led(config)))?;
    registry.register(Box::new(sysfs::SysfsClassDriver::thermal(config)))?;
    registry.register(Box::new(bcm283x::Bcm283xGpio::new(config)))?;
    Ok(())
}
