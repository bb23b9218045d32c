//! Broadcom BCM283x GPIO probe.
//!
//! Applies only to Raspberry Pi class SoCs and checks that the GPIO
//! register window can be opened read-write.

use crate::drivers::cpuinfo::{self, read_cpuinfo};
use evo_common::hal::config::HostConfig;
use evo_common::hal::consts::{BCM283X_HARDWARE, DEV_GPIOMEM, PROC_CPUINFO};
use evo_common::hal::driver::{DriverError, HalDriver, OrderingHints};
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use tracing::info;

/// Driver name.
pub const NAME: &str = "bcm283x-gpio";

/// Driver for the BCM283x memory-mapped GPIO block.
#[derive(Debug)]
pub struct Bcm283xGpio {
    cpuinfo: PathBuf,
    gpiomem: PathBuf,
}

impl Bcm283xGpio {
    /// Create the driver for the configured host root.
    pub fn new(config: &HostConfig) -> Self {
        Self {
            cpuinfo: config.resolve(PROC_CPUINFO),
            gpiomem: config.resolve(DEV_GPIOMEM),
        }
    }
}

impl OrderingHints for Bcm283xGpio {
    fn after(&self) -> &[&'static str] {
        // Prefer memory-mapped access over sysfs once both are up.
        &["sysfs-gpio"]
    }
}

impl HalDriver for Bcm283xGpio {
    fn name(&self) -> &'static str {
        NAME
    }

    fn prerequisites(&self) -> &[&'static str] {
        &[cpuinfo::NAME]
    }

    fn init(&mut self) -> Result<(), DriverError> {
        let info = read_cpuinfo(&self.cpuinfo)
            .map_err(|e| DriverError::failed(format!("cannot read {PROC_CPUINFO}: {e}")))?;

        let soc = info
            .hardware
            .filter(|hw| BCM283X_HARDWARE.contains(&hw.as_str()))
            .ok_or_else(|| DriverError::skipped("bcm283x CPU not detected"))?;

        match OpenOptions::new().read(true).write(true).open(&self.gpiomem) {
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(DriverError::skipped(format!("{DEV_GPIOMEM} not present")));
            }
            Err(e) => {
                return Err(DriverError::failed(format!("cannot open {DEV_GPIOMEM}: {e}")));
            }
        }

        info!("{}: {} GPIO block available", NAME, soc);
        Ok(())
    }

    fn ordering_hints(&self) -> Option<&dyn OrderingHints> {
        Some(self)
    }
}
