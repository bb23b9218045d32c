//! sysfs class probes.
//!
//! Each driver checks one `/sys/class/*` directory for entries that prove
//! the kernel exposes the matching interface.

use evo_common::hal::config::HostConfig;
use evo_common::hal::consts::{
    SYSFS_GPIO_DIR, SYSFS_I2C_DIR, SYSFS_LED_DIR, SYSFS_SPI_DIR, SYSFS_THERMAL_DIR,
};
use evo_common::hal::driver::{DriverError, HalDriver};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Driver probing a sysfs class directory.
#[derive(Debug)]
pub struct SysfsClassDriver {
    name: &'static str,
    kind: &'static str,
    dir: PathBuf,
    prefix: Option<&'static str>,
}

impl SysfsClassDriver {
    /// Probe `dir` for entries starting with `prefix` (any entry when `None`).
    pub fn new(
        name: &'static str,
        kind: &'static str,
        dir: PathBuf,
        prefix: Option<&'static str>,
    ) -> Self {
        Self {
            name,
            kind,
            dir,
            prefix,
        }
    }

    /// `sysfs-gpio`: GPIO chips.
    pub fn gpio(config: &HostConfig) -> Self {
        Self::new("sysfs-gpio", "GPIO chip", config.resolve(SYSFS_GPIO_DIR), Some("gpiochip"))
    }

    /// `sysfs-i2c`: I²C buses.
    pub fn i2c(config: &HostConfig) -> Self {
        Self::new("sysfs-i2c", "I²C bus", config.resolve(SYSFS_I2C_DIR), Some("i2c-"))
    }

    /// `sysfs-spi`: SPI ports.
    pub fn spi(config: &HostConfig) -> Self {
        Self::new("sysfs-spi", "SPI port", config.resolve(SYSFS_SPI_DIR), Some("spidev"))
    }

    /// `sysfs-led`: LEDs.
    pub fn led(config: &HostConfig) -> Self {
        Self::new("sysfs-led", "LED", config.resolve(SYSFS_LED_DIR), None)
    }

    /// `sysfs-thermal`: thermal zones.
    pub fn thermal(config: &HostConfig) -> Self {
        Self::new(
            "sysfs-thermal",
            "thermal zone",
            config.resolve(SYSFS_THERMAL_DIR),
            Some("thermal_zone"),
        )
    }
}

fn count_entries(dir: &Path, prefix: Option<&str>) -> io::Result<usize> {
    let mut count = 0;
    for entry in fs::read_dir(dir)? {
        let name = entry?.file_name();
        let name = name.to_string_lossy();
        if prefix.is_none_or(|p| name.starts_with(p)) {
            count += 1;
        }
    }
    Ok(count)
}

impl HalDriver for SysfsClassDriver {
    fn name(&self) -> &'static str {
        self.name
    }

    fn init(&mut self) -> Result<(), DriverError> {
        match count_entries(&self.dir, self.prefix) {
            Ok(0) => Err(DriverError::skipped(format!("no {} found", self.kind))),
            Ok(n) => {
                debug!("{}: {} {}(s) under {:?}", self.name, n, self.kind, self.dir);
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(DriverError::skipped(format!(
                "{} sysfs not present",
                self.kind
            ))),
            Err(e) => Err(DriverError::failed(format!(
                "cannot read {}: {}",
                self.dir.display(),
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn host() -> (TempDir, HostConfig) {
        let dir = TempDir::new().unwrap();
        let config = HostConfig {
            root: dir.path().to_path_buf(),
            ..HostConfig::default()
        };
        (dir, config)
    }

    #[test]
    fn missing_class_dir_is_skipped() {
        let (_dir, config) = host();
        let mut driver = SysfsClassDriver::gpio(&config);
        assert_eq!(
            driver.init(),
            Err(DriverError::skipped("GPIO chip sysfs not present"))
        );
    }

    #[test]
    fn empty_class_dir_is_skipped() {
        let (_dir, config) = host();
        let gpio = config.resolve(SYSFS_GPIO_DIR);
        fs::create_dir_all(&gpio).unwrap();
        fs::write(gpio.join("export"), "").unwrap();

        let mut driver = SysfsClassDriver::gpio(&config);
        assert_eq!(driver.init(), Err(DriverError::skipped("no GPIO chip found")));
    }

    #[test]
    fn matching_entries_load() {
        let (_dir, config) = host();
        let gpio = config.resolve(SYSFS_GPIO_DIR);
        fs::create_dir_all(gpio.join("gpiochip0")).unwrap();
        fs::create_dir_all(gpio.join("gpiochip504")).unwrap();
        fs::write(gpio.join("unexport"), "").unwrap();

        assert_eq!(count_entries(&gpio, Some("gpiochip")).unwrap(), 2);
        let mut driver = SysfsClassDriver::gpio(&config);
        assert!(driver.init().is_ok());
    }

    #[test]
    fn led_accepts_any_entry() {
        let (_dir, config) = host();
        fs::create_dir_all(config.resolve(SYSFS_LED_DIR).join("ACT")).unwrap();

        let mut driver = SysfsClassDriver::led(&config);
        assert_eq!(driver.name(), "sysfs-led");
        assert!(driver.init().is_ok());
    }

    #[test]
    fn unreadable_class_dir_fails() {
        let (_dir, config) = host();
        let spi = config.resolve(SYSFS_SPI_DIR);
        fs::create_dir_all(spi.parent().unwrap()).unwrap();
        fs::write(&spi, "not a directory").unwrap();

        let mut driver = SysfsClassDriver::spi(&config);
        assert!(matches!(driver.init(), Err(DriverError::Failed(_))));
    }
}
