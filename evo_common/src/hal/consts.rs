//! HAL host probe constants.
//!
//! Paths are absolute as seen on a live system; drivers resolve them
//! under `HostConfig::root` before touching the filesystem.

/// Default host filesystem root.
pub const DEFAULT_HOST_ROOT: &str = "/";

/// CPU description exposed by the kernel.
pub const PROC_CPUINFO: &str = "/proc/cpuinfo";

/// sysfs GPIO class directory (contains `gpiochipN` entries).
pub const SYSFS_GPIO_DIR: &str = "/sys/class/gpio";

/// sysfs I²C character device class directory (contains `i2c-N` entries).
pub const SYSFS_I2C_DIR: &str = "/sys/class/i2c-dev";

/// sysfs SPI device class directory (contains `spidevB.C` entries).
pub const SYSFS_SPI_DIR: &str = "/sys/class/spidev";

/// sysfs LED class directory.
pub const SYSFS_LED_DIR: &str = "/sys/class/leds";

/// sysfs thermal class directory (contains `thermal_zoneN` entries).
pub const SYSFS_THERMAL_DIR: &str = "/sys/class/thermal";

/// Broadcom GPIO register window exposed without root privileges.
pub const DEV_GPIOMEM: &str = "/dev/gpiomem";

/// `Hardware` values reported by Broadcom BCM283x/BCM27xx SoCs.
pub const BCM283X_HARDWARE: &[&str] = &[
    "BCM2708", "BCM2709", "BCM2710", "BCM2711", "BCM2835", "BCM2836", "BCM2837",
];
