//! Host configuration loading tests.
//!
//! `HostConfig` through `ConfigLoader`: defaults, full files, unknown fields,
//! and validation after load.

use evo_common::config::{ConfigError, ConfigLoader, LogLevel};
use evo_common::hal::config::HostConfig;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn load_full_host_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hal_info.toml");
    fs::write(
        &path,
        r#"
root = "/mnt/rootfs"
disabled = ["bcm283x-gpio"]
log_level = "warn"
"#,
    )
    .unwrap();

    let config = HostConfig::load(&path).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.root, PathBuf::from("/mnt/rootfs"));
    assert_eq!(config.disabled, vec!["bcm283x-gpio"]);
    assert_eq!(config.log_level, LogLevel::Warn);
    assert_eq!(
        config.resolve("/dev/gpiomem"),
        PathBuf::from("/mnt/rootfs/dev/gpiomem")
    );
}

#[test]
fn load_empty_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hal_info.toml");
    fs::write(&path, "").unwrap();

    let config = HostConfig::load(&path).unwrap();
    assert_eq!(config, HostConfig::default());
}

#[test]
fn load_rejects_unknown_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hal_info.toml");
    fs::write(&path, "root = \"/\"\ncycle_time_us = 1000\n").unwrap();

    let result = HostConfig::load(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_then_validate_relative_root() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hal_info.toml");
    fs::write(&path, "root = \"relative/tree\"\n").unwrap();

    let config = HostConfig::load(&path).unwrap();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError(_))
    ));
}

#[test]
fn load_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = HostConfig::load(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound)));
}
