//! HAL host configuration.
//!
//! `HostConfig` tells the driver registry where the host filesystem lives
//! and which drivers must not be initialized.
//!
//! # TOML Example
//!
//! ```toml
//! root = "/"
//! disabled = ["sysfs-led"]
//! log_level = "trace"
//! ```

use crate::config::{ConfigError, LogLevel};
use crate::hal::consts::DEFAULT_HOST_ROOT;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default function for root
fn default_root() -> PathBuf {
    PathBuf::from(DEFAULT_HOST_ROOT)
}

/// Default function for log_level
fn default_log_level() -> LogLevel {
    LogLevel::Debug
}

/// Host configuration, optionally loaded from a TOML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostConfig {
    /// Filesystem root that every probe path is resolved under.
    /// Defaults to `/`; point it at a fixture tree to probe an image.
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Drivers that are registered but must be skipped.
    #[serde(default)]
    pub disabled: Vec<String>,

    /// Level of diagnostic logs shown when verbose output is requested.
    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            disabled: Vec::new(),
            log_level: default_log_level(),
        }
    }
}

impl HostConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationError` if:
    /// - `root` is not absolute
    /// - `disabled` contains an empty name
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.root.is_absolute() {
            return Err(ConfigError::ValidationError(format!(
                "root must be an absolute path, got {:?}",
                self.root
            )));
        }
        if self.disabled.iter().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::ValidationError(
                "disabled driver names cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve an absolute host path (e.g. `/sys/class/gpio`) under `root`.
    pub fn resolve(&self, host_path: &str) -> PathBuf {
        resolve_path(&self.root, host_path)
    }
}

/// Join `host_path` onto `root`, treating `host_path` as root-relative.
pub fn resolve_path(root: &Path, host_path: &str) -> PathBuf {
    root.join(host_path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HostConfig::default();
        assert_eq!(config.root, PathBuf::from("/"));
        assert!(config.disabled.is_empty());
        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: HostConfig = toml::from_str("").unwrap();
        assert_eq!(config, HostConfig::default());
    }

    #[test]
    fn test_full_toml() {
        let config: HostConfig = toml::from_str(
            r#"
root = "/srv/image"
disabled = ["sysfs-led", "sysfs-spi"]
log_level = "trace"
"#,
        )
        .unwrap();
        assert_eq!(config.root, PathBuf::from("/srv/image"));
        assert_eq!(config.disabled, vec!["sysfs-led", "sysfs-spi"]);
        assert_eq!(config.log_level, LogLevel::Trace);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(toml::from_str::<HostConfig>("drivers = [\"x\"]").is_err());
    }

    #[test]
    fn test_relative_root_rejected() {
        let config = HostConfig {
            root: PathBuf::from("fixtures/host"),
            ..HostConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_empty_disabled_name_rejected() {
        let config = HostConfig {
            disabled: vec!["  ".to_string()],
            ..HostConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_resolve_under_root() {
        let config = HostConfig {
            root: PathBuf::from("/tmp/host"),
            ..HostConfig::default()
        };
        assert_eq!(
            config.resolve("/sys/class/gpio"),
            PathBuf::from("/tmp/host/sys/class/gpio")
        );
        assert_eq!(
            HostConfig::default().resolve("/proc/cpuinfo"),
            PathBuf::from("/proc/cpuinfo")
        );
    }
}
