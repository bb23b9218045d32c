//! Error type of the `evo_hal_info` tool.

use crate::driver_registry::RegistryError;
use evo_common::config::ConfigError;
use std::io;
use thiserror::Error;

/// Fatal errors; each one ends the process with exit code 1.
#[derive(Debug, Error)]
pub enum HalInfoError {
    /// Bad command line; nothing is reported.
    #[error("{0}")]
    Usage(String),

    /// Configuration could not be loaded or is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The driver registry could not complete.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Writing the report failed.
    #[error("cannot write report: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_no_prefix() {
        let err = HalInfoError::Usage("unexpected argument, try --help".to_string());
        assert_eq!(err.to_string(), "unexpected argument, try --help");

        let err = HalInfoError::from(RegistryError::DriverNotFound("x".to_string()));
        assert_eq!(err.to_string(), "driver not found: x");

        let err = HalInfoError::from(ConfigError::FileNotFound);
        assert_eq!(err.to_string(), "Configuration file not found");
    }
}
