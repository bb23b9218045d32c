//! # EVO HAL Info Binary
//!
//! Initializes every built-in HAL driver once and reports which drivers
//! loaded (with their dependencies), which were skipped, and which failed.
//!
//! # Usage
//!
//! ```bash
//! # Probe the running host
//! evo_hal_info
//!
//! # Show initialization logs on stderr
//! evo_hal_info -v
//!
//! # Probe a mounted image, skipping some drivers
//! evo_hal_info --config hal_info.toml -v --json
//! ```

#![deny(warnings)]

use clap::error::ErrorKind;
use clap::Parser;
use evo_common::config::{ConfigError, ConfigLoader};
use evo_common::hal::config::HostConfig;
use evo_hal::drivers::register_all_drivers;
use evo_hal::{report_registry, DriverRegistry, HalInfoError, InitOptions};
use std::io;
use std::path::{Path, PathBuf};

/// EVO HAL Info - report the state of the HAL driver registry
#[derive(Parser, Debug)]
#[command(name = "evo_hal_info")]
#[command(author = "RTS007")]
#[command(version)]
#[command(about = "Report which HAL drivers loaded, were skipped, or failed")]
#[command(long_about = None)]
struct Args {
    /// Path to host configuration file (root, disabled drivers, log level).
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long)]
    json: bool,

    #[arg(hide = true)]
    unexpected: Vec<String>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}.", env!("CARGO_BIN_NAME"), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), HalInfoError> {
    let args = parse_args()?;
    let config = load_config(args.config.as_deref())?;

    let mut registry = DriverRegistry::new();
    register_all_drivers(&mut registry, &config)?;
    for name in &config.disabled {
        registry
            .disable(name)
            .map_err(|e| ConfigError::ValidationError(format!("disabled: {e}")))?;
    }

    let options = InitOptions {
        verbose: args.verbose,
        json: args.json,
        level: config.log_level,
    };
    report_registry(registry, &options, &mut io::stdout().lock())
}

/// Parse the command line; clap usage errors become `HalInfoError::Usage`.
fn parse_args() -> Result<Args, HalInfoError> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let reason = e.kind().as_str().unwrap_or("invalid arguments");
            return Err(HalInfoError::Usage(format!("{reason}, try --help")));
        }
    };

    if !args.unexpected.is_empty() {
        return Err(HalInfoError::Usage(
            "unexpected argument, try --help".to_string(),
        ));
    }
    Ok(args)
}

/// Load and validate the host configuration; defaults when no file is given.
fn load_config(path: Option<&Path>) -> Result<HostConfig, HalInfoError> {
    let config = match path {
        Some(path) => HostConfig::load(path)?,
        None => HostConfig::default(),
    };
    config.validate()?;
    Ok(config)
}
