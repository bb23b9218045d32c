//! `/proc/cpuinfo` probe.
//!
//! Loads when the kernel exposes a CPU description; SoC-specific drivers
//! list it as a prerequisite and re-read the file for their own checks.

use evo_common::hal::config::HostConfig;
use evo_common::hal::consts::PROC_CPUINFO;
use evo_common::hal::driver::{DriverError, HalDriver};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Driver name.
pub const NAME: &str = "proc-cpuinfo";

/// Fields of interest from `/proc/cpuinfo`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct CpuInfo {
    /// `Hardware` line (ARM SoC identifier), if any.
    pub(crate) hardware: Option<String>,
    /// `model name` (x86) or `Model` (ARM boards), if any.
    pub(crate) model: Option<String>,
    /// Number of `processor` entries.
    pub(crate) processors: usize,
}

/// Parse the `key : value` lines of `/proc/cpuinfo`.
pub(crate) fn parse_cpuinfo(content: &str) -> CpuInfo {
    let mut info = CpuInfo::default();
    for line in content.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        match key.trim() {
            "processor" => info.processors += 1,
            "Hardware" if !value.is_empty() => info.hardware = Some(value.to_string()),
            "model name" | "Model" if info.model.is_none() && !value.is_empty() => {
                info.model = Some(value.to_string())
            }
            _ => {}
        }
    }
    info
}

/// Read and parse a cpuinfo file.
pub(crate) fn read_cpuinfo(path: &Path) -> io::Result<CpuInfo> {
    fs::read_to_string(path).map(|content| parse_cpuinfo(&content))
}

/// Driver reporting whether the CPU description is available.
#[derive(Debug)]
pub struct CpuInfoDriver {
    path: PathBuf,
}

impl CpuInfoDriver {
    /// Create the driver for the configured host root.
    pub fn new(config: &HostConfig) -> Self {
        Self {
            path: config.resolve(PROC_CPUINFO),
        }
    }
}

impl HalDriver for CpuInfoDriver {
    fn name(&self) -> &'static str {
        NAME
    }

    fn init(&mut self) -> Result<(), DriverError> {
        let info = match read_cpuinfo(&self.path) {
            Ok(info) => info,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(DriverError::skipped(format!("{PROC_CPUINFO} not present")));
            }
            Err(e) => {
                return Err(DriverError::failed(format!("cannot read {PROC_CPUINFO}: {e}")));
            }
        };

        info!(
            "CPU: {} processor(s), hardware={:?}, model={:?}",
            info.processors, info.hardware, info.model
        );
        Ok(())
    }
}
