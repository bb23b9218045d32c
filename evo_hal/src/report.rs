//! Driver state report.
//!
//! Renders a [`State`] snapshot as three fixed sections: loaded drivers with
//! their dependencies, skipped drivers with the reason, failed drivers with
//! the error. Entries keep the snapshot's order.

use crate::driver_registry::{DriverRegistry, InitOptions, State};
use crate::error::HalInfoError;
use evo_common::hal::driver::{DriverFailure, HalDriver};
use std::io::{self, Write};

/// Header of the loaded section.
pub const LOADED_HEADER: &str = "Drivers loaded and their dependencies, if any:";

/// Header of the skipped section.
pub const SKIPPED_HEADER: &str = "Drivers skipped and the reason why:";

/// Header of the failed section.
pub const FAILED_HEADER: &str = "Drivers failed to load and the error:";

/// Line printed for an empty section.
pub const NONE_PLACEHOLDER: &str = "  <none>";

/// Write the full three-section report.
pub fn write_report<W: Write>(out: &mut W, state: &State) -> io::Result<()> {
    writeln!(out, "{LOADED_HEADER}")?;
    write_loaded(out, &state.loaded)?;
    writeln!(out, "{SKIPPED_HEADER}")?;
    write_failures(out, &state.skipped)?;
    writeln!(out, "{FAILED_HEADER}")?;
    write_failures(out, &state.failed)
}

/// Initialize `registry` once and write the report of the result to `out`.
///
/// The report is written even when the registry returns an error. A registry
/// error takes precedence over a failure to write the report.
pub fn report_registry<W: Write>(
    registry: DriverRegistry,
    options: &InitOptions,
    out: &mut W,
) -> Result<(), HalInfoError> {
    let (state, result) = match registry.init(options) {
        Ok(state) => (state, Ok(())),
        Err(e) => {
            let (partial, source) = e.into_parts();
            (partial, Err(source))
        }
    };

    let written = write_report(out, &state).and_then(|()| out.flush());
    result?;
    written?;
    Ok(())
}

fn write_loaded<W: Write>(out: &mut W, drivers: &[Box<dyn HalDriver>]) -> io::Result<()> {
    if drivers.is_empty() {
        return writeln!(out, "{NONE_PLACEHOLDER}");
    }
    for driver in drivers {
        let required = driver.prerequisites();
        let optional = driver
            .ordering_hints()
            .map(|hints| hints.after())
            .unwrap_or_default();

        write!(out, "- {}", driver.name())?;
        if required.is_empty() && optional.is_empty() {
            writeln!(out)?;
            continue;
        }
        write!(out, ":")?;
        if !required.is_empty() {
            write!(out, " {}", required.join(", "))?;
        }
        if !optional.is_empty() {
            write!(out, " optional: {}", optional.join(", "))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_failures<W: Write>(out: &mut W, failures: &[DriverFailure]) -> io::Result<()> {
    if failures.is_empty() {
        return writeln!(out, "{NONE_PLACEHOLDER}");
    }
    for failure in failures {
        writeln!(out, "- {}: {}", failure.name, failure.error)?;
    }
    Ok(())
}
