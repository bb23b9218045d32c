//! Driver registry for HAL drivers.
//!
//! Provides a `DriverRegistry` that owns every registered driver and
//! initializes them once, in dependency order, producing a [`State`]
//! snapshot. This uses constructor-injection rather than global state.
//!
//! # Staging
//!
//! Drivers are grouped into stages. Stage `k` holds every driver whose
//! prerequisites and registered after-hints all sit in stages `< k`.
//! Within a stage, drivers run in registration order.

use evo_common::config::LogLevel;
use evo_common::hal::driver::{DriverError, DriverFailure, HalDriver};
use std::collections::{HashMap, HashSet};
use std::time::Instant;
use thiserror::Error;
use tracing::dispatcher::Dispatch;
use tracing::subscriber::NoSubscriber;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Skip reason for drivers disabled through configuration.
pub const DISABLED_REASON: &str = "disabled by configuration";

/// Structural registry errors.
///
/// Unlike `DriverError`, these mean the registry itself could not complete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A driver with the same name is already registered.
    #[error("driver {0:?} is already registered")]
    DuplicateDriver(String),

    /// No driver with this name is registered.
    #[error("driver not found: {0}")]
    DriverNotFound(String),

    /// A required prerequisite is not registered.
    #[error("unsatisfied dependency {driver:?}->{dependency:?}; it is missing")]
    UnsatisfiedDependency {
        /// Driver declaring the prerequisite.
        driver: String,
        /// Missing prerequisite.
        dependency: String,
    },

    /// Drivers whose ordering constraints form a cycle.
    #[error("found cycle(s) in driver dependencies: {}", .0.join(", "))]
    DependencyCycle(Vec<String>),
}

/// Result of one initialization pass.
///
/// Every list keeps initialization order.
#[derive(Debug, Default)]
pub struct State {
    /// Drivers that initialized successfully.
    pub loaded: Vec<Box<dyn HalDriver>>,
    /// Drivers that did not apply to this host, with the reason.
    pub skipped: Vec<DriverFailure>,
    /// Drivers that applied but failed, with the error.
    pub failed: Vec<DriverFailure>,
}

impl State {
    /// Names of the loaded drivers, in initialization order.
    pub fn loaded_names(&self) -> Vec<&'static str> {
        self.loaded.iter().map(|d| d.name()).collect()
    }
}

/// Registry initialization failed; `partial` holds what did get initialized.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct InitError {
    /// Drivers processed before the error was reported.
    pub partial: State,
    /// Underlying structural error.
    pub source: RegistryError,
}

impl InitError {
    /// Split into the partial snapshot and the error.
    pub fn into_parts(self) -> (State, RegistryError) {
        (self.partial, self.source)
    }
}

/// Options for a single `DriverRegistry::init` call.
///
/// Logging is scoped to the call: nothing is installed globally.
#[derive(Debug, Clone, Copy, Default)]
pub struct InitOptions {
    /// Surface diagnostic logs emitted during initialization.
    pub verbose: bool,
    /// Emit diagnostic logs as JSON lines.
    pub json: bool,
    /// Maximum level of diagnostic logs when `verbose` is set.
    pub level: LogLevel,
}

impl InitOptions {
    /// Build the dispatcher used while drivers initialize.
    ///
    /// Logs always go to stderr. When not verbose every event is dropped.
    pub fn dispatch(&self) -> Dispatch {
        if !self.verbose {
            return Dispatch::new(NoSubscriber::default());
        }

        let level = tracing::Level::from(self.level);
        let filter = EnvFilter::from_default_env().add_directive(level.into());
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr);

        if self.json {
            Dispatch::new(builder.json().finish())
        } else {
            Dispatch::new(builder.finish())
        }
    }
}

/// Skip reason for drivers caught in a dependency cycle.
pub const CYCLE_REASON: &str = "dependency cycle";

struct Entry {
    driver: Box<dyn HalDriver>,
    disabled: bool,
}

/// Initialization order computed from the registered drivers.
struct Plan {
    /// Driver indices per stage.
    stages: Vec<Vec<usize>>,
    /// Drivers that can never be staged, with their skip reason.
    unstaged: Vec<(usize, DriverError)>,
    /// First structural problem found.
    structural: Option<RegistryError>,
}

/// Registry of HAL drivers.
///
/// Constructed at startup, populated via `register()`, and consumed by a
/// single `init()` call. No global state, so it can be tested in isolation.
pub struct DriverRegistry {
    entries: Vec<Entry>,
}

impl DriverRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a driver.
    ///
    /// # Errors
    /// Returns `RegistryError::DuplicateDriver` if a driver with the same name
    /// is already registered.
    pub fn register(&mut self, driver: Box<dyn HalDriver>) -> Result<(), RegistryError> {
        let name = driver.name();
        if self.position(name).is_some() {
            return Err(RegistryError::DuplicateDriver(name.to_string()));
        }
        debug!("Registered driver '{}'", name);
        self.entries.push(Entry {
            driver,
            disabled: false,
        });
        Ok(())
    }

    /// Mark a registered driver as disabled; it will be reported as skipped.
    ///
    /// # Errors
    /// Returns `RegistryError::DriverNotFound` if no driver with the given name is registered.
    pub fn disable(&mut self, name: &str) -> Result<(), RegistryError> {
        let idx = self
            .position(name)
            .ok_or_else(|| RegistryError::DriverNotFound(name.to_string()))?;
        self.entries[idx].disabled = true;
        Ok(())
    }

    /// List all registered driver names, in registration order.
    pub fn list_drivers(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.driver.name()).collect()
    }

    /// Initialize every driver once, in dependency order.
    ///
    /// # Errors
    /// Returns `InitError` when a required prerequisite is not registered or
    /// ordering constraints are cyclic. Every driver whose dependency chain is
    /// sound is still initialized; the result is in `InitError::partial`.
    pub fn init(self, options: &InitOptions) -> Result<State, InitError> {
        tracing::dispatcher::with_default(&options.dispatch(), || self.run_stages())
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.driver.name() == name)
    }

    fn run_stages(self) -> Result<State, InitError> {
        info!("Initializing {} registered driver(s)", self.entries.len());
        let plan = self.plan();

        let mut slots: Vec<Option<Entry>> = self.entries.into_iter().map(Some).collect();
        let mut loaded: HashSet<&'static str> = HashSet::new();
        let mut state = State::default();

        for (n, stage) in plan.stages.iter().enumerate() {
            debug!("Stage {}: {} driver(s)", n, stage.len());
            for &idx in stage {
                let Some(mut entry) = slots[idx].take() else {
                    continue;
                };
                let name = entry.driver.name();

                if entry.disabled {
                    debug!("Driver '{}' disabled", name);
                    state.skipped.push(DriverFailure {
                        name,
                        error: DriverError::skipped(DISABLED_REASON),
                    });
                    continue;
                }

                let missing = entry
                    .driver
                    .prerequisites()
                    .iter()
                    .copied()
                    .find(|dep| !loaded.contains(dep));
                if let Some(dep) = missing {
                    debug!("Driver '{}' skipped: '{}' not loaded", name, dep);
                    state.skipped.push(DriverFailure {
                        name,
                        error: DriverError::skipped(format!("dependency not loaded: {dep:?}")),
                    });
                    continue;
                }

                let start = Instant::now();
                let outcome = entry.driver.init();
                let elapsed = start.elapsed();

                match outcome {
                    Ok(()) => {
                        info!("Loaded driver '{}' in {:?}", name, elapsed);
                        loaded.insert(name);
                        state.loaded.push(entry.driver);
                    }
                    Err(error @ DriverError::Skipped(_)) => {
                        debug!("Skipped driver '{}': {}", name, error);
                        state.skipped.push(DriverFailure { name, error });
                    }
                    Err(error @ DriverError::Failed(_)) => {
                        warn!("Driver '{}' failed after {:?}: {}", name, elapsed, error);
                        state.failed.push(DriverFailure { name, error });
                    }
                }
            }
        }

        // Never-staged drivers are still part of the snapshot.
        for (idx, error) in plan.unstaged {
            let Some(entry) = slots[idx].take() else {
                continue;
            };
            let name = entry.driver.name();
            let error = if entry.disabled {
                DriverError::skipped(DISABLED_REASON)
            } else {
                error
            };
            debug!("Driver '{}' never staged: {}", name, error);
            state.skipped.push(DriverFailure { name, error });
        }

        info!(
            "Initialization done: {} loaded, {} skipped, {} failed",
            state.loaded.len(),
            state.skipped.len(),
            state.failed.len()
        );

        match plan.structural {
            Some(source) => Err(InitError {
                partial: state,
                source,
            }),
            None => Ok(state),
        }
    }

    /// Compute initialization stages.
    ///
    /// Drivers that can never be staged are listed in `unstaged` with a skip
    /// reason; the first structural problem found is kept in `structural`.
    fn plan(&self) -> Plan {
        let n = self.entries.len();
        let index: HashMap<&str, usize> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.driver.name(), i))
            .collect();

        let mut structural = None;
        let mut required: Vec<Vec<usize>> = Vec::with_capacity(n);
        // First prerequisite that can never load, per driver.
        let mut blocked_by: Vec<Option<&'static str>> = vec![None; n];

        for (i, entry) in self.entries.iter().enumerate() {
            let driver = entry.driver.as_ref();
            let mut edges = Vec::new();
            for &dep in driver.prerequisites() {
                match index.get(dep) {
                    Some(&j) => edges.push(j),
                    None => {
                        if blocked_by[i].is_none() {
                            blocked_by[i] = Some(dep);
                        }
                        if structural.is_none() {
                            structural = Some(RegistryError::UnsatisfiedDependency {
                                driver: driver.name().to_string(),
                                dependency: dep.to_string(),
                            });
                        }
                    }
                }
            }
            required.push(edges);
        }

        // Anything requiring a blocked driver is blocked too.
        let mut changed = true;
        while changed {
            changed = false;
            for i in 0..n {
                if blocked_by[i].is_some() {
                    continue;
                }
                if let Some(&j) = required[i].iter().find(|&&j| blocked_by[j].is_some()) {
                    blocked_by[i] = Some(self.entries[j].driver.name());
                    changed = true;
                }
            }
        }

        let edges: Vec<Vec<usize>> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let mut all = required[i].clone();
                if let Some(hints) = entry.driver.ordering_hints() {
                    all.extend(
                        hints
                            .after()
                            .iter()
                            .filter_map(|name| index.get(name).copied())
                            .filter(|&j| blocked_by[j].is_none()),
                    );
                }
                all
            })
            .collect();

        let mut staged = vec![false; n];
        let mut stages = Vec::new();
        loop {
            let round: Vec<usize> = (0..n)
                .filter(|&i| {
                    !staged[i] && blocked_by[i].is_none() && edges[i].iter().all(|&j| staged[j])
                })
                .collect();
            if round.is_empty() {
                break;
            }
            for &i in &round {
                staged[i] = true;
            }
            stages.push(round);
        }

        let mut unstaged = Vec::new();
        let mut cyclic = Vec::new();
        for i in (0..n).filter(|&i| !staged[i]) {
            match blocked_by[i] {
                Some(dep) => unstaged.push((
                    i,
                    DriverError::skipped(format!("dependency not loaded: {dep:?}")),
                )),
                None => {
                    unstaged.push((i, DriverError::skipped(CYCLE_REASON)));
                    cyclic.push(self.entries[i].driver.name().to_string());
                }
            }
        }
        if !cyclic.is_empty() {
            warn!("Drivers with cyclic dependencies: {:?}", cyclic);
            if structural.is_none() {
                structural = Some(RegistryError::DependencyCycle(cyclic));
            }
        }

        Plan {
            stages,
            unstaged,
            structural,
        }
    }
}

impl Default for DriverRegistry {
    fn default() -> Self {
        Self::new()
    }
}
