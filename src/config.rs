//! Configuration types for CLI verbosity and options.

use crate::constants::{DRY_RUN_ENABLED, DRY_RUN_ENV};
use crate::git::{self, GitLogger};

/// Runtime configuration derived from CLI arguments and the environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Controls the verbosity level of CLI output.
    pub verbosity: Verbosity,
    /// Report pending changes without staging, committing or pushing.
    pub dry_run: bool,
}

impl Config {
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.verbosity == Verbosity::Quiet
    }

    #[must_use]
    pub fn is_verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }

    /// Returns the appropriate git logger based on verbosity settings.
    ///
    /// Config only selects the logger; the logging itself lives in the
    /// git module as plain callbacks.
    #[must_use]
    pub fn git_logger(&self) -> GitLogger {
        if self.is_verbose() {
            git::verbose_logger
        } else {
            git::no_op_logger
        }
    }
}

/// Verbosity level for CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

/// Whether a `DRY_RUN` value enables dry-run mode.
///
/// Only the exact string `"1"` counts.
#[must_use]
pub fn is_dry_run_value(value: Option<&str>) -> bool {
    value == Some(DRY_RUN_ENABLED)
}

/// Reads `DRY_RUN` from the process environment.
#[must_use]
pub fn dry_run_from_env() -> bool {
    is_dry_run_value(std::env::var(DRY_RUN_ENV).ok().as_deref())
}
