//! Command-line arguments.

use crate::config::{self, Config, Verbosity};
use crate::constants::ROOT_ENV;
use clap::Parser;
use std::path::PathBuf;

/// Commit and push README.md when the working tree has pending changes.
///
/// Set DRY_RUN=1 to only list the pending changes.
#[derive(Debug, Parser)]
#[command(name = "readme-publish", version, about)]
pub struct Cli {
    /// Only print essential output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log every git command and step
    #[arg(short, long)]
    pub verbose: bool,

    /// List pending changes without committing (same as DRY_RUN=1)
    #[arg(long)]
    pub dry_run: bool,

    /// Repository root [default: parent of the executable's directory]
    #[arg(long, value_name = "PATH")]
    pub root: Option<PathBuf>,
}

impl Cli {
    /// Explicit repository root: `--root`, else `README_PUBLISH_ROOT`.
    #[must_use]
    pub fn root(&self) -> Option<PathBuf> {
        self.root.clone().or_else(|| {
            std::env::var_os(ROOT_ENV)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        })
    }

    /// Builds the runtime config, folding in `DRY_RUN` from the environment.
    #[must_use]
    pub fn config(&self) -> Config {
        self.config_with_env_dry_run(config::dry_run_from_env())
    }

    fn config_with_env_dry_run(&self, env_dry_run: bool) -> Config {
        let verbosity = if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };

        Config {
            verbosity,
            dry_run: self.dry_run || env_dry_run,
        }
    }
}
