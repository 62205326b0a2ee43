// Root resolution, publish workflow, step and outcome types

use crate::config::Config;
use crate::constants::{COMMIT_DATE_FORMAT, COMMIT_MESSAGE_PREFIX, README_FILE};
use crate::git;
use anyhow::Context;
use chrono::NaiveDate;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishStep {
    CheckingStatus,
    Staging,
    Committing,
    Pushing,
}

impl fmt::Display for PublishStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PublishStep::CheckingStatus => "Checking working tree status",
            PublishStep::Staging => "Staging README.md",
            PublishStep::Committing => "Creating commit",
            PublishStep::Pushing => "Pushing to remote",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// The working tree had no pending changes.
    Clean,
    /// Changes exist but dry-run mode left them untouched.
    DryRun { status: String },
    /// One commit was created and pushed.
    Published { message: String },
}

/// Progress notifications emitted while publishing.
pub trait PublishCallbacks {
    /// Called before the git command for `step` runs.
    fn on_step(&self, step: PublishStep);

    /// Called once the workflow finished without error.
    fn on_complete(&self, _outcome: &PublishOutcome) {}
}

/// Subject line for the commit created on `date`.
#[must_use]
pub fn commit_message(date: NaiveDate) -> String {
    format!("{} ({})", COMMIT_MESSAGE_PREFIX, date.format(COMMIT_DATE_FORMAT))
}

/// Resolves the repository root.
///
/// An explicit root wins. Otherwise the root is the parent of the directory
/// holding the running executable, so a binary kept in `<repo>/bin/` works
/// on `<repo>` wherever it is invoked from.
pub fn resolve_root(explicit: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    if let Some(root) = explicit {
        return Ok(root);
    }

    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    let exe = exe.canonicalize().unwrap_or(exe);
    exe.parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .with_context(|| format!("Cannot derive repository root from {}", exe.display()))
}

/// Publishes pending changes using today's local date.
pub fn publish<C>(root: &Path, config: &Config, callbacks: &C) -> anyhow::Result<PublishOutcome>
where
    C: PublishCallbacks + ?Sized,
{
    let today = chrono::Local::now().date_naive();
    publish_on(root, config, today, callbacks)
}

/// Publishes pending changes with a commit dated `date`.
///
/// Clean tree and dry-run return without touching the repository. Any git
/// failure aborts at that step; a failed push leaves the new commit in
/// place locally.
pub fn publish_on<C>(
    root: &Path,
    config: &Config,
    date: NaiveDate,
    callbacks: &C,
) -> anyhow::Result<PublishOutcome>
where
    C: PublishCallbacks + ?Sized,
{
    let logger = config.git_logger();

    callbacks.on_step(PublishStep::CheckingStatus);
    let status = git::status_porcelain(root, logger)?;

    let outcome = if status.is_empty() {
        PublishOutcome::Clean
    } else if config.dry_run {
        PublishOutcome::DryRun { status }
    } else {
        callbacks.on_step(PublishStep::Staging);
        git::add(root, README_FILE, logger)?;

        let message = commit_message(date);
        callbacks.on_step(PublishStep::Committing);
        git::commit(root, &message, logger)?;

        callbacks.on_step(PublishStep::Pushing);
        git::push(root, logger)?;

        PublishOutcome::Published { message }
    };

    callbacks.on_complete(&outcome);
    Ok(outcome)
}
