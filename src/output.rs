//! Spinner, colored status lines, and failure reporting.
//!
//! Status lines go to stdout. The spinner and verbose step lines go to
//! stderr so stdout stays a plain record of what happened.

use crate::config::Config;
use crate::constants::{DRY_RUN_ENABLED, DRY_RUN_ENV, GENERIC_FAILURE_CODE, PROGRESS_TICK_MS};
use crate::git::GitError;
use crate::publish::{PublishCallbacks, PublishOutcome, PublishStep};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// No-op callbacks for when progress tracking is not needed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOpCallbacks;

impl PublishCallbacks for NoOpCallbacks {
    fn on_step(&self, _step: PublishStep) {}
}

/// Terminal progress for a publish run.
///
/// Normal mode animates a spinner; verbose mode prints one line per step
/// instead; quiet mode shows nothing. The spinner is `None` when hidden.
pub struct PublishProgress {
    spinner: Option<ProgressBar>,
    config: Config,
}

impl PublishProgress {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let spinner = if config.is_quiet() || config.is_verbose() {
            None
        } else {
            let spinner = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.cyan} {msg}")
            {
                spinner.set_style(style);
            }
            spinner.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));
            Some(spinner)
        };

        Self {
            spinner,
            config: *config,
        }
    }

    /// Clears the spinner without a message, e.g. before reporting an error.
    pub fn abandon(&self) {
        if let Some(spinner) = &self.spinner {
            spinner.finish_and_clear();
        }
    }
}

impl PublishCallbacks for PublishProgress {
    fn on_step(&self, step: PublishStep) {
        if let Some(spinner) = &self.spinner {
            spinner.set_message(format_step_message(step));
        }
        if self.config.is_verbose() {
            eprintln!("  {}...", step.to_string().dimmed());
        }
    }

    fn on_complete(&self, _outcome: &PublishOutcome) {
        if let Some(spinner) = &self.spinner {
            spinner.finish_and_clear();
        }
    }
}

pub fn print_working_dir(path: &Path, config: &Config) {
    if config.is_quiet() {
        return;
    }
    println!(
        "{} {}",
        "Working in:".cyan(),
        path.display().to_string().white().bold()
    )
}

/// Prints the result of a successful run.
///
/// The dry-run status listing is printed even in quiet mode: it is the
/// whole point of a dry run.
pub fn print_outcome(outcome: &PublishOutcome, config: &Config) {
    match outcome {
        PublishOutcome::Clean => {
            if !config.is_quiet() {
                println!("{}", "nothing to commit".dimmed());
            }
        }
        PublishOutcome::DryRun { status } => {
            if !config.is_quiet() {
                println!("{}", dry_run_notice().yellow().bold());
            }
            println!("{}", status);
        }
        PublishOutcome::Published { message } => {
            if !config.is_quiet() {
                println!("{} committed and pushed: {}", "✓".green(), message.white());
            }
        }
    }
}

/// Reports a failed run on stderr.
///
/// Git failures show git's own diagnostic text unchanged. Anything else
/// (git missing, bad root) prints the error chain.
pub fn print_failure(error: &anyhow::Error, config: &Config) {
    match error.downcast_ref::<GitError>() {
        Some(git_error) => {
            let diagnostic = git_error.diagnostic().trim_end();
            if !diagnostic.is_empty() {
                eprintln!("{}", diagnostic);
            }
            if config.is_verbose() {
                eprintln!("  {} {:#}", "✗".red(), error);
            }
        }
        None => eprintln!("{} {:#}", "error:".red().bold(), error),
    }
}

/// Process exit status for a failed run.
///
/// Git failures keep git's own exit code; everything else exits 1.
#[must_use]
pub fn exit_status(error: &anyhow::Error) -> u8 {
    let code = error
        .downcast_ref::<GitError>()
        .map_or(GENERIC_FAILURE_CODE, GitError::exit_code);
    failure_status(code)
}

// Exit statuses are a single byte, and 0 would read as success.
fn failure_status(code: i32) -> u8 {
    match u8::try_from(code) {
        Ok(0) | Err(_) => 1,
        Ok(code) => code,
    }
}

fn dry_run_notice() -> String {
    format!("{}={}: skipping commit and push. Pending changes:", DRY_RUN_ENV, DRY_RUN_ENABLED)
}

fn format_step_message(step: PublishStep) -> &'static str {
    match step {
        PublishStep::CheckingStatus => "Checking for changes...",
        PublishStep::Staging => "Staging README.md...",
        PublishStep::Committing => "Committing...",
        PublishStep::Pushing => "Pushing to remote...",
    }
}
