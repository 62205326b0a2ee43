//! Git command wrappers.
//!
//! This module provides a thin wrapper around git CLI commands,
//! handling command execution and error formatting.

use anyhow::Context;
use colored::Colorize;
use std::path::Path;

/// Callback invoked with the arguments of every git command before it runs.
pub type GitLogger = fn(&[&str]);

/// Logs each git invocation to stderr. Selected in verbose mode.
pub fn verbose_logger(args: &[&str]) {
    eprintln!("  {} {}", "$".dimmed(), format!("git {}", args.join(" ")).dimmed());
}

pub fn no_op_logger(_args: &[&str]) {}

/// A git command that ran but exited unsuccessfully.
///
/// Carries the child's exit code and output verbatim so the caller can
/// surface git's own diagnostics and status instead of wrapping them.
#[derive(Debug, thiserror::Error)]
#[error(
    "git {command} failed ({}): {}",
    describe_code(.code),
    pick_diagnostic(.stdout, .stderr).trim()
)]
pub struct GitError {
    pub command: String,
    /// `None` when the child was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl GitError {
    /// Git's own explanation of the failure.
    ///
    /// Some commands (`git commit` with nothing staged) report on stdout.
    #[must_use]
    pub fn diagnostic(&self) -> &str {
        pick_diagnostic(&self.stdout, &self.stderr)
    }

    /// Exit code to propagate from the process.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self.code {
            Some(code) if code != 0 => code,
            _ => crate::constants::GENERIC_FAILURE_CODE,
        }
    }
}

fn pick_diagnostic<'a>(stdout: &'a str, stderr: &'a str) -> &'a str {
    if stderr.trim().is_empty() {
        stdout
    } else {
        stderr
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

fn exec(repo: &Path, args: &[&str], logger: GitLogger) -> anyhow::Result<String> {
    logger(args);

    let output = std::process::Command::new("git")
        .current_dir(repo)
        .args(args)
        .output()
        .with_context(|| format!("Failed to spawn git command: git {}", args.join(" ")))?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    } else {
        Err(GitError {
            command: args.join(" "),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
        .into())
    }
}

/// Runs `git <args>` in `repo` and returns its trimmed stdout.
///
/// Unlogged escape hatch for setup and inspection commands (the test
/// helpers build fixture repositories with it); the publish workflow goes
/// through the named wrappers below.
pub fn run_git(repo: &Path, args: &[&str]) -> anyhow::Result<String> {
    exec(repo, args, no_op_logger).map(|output| output.trim().to_string())
}

fn validate_pathspec(path: &str) -> anyhow::Result<()> {
    if path.is_empty() || path.starts_with('-') || path.contains('\0') || path.contains('\n') {
        anyhow::bail!("Invalid path: {:?}", path);
    }
    Ok(())
}

/// Short-format status listing, one entry per line.
///
/// Leading spaces are significant in porcelain output (` M file`), so only
/// the trailing newline is stripped. Empty when the working tree is clean.
pub fn status_porcelain(repo: &Path, logger: GitLogger) -> anyhow::Result<String> {
    exec(repo, &["status", "--porcelain"], logger)
        .map(|output| output.trim_end_matches(['\n', '\r']).to_string())
        .context("Failed to check working tree status")
}

pub fn add(repo: &Path, path: &str, logger: GitLogger) -> anyhow::Result<()> {
    validate_pathspec(path)?;
    exec(repo, &["add", "--", path], logger)
        .with_context(|| format!("Failed to stage '{}'", path))?;
    Ok(())
}

/// Creates a commit from the index and returns git's summary output.
pub fn commit(repo: &Path, message: &str, logger: GitLogger) -> anyhow::Result<String> {
    if message.trim().is_empty() {
        anyhow::bail!("Commit message must not be empty");
    }
    exec(repo, &["commit", "-m", message], logger)
        .map(|output| output.trim().to_string())
        .context("Failed to create commit")
}

/// Pushes the current branch to its configured upstream.
pub fn push(repo: &Path, logger: GitLogger) -> anyhow::Result<()> {
    exec(repo, &["push"], logger).context("Failed to push to remote")?;
    Ok(())
}
