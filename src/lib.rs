//! README publisher library.
//!
//! Commits and pushes a repository's README when the working tree has
//! pending changes:
//! - Checking working tree status
//! - Reporting pending changes in dry-run mode
//! - Staging README.md and committing with a dated message
//! - Pushing to the current branch's upstream

pub mod cli;
pub mod config;
pub mod constants;
pub mod git;
pub mod output;
pub mod publish;
