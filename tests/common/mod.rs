//! Test infrastructure for readme-publish integration tests.

#![allow(dead_code)]

use anyhow::Result;
use readme_publish::git::run_git;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary git repository for testing.
/// Automatically cleaned up when dropped, along with its remote.
pub struct TestRepo {
    _temp_dir: TempDir,
    remote: Option<TempDir>,
    path: PathBuf,
}

impl TestRepo {
    /// Creates a new test repository with an initial commit on the master branch.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().to_path_buf();

        run_git(&path, &["init", "-b", "master"])?;

        run_git(&path, &["config", "user.email", "test@example.com"])?;
        run_git(&path, &["config", "user.name", "Test User"])?;
        run_git(&path, &["config", "commit.gpgsign", "false"])?;

        std::fs::write(path.join("README.md"), "# Test Repo\n")?;
        run_git(&path, &["add", "README.md"])?;
        run_git(&path, &["commit", "-m", "Initial commit"])?;

        Ok(Self {
            _temp_dir: temp_dir,
            remote: None,
            path,
        })
    }

    /// Creates a test repository whose master branch tracks a bare `origin`.
    pub fn with_remote() -> Result<Self> {
        let remote_dir = TempDir::new()?;
        run_git(remote_dir.path(), &["init", "--bare", "-b", "master"])?;

        let mut local = Self::new()?;
        let remote_path = path_str(remote_dir.path())?;
        run_git(&local.path, &["remote", "add", "origin", remote_path])?;
        run_git(&local.path, &["push", "-u", "origin", "master"])?;

        local.remote = Some(remote_dir);
        Ok(local)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Modifies the tracked README.
    pub fn edit_readme(&self, content: &str) -> Result<()> {
        std::fs::write(self.path.join("README.md"), content)?;
        Ok(())
    }

    /// Creates an untracked file other than the README.
    pub fn make_untracked(&self) -> Result<()> {
        std::fs::write(self.path.join("untracked.txt"), "untracked content\n")?;
        Ok(())
    }

    /// Stops tracking README.md (committed and pushed) but leaves it on disk,
    /// so it shows up as untracked.
    pub fn untrack_readme(&self) -> Result<()> {
        run_git(&self.path, &["rm", "--cached", "README.md"])?;
        run_git(&self.path, &["commit", "-m", "Stop tracking README"])?;
        if self.remote.is_some() {
            run_git(&self.path, &["push"])?;
        }
        Ok(())
    }

    /// Points `origin` at a path that does not exist, so pushes fail.
    pub fn break_remote(&self) -> Result<()> {
        let missing = self.path.join("no-such-remote");
        run_git(
            &self.path,
            &["remote", "set-url", "origin", path_str(&missing)?],
        )?;
        Ok(())
    }

    pub fn commit_count(&self) -> Result<usize> {
        let count = run_git(&self.path, &["rev-list", "--count", "HEAD"])?;
        Ok(count.parse()?)
    }

    pub fn head(&self) -> Result<String> {
        run_git(&self.path, &["rev-parse", "HEAD"])
    }

    pub fn head_subject(&self) -> Result<String> {
        run_git(&self.path, &["log", "-1", "--format=%s"])
    }

    pub fn head_parent(&self) -> Result<String> {
        run_git(&self.path, &["rev-parse", "HEAD~1"])
    }

    /// Files touched by the HEAD commit.
    pub fn head_files(&self) -> Result<Vec<String>> {
        let output = run_git(
            &self.path,
            &["show", "--name-only", "--format=", "HEAD"],
        )?;
        Ok(output.lines().map(str::to_string).collect())
    }

    /// The commit `master` points to on the remote.
    pub fn remote_head(&self) -> Result<String> {
        let remote = self
            .remote
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("test repo has no remote"))?;
        run_git(remote.path(), &["rev-parse", "master"])
    }

    pub fn is_clean(&self) -> Result<bool> {
        Ok(run_git(&self.path, &["status", "--porcelain"])?.is_empty())
    }
}

fn path_str(path: &Path) -> Result<&str> {
    path.to_str()
        .ok_or_else(|| anyhow::anyhow!("non UTF-8 temp path: {}", path.display()))
}
