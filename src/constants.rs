//! Application-wide constants.
//!
//! The fixed file path, environment variable names and message format used
//! by the publisher.

/// The only file the publisher stages and commits, relative to the root.
pub const README_FILE: &str = "README.md";

/// Environment variable that switches to read-only reporting mode.
pub const DRY_RUN_ENV: &str = "DRY_RUN";

/// The exact value `DRY_RUN` must hold to enable dry-run mode.
/// Anything else, including `true` or `yes`, is normal mode.
pub const DRY_RUN_ENABLED: &str = "1";

/// Environment variable overriding the repository root (same as `--root`).
pub const ROOT_ENV: &str = "README_PUBLISH_ROOT";

/// Commit subject prefix; the date is appended in parentheses.
pub const COMMIT_MESSAGE_PREFIX: &str = "chore: update README";

/// Date format embedded in the commit message.
pub const COMMIT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Progress spinner tick interval in milliseconds.
pub const PROGRESS_TICK_MS: u64 = 80;

/// Exit code used when a failure carries no git exit status.
pub const GENERIC_FAILURE_CODE: i32 = 1;
