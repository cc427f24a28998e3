//! Shell command execution
//!
//! The single boundary around external processes:
//! - commands run through `sh -c` with the inherited environment
//! - stdout/stderr are captured, surfaced only inside errors
//! - a timeout bounds every invocation; the child is killed on expiry
//!
//! Callers must treat this as an untrusted, observable boundary — whatever
//! the command does to the filesystem has already happened by the time an
//! error is reported.

use crate::error::CommandError;
use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time;

/// Captured result of one command invocation
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit status reported by the shell
    pub code: i32,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
}

impl CommandResult {
    /// A zero-exit result with no captured output
    #[inline]
    #[must_use]
    pub fn ok() -> Self {
        Self {
            code: 0,
            stdout: String::new(),
            stderr: String::new(),
        }
    }
}

/// Boundary for external command execution
///
/// Creators and the bootstrap depend on this trait rather than on
/// [`ShellRunner`] so tests can substitute a recording stub.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run a single shell command to completion
    ///
    /// Each command is attempted exactly once; there are no retries.
    async fn run(&self, command: &str) -> Result<CommandResult, CommandError>;
}

/// Runner backed by `sh -c`
#[derive(Debug, Clone)]
pub struct ShellRunner {
    timeout: Duration,
}

impl ShellRunner {
    /// Default bound on a single command invocation
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Create a runner with an explicit timeout
    #[inline]
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new(Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS))
    }
}

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(&self, command: &str) -> Result<CommandResult, CommandError> {
        tracing::debug!("Running command: {}", command);

        let child = Command::new("sh")
            .arg("-c")
            .arg(command)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // dropping the wait future on timeout must also kill the child
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| CommandError::Spawn {
                command: command.to_string(),
                source,
            })?;

        let output = match time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(waited) => waited.map_err(|source| CommandError::Spawn {
                command: command.to_string(),
                source,
            })?,
            Err(_) => {
                tracing::warn!("Command timed out and was killed: {}", command);
                return Err(CommandError::TimedOut {
                    command: command.to_string(),
                    timeout_secs: self.timeout.as_secs(),
                });
            }
        };

        let code = output.status.code().unwrap_or(-1);
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            tracing::debug!("Command stderr: {}", stderr.trim_end());
            return Err(CommandError::Failed {
                command: command.to_string(),
                code,
                stderr,
            });
        }

        Ok(CommandResult {
            code,
            stdout,
            stderr,
        })
    }
}
