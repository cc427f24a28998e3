//! Error types for Ignite Core
//!
//! Provides the failure taxonomy for:
//! - Experiment name validation
//! - Type lookups at the CLI boundary
//! - External command execution (non-zero exit, timeout, spawn failure)
//! - Template, directory and settings-file I/O

use std::path::PathBuf;

/// Main scaffolding error type
#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    /// Experiment name does not match the naming convention
    #[error("invalid experiment name `{name}`: expected issue-{{number}}-{{name}}, i.e. issue-123-name, issue-456-name-123")]
    InvalidName {
        /// The rejected name
        name: String,
    },

    /// Type string not present in the registry
    #[error("unsupported experiment type: {0}")]
    UnknownType(String),

    /// External command failed
    #[error("command failed: {0}")]
    Command(#[from] CommandError),

    /// Documentation template could not be read or written
    #[error("template error at {path}: {source}")]
    Template {
        /// Template or destination path
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: std::io::Error,
    },

    /// Target directory could not be created
    #[error("directory error at {path}: {source}")]
    Dir {
        /// The directory being created
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: std::io::Error,
    },

    /// Settings file could not be read
    #[error("settings error at {path}: {source}")]
    Settings {
        /// The settings file path
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: std::io::Error,
    },
}

impl ScaffoldError {
    /// Check if the error came from input validation
    #[inline]
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidName { .. } | Self::UnknownType(_))
    }
}

/// External command errors
///
/// Every variant carries the original command string so failures can be
/// reported with the exact text that was executed.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Command returned a non-zero exit status
    #[error("error executing command: {command} (exit status {code})")]
    Failed {
        /// The command that was executed
        command: String,
        /// Exit status reported by the shell
        code: i32,
        /// Captured stderr
        stderr: String,
    },

    /// Timeout elapsed; the child process has been killed
    #[error("command timed out after {timeout_secs}s: {command}")]
    TimedOut {
        /// The command that was executed
        command: String,
        /// The timeout that elapsed
        timeout_secs: u64,
    },

    /// The shell could not be spawned
    #[error("failed to spawn command `{command}`: {source}")]
    Spawn {
        /// The command that was attempted
        command: String,
        /// Underlying cause
        #[source]
        source: std::io::Error,
    },
}

impl CommandError {
    /// The command string that produced this error
    #[inline]
    #[must_use]
    pub fn command(&self) -> &str {
        match self {
            Self::Failed { command, .. }
            | Self::TimedOut { command, .. }
            | Self::Spawn { command, .. } => command,
        }
    }
}
