//! Process environment bootstrap
//!
//! Performed once per process before any experiment is created:
//! - verify the isolated runtime environment marker, attempting one
//!   remediation command when it is absent
//! - load the local settings file into the process environment
//!
//! Settings are sourced into an explicit [`Settings`] value first; writing
//! them into the process environment is a separate, deliberate step.

use crate::command::CommandRunner;
use crate::error::ScaffoldError;
use std::path::Path;

/// Environment variable marking an active isolated runtime
pub const RUNTIME_ENV_MARKER: &str = "VIRTUAL_ENV";

/// Single remediation attempt when the marker is missing
const RUNTIME_ENV_REMEDIATION: &str = "source .venv/bin/activate";

/// Key/value pairs sourced from the settings file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    vars: Vec<(String, String)>,
}

impl Settings {
    /// Parse line-oriented `KEY=VALUE` content
    ///
    /// Blank lines and `#` comments are skipped. The first `=` delimits the
    /// key, so values may contain `=`. Malformed lines are skipped with a
    /// warning without aborting the remaining lines.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut vars = Vec::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match line.split_once('=') {
                Some((key, value)) if !key.trim().is_empty() => {
                    vars.push((key.trim().to_string(), value.to_string()));
                }
                _ => tracing::warn!("Skipping malformed settings line: {}", line),
            }
        }
        Self { vars }
    }

    /// Load the settings file; `None` when it does not exist
    pub fn load(path: &Path) -> Result<Option<Self>, ScaffoldError> {
        if !path.exists() {
            tracing::warn!(
                "No settings file found at {}. Expected KEY=VALUE lines such as \
                 AZURE_OPENAPI_KEY, AZURE_OPENAPI_ENDPOINT and AZURE_OPENAPI_VERSION",
                path.display()
            );
            return Ok(None);
        }
        let content =
            std::fs::read_to_string(path).map_err(|source| ScaffoldError::Settings {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Some(Self::parse(&content)))
    }

    /// Export every pair into the process environment
    pub fn export(&self) {
        for (key, value) in &self.vars {
            tracing::debug!("Setting environment variable: {}", key);
            std::env::set_var(key, value);
        }
    }

    /// Look up a sourced value without touching the environment
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The sourced pairs, in file order
    #[inline]
    #[must_use]
    pub fn vars(&self) -> &[(String, String)] {
        &self.vars
    }

    /// Number of sourced pairs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether nothing was sourced
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Check the isolated runtime marker, attempting one remediation if absent
///
/// Returns whether the marker is present afterwards. Remediation failure is
/// logged, not fatal.
pub async fn ensure_runtime_env(runner: &dyn CommandRunner) -> bool {
    tracing::debug!("Checking for an active isolated runtime environment");
    if let Ok(path) = std::env::var(RUNTIME_ENV_MARKER) {
        tracing::info!("Isolated runtime environment active: {}", path);
        return true;
    }

    tracing::warn!("Not in an isolated runtime environment, connecting to it");
    if let Err(error) = runner.run(RUNTIME_ENV_REMEDIATION).await {
        tracing::warn!("Runtime environment remediation failed: {}", error);
    }
    std::env::var(RUNTIME_ENV_MARKER).is_ok()
}

/// Full bootstrap: runtime check plus settings export
pub async fn bootstrap(
    settings_path: &Path,
    runner: &dyn CommandRunner,
) -> Result<(), ScaffoldError> {
    ensure_runtime_env(runner).await;
    if let Some(settings) = Settings::load(settings_path)? {
        settings.export();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{CommandResult, MockCommandRunner};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn parse_reads_key_value_lines() {
        let settings = Settings::parse("VARNAME=value\n");
        assert_eq!(settings.get("VARNAME"), Some("value"));
        assert_eq!(settings.len(), 1);
    }

    #[test]
    fn parse_skips_comments_and_blanks() {
        let settings = Settings::parse("# comment\n\nKEY=value\n   \n# other\n");
        assert_eq!(settings.len(), 1);
        assert_eq!(settings.get("KEY"), Some("value"));
    }

    #[test]
    fn parse_splits_on_first_equals() {
        let settings = Settings::parse("ENDPOINT=https://host/?q=1&r=2\n");
        assert_eq!(settings.get("ENDPOINT"), Some("https://host/?q=1&r=2"));
    }

    #[test]
    fn parse_skips_malformed_lines_and_keeps_going() {
        let settings = Settings::parse("GOOD=1\nmalformed line\n=nokey\nALSO_GOOD=2\n");
        assert_eq!(settings.len(), 2);
        assert_eq!(settings.get("GOOD"), Some("1"));
        assert_eq!(settings.get("ALSO_GOOD"), Some("2"));
    }

    #[test]
    fn export_sets_process_environment() {
        let settings = Settings::parse("IGNITE_BOOTSTRAP_TEST_VAR=value\n");
        settings.export();
        assert_eq!(
            std::env::var("IGNITE_BOOTSTRAP_TEST_VAR").unwrap(),
            "value"
        );
        std::env::remove_var("IGNITE_BOOTSTRAP_TEST_VAR");
    }

    #[test]
    fn load_missing_file_is_none() {
        let workdir = tempdir().unwrap();
        let loaded = Settings::load(&workdir.path().join(".env")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn load_reads_file_content() {
        let workdir = tempdir().unwrap();
        let path = workdir.path().join(".env");
        std::fs::write(&path, "A=1\nB=2\n").unwrap();

        let settings = Settings::load(&path).unwrap().unwrap();
        assert_eq!(settings.len(), 2);
        assert_eq!(settings.get("B"), Some("2"));
    }

    // Tests below mutate RUNTIME_ENV_MARKER; serialize them.
    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    #[tokio::test]
    async fn runtime_env_present_skips_remediation() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var(RUNTIME_ENV_MARKER, "/path/to/venv");
        let mut runner = MockCommandRunner::new();
        runner.expect_run().times(0);

        assert!(ensure_runtime_env(&runner).await);
        std::env::remove_var(RUNTIME_ENV_MARKER);
    }

    #[tokio::test]
    async fn runtime_env_absent_attempts_remediation_once() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::remove_var(RUNTIME_ENV_MARKER);
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|cmd| cmd == "source .venv/bin/activate")
            .times(1)
            .returning(|_| Ok(CommandResult::ok()));

        ensure_runtime_env(&runner).await;
    }
}
