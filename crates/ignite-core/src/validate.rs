//! Input validation and path normalization

use crate::error::ScaffoldError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Naming convention: `issue-<number>-<lowercase-alnum-and-hyphen>`
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^issue-[0-9]+-[a-z0-9-]+$").expect("name pattern is valid"));

/// Check a proposed experiment name against the naming convention
#[inline]
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}

/// Validate a name, returning a descriptive error for the non-interactive path
pub fn validate_name(name: &str) -> Result<(), ScaffoldError> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(ScaffoldError::InvalidName {
            name: name.to_string(),
        })
    }
}

/// Normalize a target directory to trailing-slash form
///
/// Idempotent: `mydir`, `./mydir` and `./mydir/` all normalize to `./mydir/`;
/// absolute paths keep their root (`/data/flows` → `/data/flows/`).
#[must_use]
pub fn normalize_dir(dir: &str) -> String {
    let mut out = if dir.starts_with('/') || dir.starts_with('.') {
        dir.to_string()
    } else {
        format!("./{dir}")
    };
    if !out.ends_with('/') {
        out.push('/');
    }
    out
}
