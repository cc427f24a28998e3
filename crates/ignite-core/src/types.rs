//! Core types for experiment scaffolding
//!
//! - [`ExperimentType`]: the closed set of supported experiment kinds
//! - [`CreateRequest`]: validated inputs flowing CLI → handler
//! - [`IgniteConfig`]: explicit configuration threaded into the handler

use crate::error::ScaffoldError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Supported experiment kinds
///
/// Immutable, defined at process start. Each kind carries the display label
/// shown when prompting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperimentType {
    /// Prompt Flow workspace scaffolded through the external flow tool
    PromptFlow,
    /// Jupyter notebook experiment (no scaffolding behavior yet)
    JupyterNotebook,
    /// Prompty experiment (no scaffolding behavior yet)
    Prompty,
    /// Plain Python experiment (no scaffolding behavior yet)
    Python,
}

impl ExperimentType {
    /// Every supported kind, in prompting order
    pub const ALL: [ExperimentType; 4] = [
        ExperimentType::PromptFlow,
        ExperimentType::JupyterNotebook,
        ExperimentType::Prompty,
        ExperimentType::Python,
    ];

    /// Human-readable label used in prompts
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::PromptFlow => "Hello Prompt Flow",
            Self::JupyterNotebook => "Hello Jupyter Notebook",
            Self::Prompty => "Hello Prompty",
            Self::Python => "Hello Python",
        }
    }

    /// Stable identifier used on the command line
    #[inline]
    #[must_use]
    pub fn id(&self) -> &'static str {
        match self {
            Self::PromptFlow => "prompt-flow",
            Self::JupyterNotebook => "jupyter-notebook",
            Self::Prompty => "prompty",
            Self::Python => "python",
        }
    }
}

impl fmt::Display for ExperimentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExperimentType {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "prompt-flow" | "promptflow" => Ok(Self::PromptFlow),
            "jupyter-notebook" | "jupyter" | "notebook" => Ok(Self::JupyterNotebook),
            "prompty" => Ok(Self::Prompty),
            "python" => Ok(Self::Python),
            _ => Err(ScaffoldError::UnknownType(s.to_string())),
        }
    }
}

/// Validated inputs for one experiment creation
#[derive(Debug, Clone)]
pub struct CreateRequest {
    /// Full experiment name (`issue-<number>-<name>` form)
    pub name: String,
    /// Which creator to dispatch to
    pub kind: ExperimentType,
    /// Target directory, normalized by the handler
    pub dir: String,
}

impl CreateRequest {
    /// Create a new request
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ExperimentType, dir: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            dir: dir.into(),
        }
    }
}

/// Explicit configuration for the handler
///
/// Sourced once by the caller and passed by value; the handler never reads
/// hidden global state.
#[derive(Debug, Clone)]
pub struct IgniteConfig {
    /// Executable name of the external flow-initialization tool
    pub flow_tool: String,
    /// Seconds before an external command is failed and its child killed
    pub command_timeout_secs: u64,
    /// Markdown template stamped into each new experiment
    pub template_path: PathBuf,
    /// Optional connection template registered before flow creation
    pub connection_template: Option<PathBuf>,
    /// Settings file loaded into the process environment at bootstrap
    pub settings_path: PathBuf,
}

impl IgniteConfig {
    /// Create the default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a different flow tool executable
    #[inline]
    #[must_use]
    pub fn with_flow_tool(mut self, tool: impl Into<String>) -> Self {
        self.flow_tool = tool.into();
        self
    }

    /// With a different command timeout
    #[inline]
    #[must_use]
    pub fn with_command_timeout(mut self, secs: u64) -> Self {
        self.command_timeout_secs = secs;
        self
    }

    /// With a different documentation template
    #[inline]
    #[must_use]
    pub fn with_template_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.template_path = path.into();
        self
    }

    /// With a connection template to register before flow creation
    #[inline]
    #[must_use]
    pub fn with_connection_template(mut self, path: impl Into<PathBuf>) -> Self {
        self.connection_template = Some(path.into());
        self
    }

    /// With a different settings file
    #[inline]
    #[must_use]
    pub fn with_settings_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_path = path.into();
        self
    }
}

impl Default for IgniteConfig {
    fn default() -> Self {
        Self {
            flow_tool: "pf".to_string(),
            command_timeout_secs: 30,
            template_path: PathBuf::from("./templates/TEMPLATE-README.md"),
            connection_template: None,
            settings_path: PathBuf::from(".env"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_labels() {
        assert_eq!(ExperimentType::PromptFlow.label(), "Hello Prompt Flow");
        assert_eq!(
            ExperimentType::JupyterNotebook.label(),
            "Hello Jupyter Notebook"
        );
        assert_eq!(ExperimentType::Prompty.label(), "Hello Prompty");
        assert_eq!(ExperimentType::Python.label(), "Hello Python");
    }

    #[test]
    fn type_from_str_accepts_ids_and_aliases() {
        assert_eq!(
            "prompt-flow".parse::<ExperimentType>().unwrap(),
            ExperimentType::PromptFlow
        );
        assert_eq!(
            "Prompt_Flow".parse::<ExperimentType>().unwrap(),
            ExperimentType::PromptFlow
        );
        assert_eq!(
            "notebook".parse::<ExperimentType>().unwrap(),
            ExperimentType::JupyterNotebook
        );
        assert_eq!(
            "python".parse::<ExperimentType>().unwrap(),
            ExperimentType::Python
        );
    }

    #[test]
    fn type_from_str_rejects_unknown() {
        let err = "csv".parse::<ExperimentType>().unwrap_err();
        assert!(err.to_string().contains("csv"));
    }

    #[test]
    fn all_covers_every_kind() {
        assert_eq!(ExperimentType::ALL.len(), 4);
        for kind in ExperimentType::ALL {
            assert_eq!(kind.id().parse::<ExperimentType>().unwrap(), kind);
        }
    }

    #[test]
    fn config_defaults() {
        let config = IgniteConfig::new();
        assert_eq!(config.flow_tool, "pf");
        assert_eq!(config.command_timeout_secs, 30);
        assert!(config.connection_template.is_none());
    }

    #[test]
    fn config_builder() {
        let config = IgniteConfig::new()
            .with_flow_tool("pfx")
            .with_command_timeout(5)
            .with_connection_template("./connections/azure_openai.yaml");
        assert_eq!(config.flow_tool, "pfx");
        assert_eq!(config.command_timeout_secs, 5);
        assert!(config.connection_template.is_some());
    }
}
