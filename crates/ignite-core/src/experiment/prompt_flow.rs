//! Prompt Flow experiment creator
//!
//! The only variant with real scaffolding behavior:
//! 1. ensure the target directory exists
//! 2. optionally register a Prompt Flow connection
//! 3. run `<tool> flow init` for the new flow directory
//! 4. stamp `README.md` from the documentation template
//!
//! Steps are fail-fast: a failed command aborts the creation and earlier
//! side effects are not rolled back.

use crate::command::CommandRunner;
use crate::error::ScaffoldError;
use crate::experiment::{CreateOutcome, Experiment};
use crate::types::{ExperimentType, IgniteConfig};
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Literal placeholder replaced in the documentation template
const NAME_PLACEHOLDER: &str = "{{name}}";

/// Creator for Prompt Flow experiment workspaces
pub struct PromptFlowExperiment {
    name: String,
    flow_tool: String,
    template_path: PathBuf,
    connection_template: Option<PathBuf>,
    runner: Arc<dyn CommandRunner>,
}

impl PromptFlowExperiment {
    /// Create a creator for `name`, wired to the shared runner
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        config: &IgniteConfig,
        runner: Arc<dyn CommandRunner>,
    ) -> Self {
        Self {
            name: name.into(),
            flow_tool: config.flow_tool.clone(),
            template_path: config.template_path.clone(),
            connection_template: config.connection_template.clone(),
            runner,
        }
    }

    fn ensure_dir(&self, dir: &str) -> Result<(), ScaffoldError> {
        fs::create_dir_all(dir).map_err(|source| ScaffoldError::Dir {
            path: PathBuf::from(dir),
            source,
        })
    }

    /// Register the shared connection for this experiment
    async fn create_connection(&self) -> Result<(), ScaffoldError> {
        let Some(template) = &self.connection_template else {
            return Ok(());
        };
        tracing::info!("Creating the Prompt Flow connection");
        let command = format!(
            "{} connection create -f {} --set api_key=\"$AZURE_OPENAPI_KEY\" \
             api_base=\"$AZURE_OPENAPI_ENDPOINT\" api_version=\"$AZURE_OPENAPI_VERSION\" \
             --name {}-connection",
            self.flow_tool,
            template.display(),
            self.name,
        );
        self.runner.run(&command).await?;
        Ok(())
    }

    /// Shell out to the flow-init tool for the new flow directory
    async fn create_resources(&self, dir: &str) -> Result<(), ScaffoldError> {
        tracing::info!("Creating the Prompt Flow");
        let command = format!(
            "{} flow init --flow \"{}{}\" --type standard",
            self.flow_tool, dir, self.name,
        );
        self.runner.run(&command).await?;
        Ok(())
    }

    /// Stamp `README.md` from the documentation template
    fn create_documentation(&self, dir: &str) -> Result<(), ScaffoldError> {
        tracing::info!("Creating the experiment documentation");
        let template =
            fs::read_to_string(&self.template_path).map_err(|source| ScaffoldError::Template {
                path: self.template_path.clone(),
                source,
            })?;
        let rendered = template.replace(NAME_PLACEHOLDER, &self.name);
        let readme = Path::new(dir).join(&self.name).join("README.md");
        fs::write(&readme, rendered).map_err(|source| ScaffoldError::Template {
            path: readme.clone(),
            source,
        })?;
        Ok(())
    }
}

#[async_trait]
impl Experiment for PromptFlowExperiment {
    fn kind(&self) -> ExperimentType {
        ExperimentType::PromptFlow
    }

    async fn create(&self, dir: &str) -> Result<CreateOutcome, ScaffoldError> {
        self.ensure_dir(dir)?;
        self.create_connection().await?;
        self.create_resources(dir).await?;
        self.create_documentation(dir)?;
        Ok(CreateOutcome::Created)
    }
}
