//! Experiment factory/handler
//!
//! Orchestrates one experiment creation: validate the name, normalize the
//! target directory, resolve the creator through the registry and run it.
//! Every creator error is caught at this boundary and converted into a
//! [`ScaffoldOutcome`]; nothing escapes as a crash.

use crate::command::{CommandRunner, ShellRunner};
use crate::error::ScaffoldError;
use crate::experiment::CreateOutcome;
use crate::registry::ExperimentRegistry;
use crate::types::{CreateRequest, ExperimentType, IgniteConfig};
use crate::validate;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// User-facing result of one handler run
///
/// Partial side effects of a failed creation are not rolled back.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum ScaffoldOutcome {
    /// Experiment scaffolded under `path`
    Created {
        /// Full experiment name
        name: String,
        /// Normalized directory holding the experiment
        path: String,
    },
    /// Recognized kind with no scaffolding behavior yet
    Unsupported {
        /// The requested kind
        kind: ExperimentType,
    },
    /// Creation aborted
    Failed {
        /// User-facing description of the failure
        message: String,
    },
}

impl ScaffoldOutcome {
    /// Exit-code mapping for callers: failures are the only non-clean outcome
    #[inline]
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Resolves a type to a concrete creator and orchestrates creation
pub struct ExperimentHandler {
    registry: ExperimentRegistry,
}

impl ExperimentHandler {
    /// Create a handler over an explicit runner
    #[must_use]
    pub fn new(config: IgniteConfig, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            registry: ExperimentRegistry::new(config, runner),
        }
    }

    /// Create a handler backed by the shell runner the config describes
    #[must_use]
    pub fn with_config(config: IgniteConfig) -> Self {
        let runner = Arc::new(ShellRunner::new(Duration::from_secs(
            config.command_timeout_secs,
        )));
        Self::new(config, runner)
    }

    /// Create one experiment, reporting the outcome instead of failing
    pub async fn create(&self, request: &CreateRequest) -> ScaffoldOutcome {
        match self.try_create(request).await {
            Ok(CreateOutcome::Created) => {
                tracing::info!("Experiment setup complete: {}", request.name);
                ScaffoldOutcome::Created {
                    name: request.name.clone(),
                    path: validate::normalize_dir(&request.dir),
                }
            }
            Ok(CreateOutcome::Unsupported) => {
                tracing::warn!("{} is not implemented yet", request.kind);
                ScaffoldOutcome::Unsupported { kind: request.kind }
            }
            Err(error) => {
                tracing::error!("Experiment creation failed: {}", error);
                ScaffoldOutcome::Failed {
                    message: error.to_string(),
                }
            }
        }
    }

    /// Validation and creation with full error detail
    ///
    /// Non-interactive contract: the first invalid input fails the call;
    /// re-prompting belongs to the CLI.
    pub async fn try_create(
        &self,
        request: &CreateRequest,
    ) -> Result<CreateOutcome, ScaffoldError> {
        validate::validate_name(&request.name)?;
        let dir = validate::normalize_dir(&request.dir);
        let experiment = self.registry.resolve(request.kind, &request.name);
        experiment.create(&dir).await
    }

    /// The registry backing this handler
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &ExperimentRegistry {
        &self.registry
    }
}
