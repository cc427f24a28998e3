//! Experiment type registry
//!
//! Maps each [`ExperimentType`] to the creator that scaffolds it. Pure
//! table dispatch; validation happens in the handler.

use crate::command::CommandRunner;
use crate::experiment::{
    Experiment, JupyterNotebookExperiment, PromptFlowExperiment, PromptyExperiment,
    PythonExperiment,
};
use crate::types::{ExperimentType, IgniteConfig};
use std::sync::Arc;

/// Factory handing out creators wired with the shared runner and config
pub struct ExperimentRegistry {
    config: IgniteConfig,
    runner: Arc<dyn CommandRunner>,
}

impl ExperimentRegistry {
    /// Create a registry over a runner and configuration
    #[must_use]
    pub fn new(config: IgniteConfig, runner: Arc<dyn CommandRunner>) -> Self {
        Self { config, runner }
    }

    /// Every kind this registry can resolve, in prompting order
    #[inline]
    #[must_use]
    pub fn kinds(&self) -> &'static [ExperimentType] {
        &ExperimentType::ALL
    }

    /// Instantiate the creator for `kind`
    #[must_use]
    pub fn resolve(&self, kind: ExperimentType, name: &str) -> Box<dyn Experiment> {
        match kind {
            ExperimentType::PromptFlow => Box::new(PromptFlowExperiment::new(
                name,
                &self.config,
                Arc::clone(&self.runner),
            )),
            ExperimentType::JupyterNotebook => Box::new(JupyterNotebookExperiment),
            ExperimentType::Prompty => Box::new(PromptyExperiment),
            ExperimentType::Python => Box::new(PythonExperiment),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::MockCommandRunner;

    fn registry() -> ExperimentRegistry {
        ExperimentRegistry::new(IgniteConfig::new(), Arc::new(MockCommandRunner::new()))
    }

    #[test]
    fn resolves_every_kind_to_its_creator() {
        let registry = registry();
        for kind in ExperimentType::ALL {
            let experiment = registry.resolve(kind, "issue-1-probe");
            assert_eq!(experiment.kind(), kind);
        }
    }

    #[test]
    fn kinds_enumerates_all_entries() {
        assert_eq!(registry().kinds().len(), 4);
    }
}
