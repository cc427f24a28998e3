//! Experiment capability and variants
//!
//! A closed set of creators behind a single `create(dir)` capability.
//! Variants without scaffolding behavior yet return an explicit
//! [`CreateOutcome::Unsupported`] instead of failing the whole run.

use crate::error::ScaffoldError;
use crate::types::ExperimentType;
use async_trait::async_trait;

mod prompt_flow;

pub use prompt_flow::PromptFlowExperiment;

/// Result of one creator run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// All side effects for the variant completed
    Created,
    /// Variant recognized but has no scaffolding behavior yet
    Unsupported,
}

/// A polymorphic unit of scaffolding work
///
/// The only externally visible effects of a creator are the files and
/// directories it produces and the commands it runs.
#[async_trait]
pub trait Experiment: Send + Sync {
    /// Which registry entry this creator serves
    fn kind(&self) -> ExperimentType;

    /// Perform all side effects for this experiment under `dir`
    ///
    /// `dir` is pre-normalized to trailing-slash form by the handler.
    async fn create(&self, dir: &str) -> Result<CreateOutcome, ScaffoldError>;
}

/// Jupyter notebook experiment (no scaffolding behavior yet)
#[derive(Debug, Clone, Copy, Default)]
pub struct JupyterNotebookExperiment;

#[async_trait]
impl Experiment for JupyterNotebookExperiment {
    fn kind(&self) -> ExperimentType {
        ExperimentType::JupyterNotebook
    }

    async fn create(&self, _dir: &str) -> Result<CreateOutcome, ScaffoldError> {
        Ok(CreateOutcome::Unsupported)
    }
}

/// Prompty experiment (no scaffolding behavior yet)
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptyExperiment;

#[async_trait]
impl Experiment for PromptyExperiment {
    fn kind(&self) -> ExperimentType {
        ExperimentType::Prompty
    }

    async fn create(&self, _dir: &str) -> Result<CreateOutcome, ScaffoldError> {
        Ok(CreateOutcome::Unsupported)
    }
}

/// Plain Python experiment (no scaffolding behavior yet)
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonExperiment;

#[async_trait]
impl Experiment for PythonExperiment {
    fn kind(&self) -> ExperimentType {
        ExperimentType::Python
    }

    async fn create(&self, _dir: &str) -> Result<CreateOutcome, ScaffoldError> {
        Ok(CreateOutcome::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn unsupported_variants_report_unsupported() {
        assert_eq!(
            JupyterNotebookExperiment.create("./flows/").await.unwrap(),
            CreateOutcome::Unsupported
        );
        assert_eq!(
            PromptyExperiment.create("./flows/").await.unwrap(),
            CreateOutcome::Unsupported
        );
        assert_eq!(
            PythonExperiment.create("./flows/").await.unwrap(),
            CreateOutcome::Unsupported
        );
    }

    #[tokio::test]
    async fn unsupported_variants_touch_nothing() {
        let workdir = tempdir().unwrap();
        let dir = format!("{}/flows/", workdir.path().display());

        PythonExperiment.create(&dir).await.unwrap();

        assert!(
            !std::path::Path::new(&dir).exists(),
            "unsupported creator must not create directories"
        );
        assert_eq!(std::fs::read_dir(workdir.path()).unwrap().count(), 0);
    }

    #[test]
    fn kinds_match_registry_entries() {
        assert_eq!(
            JupyterNotebookExperiment.kind(),
            ExperimentType::JupyterNotebook
        );
        assert_eq!(PromptyExperiment.kind(), ExperimentType::Prompty);
        assert_eq!(PythonExperiment.kind(), ExperimentType::Python);
    }
}
