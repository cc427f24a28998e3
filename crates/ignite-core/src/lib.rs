//! Ignite Core - experiment scaffolding
//!
//! The library behind the `ignite` CLI:
//! - Validates experiment names against the naming convention
//! - Dispatches a type registry entry to its concrete creator
//! - Shells out to the external flow-initialization tool
//! - Stamps documentation from a Markdown template
//! - Bootstraps the process environment from a settings file
//!
//! # Example
//!
//! ```rust,ignore
//! use ignite_core::{CreateRequest, ExperimentHandler, ExperimentType, IgniteConfig};
//!
//! # async fn example() {
//! let handler = ExperimentHandler::with_config(IgniteConfig::new());
//!
//! let request = CreateRequest::new(
//!     "issue-123-prompt-variants",
//!     ExperimentType::PromptFlow,
//!     "./app/flow",
//! );
//! let outcome = handler.create(&request).await;
//!
//! println!("{:?}", outcome);
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod bootstrap;
pub mod command;
pub mod error;
pub mod experiment;
pub mod handler;
pub mod registry;
pub mod types;
pub mod validate;

// Re-exports for convenience
pub use bootstrap::{ensure_runtime_env, Settings, RUNTIME_ENV_MARKER};
pub use command::{CommandResult, CommandRunner, ShellRunner};
pub use error::{CommandError, ScaffoldError};
pub use experiment::{
    CreateOutcome, Experiment, JupyterNotebookExperiment, PromptFlowExperiment,
    PromptyExperiment, PythonExperiment,
};
pub use handler::{ExperimentHandler, ScaffoldOutcome};
pub use registry::ExperimentRegistry;
pub use types::{CreateRequest, ExperimentType, IgniteConfig};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with Ignite Core
    pub use crate::{
        CommandRunner, CreateOutcome, CreateRequest, ExperimentHandler, ExperimentType,
        IgniteConfig, ScaffoldOutcome, ShellRunner,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
