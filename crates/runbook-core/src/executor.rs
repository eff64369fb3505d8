//! Runbook executor.
//!
//! A run is a single linear pass: descriptors are dispatched strictly in
//! document order and every dispatch yields exactly one outcome. Only an
//! unusable document aborts a run; per-action failures are recorded in the
//! result.

use crate::document::{load_yaml, RunbookDocument};
use crate::error::Result;
use crate::outcome::ExecutionResult;
use crate::registry::ActionRegistry;
use serde_yaml::Value;
use std::path::Path;

/// Drives runs against a registry fixed at construction time.
#[derive(Debug, Clone)]
pub struct Executor {
    registry: ActionRegistry,
}

impl Executor {
    pub fn new(registry: ActionRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    /// Run a generic document tree.
    ///
    /// Fails with `InvalidDocument` only when the tree is not a mapping.
    pub fn run(&self, document: &Value) -> Result<ExecutionResult> {
        let document = RunbookDocument::from_value(document)?;
        Ok(self.run_document(&document))
    }

    /// Load a YAML runbook from disk and run it.
    pub fn run_file(&self, path: &Path) -> Result<ExecutionResult> {
        tracing::debug!(path = %path.display(), "loading runbook");
        self.run(&load_yaml(path)?)
    }

    pub fn run_document(&self, document: &RunbookDocument) -> ExecutionResult {
        tracing::info!(actions = document.len(), "starting runbook");
        let result: ExecutionResult = document
            .actions
            .iter()
            .map(|descriptor| self.registry.dispatch(descriptor))
            .collect();
        tracing::info!(
            succeeded = result.succeeded(),
            failed = result.failed(),
            "runbook finished"
        );
        result
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new(ActionRegistry::with_defaults())
    }
}
