//! Action registry: maps an action kind to the handler that executes it.
//!
//! `dispatch` is the failure-isolation boundary. Unknown kinds, handler
//! errors, and handler panics all become an [`Outcome`]; nothing escapes to
//! the caller, so one bad action never aborts the batch.

use crate::document::{ActionDescriptor, Params};
use crate::error::ActionError;
use crate::outcome::Outcome;
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Capability implemented by every action kind.
pub trait ActionHandler: Send + Sync {
    /// Execute with the descriptor's parameters and return a status string.
    fn execute(&self, params: &Params) -> Result<String, ActionError>;
}

impl<F> ActionHandler for F
where
    F: Fn(&Params) -> Result<String, ActionError> + Send + Sync,
{
    fn execute(&self, params: &Params) -> Result<String, ActionError> {
        self(params)
    }
}

#[derive(Clone, Default)]
pub struct ActionRegistry {
    handlers: HashMap<String, Arc<dyn ActionHandler>>,
}

impl ActionRegistry {
    /// An empty registry. Every descriptor dispatches to `NoHandler`.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the built-in handlers registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        crate::handlers::register_defaults(&mut registry);
        registry
    }

    /// Add or replace the handler for `kind`. Last registration wins; the
    /// replaced handler, if any, is returned.
    pub fn register(
        &mut self,
        kind: impl Into<String>,
        handler: impl ActionHandler + 'static,
    ) -> Option<Arc<dyn ActionHandler>> {
        let kind = kind.into();
        let previous = self.handlers.insert(kind.clone(), Arc::new(handler));
        if previous.is_some() {
            tracing::debug!(kind = %kind, "replaced action handler");
        }
        previous
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.handlers.contains_key(kind)
    }

    /// Registered kinds, sorted.
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Route `descriptor` to its handler and record the outcome.
    pub fn dispatch(&self, descriptor: &ActionDescriptor) -> Outcome {
        let name = descriptor.name.clone();
        let Some(handler) = self.handlers.get(&descriptor.kind) else {
            tracing::warn!(action = %name, kind = %descriptor.kind, "no handler registered");
            return Outcome::NoHandler {
                name,
                kind: descriptor.kind.clone(),
            };
        };

        let kind = descriptor.kind.as_str();
        let result = panic::catch_unwind(AssertUnwindSafe(|| handler.execute(&descriptor.params)));
        match result {
            Ok(Ok(detail)) => {
                tracing::info!(action = %name, kind, detail = %detail, "action succeeded");
                Outcome::Ok { name, detail }
            }
            Ok(Err(e)) => {
                tracing::warn!(action = %name, kind, error = %e, "action failed");
                Outcome::Failed {
                    name,
                    reason: e.to_string(),
                }
            }
            Err(payload) => {
                let reason = panic_message(payload.as_ref());
                tracing::error!(action = %name, kind, reason = %reason, "action handler panicked");
                Outcome::Failed {
                    name,
                    reason: format!("handler panicked: {reason}"),
                }
            }
        }
    }
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canned(status: &'static str) -> impl ActionHandler {
        move |_: &Params| Ok::<_, ActionError>(status.to_string())
    }

    #[test]
    fn dispatch_unknown_kind_is_no_handler() {
        let registry = ActionRegistry::new();
        let outcome = registry.dispatch(&ActionDescriptor::new("a", "mystery"));
        assert_eq!(
            outcome,
            Outcome::NoHandler {
                name: "a".into(),
                kind: "mystery".into()
            }
        );
        assert_eq!(outcome.to_string(), "no-handler:a:mystery");
    }

    #[test]
    fn dispatch_success_keeps_detail() {
        let mut registry = ActionRegistry::new();
        registry.register("echo", canned("done"));
        let outcome = registry.dispatch(&ActionDescriptor::new("a", "echo"));
        assert_eq!(outcome.to_string(), "ok:a");
        assert!(matches!(outcome, Outcome::Ok { ref detail, .. } if detail == "done"));
    }

    #[test]
    fn last_registration_wins() {
        let mut registry = ActionRegistry::new();
        assert!(registry.register("echo", canned("first")).is_none());
        assert!(registry.register("echo", canned("second")).is_some());
        assert_eq!(registry.len(), 1);
        let outcome = registry.dispatch(&ActionDescriptor::new("a", "echo"));
        assert!(matches!(outcome, Outcome::Ok { ref detail, .. } if detail == "second"));
    }

    #[test]
    fn handler_error_becomes_failed_outcome() {
        let mut registry = ActionRegistry::new();
        registry.register("strict", |_: &Params| {
            Err::<String, _>(ActionError::MissingParam("ticket".into()))
        });
        let outcome = registry.dispatch(&ActionDescriptor::new("open", "strict"));
        assert_eq!(
            outcome.to_string(),
            "failed:open:missing parameter 'ticket'"
        );
    }

    #[test]
    fn handler_panic_is_contained() {
        let mut registry = ActionRegistry::new();
        registry.register("explode", |_: &Params| -> Result<String, ActionError> {
            panic!("kaboom")
        });
        let outcome = registry.dispatch(&ActionDescriptor::new("x", "explode"));
        match outcome {
            Outcome::Failed { name, reason } => {
                assert_eq!(name, "x");
                assert!(reason.contains("kaboom"), "reason: {reason}");
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn handler_receives_params() {
        let mut registry = ActionRegistry::new();
        registry.register("greet", |params: &Params| -> Result<String, ActionError> {
            let who = params
                .get("who")
                .and_then(|v| v.as_str())
                .ok_or_else(|| ActionError::MissingParam("who".into()))?;
            Ok(format!("hello {who}"))
        });
        let descriptor = ActionDescriptor::new("g", "greet").with_param("who", "ops");
        let outcome = registry.dispatch(&descriptor);
        assert!(matches!(outcome, Outcome::Ok { ref detail, .. } if detail == "hello ops"));
    }

    #[test]
    fn kinds_are_sorted() {
        let mut registry = ActionRegistry::new();
        registry.register("b", canned("b"));
        registry.register("a", canned("a"));
        assert_eq!(registry.kinds(), ["a", "b"]);
        assert!(registry.contains("a"));
        assert!(!registry.contains("c"));
    }
}
