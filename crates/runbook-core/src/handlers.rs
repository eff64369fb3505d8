//! Built-in action handlers.
//!
//! `noop` is the default kind for descriptors that declare none.
//! `graph.ensure_user_disabled` is a placeholder for a directory action that
//! disables a user account; it only reports what it would have done.

use crate::document::{Params, DEFAULT_KIND};
use crate::error::ActionError;
use crate::registry::{ActionHandler, ActionRegistry};
use serde_yaml::Value;

pub const GRAPH_DISABLE_USER: &str = "graph.ensure_user_disabled";

/// Register every built-in handler on `registry`.
pub fn register_defaults(registry: &mut ActionRegistry) {
    registry.register(DEFAULT_KIND, NoopHandler);
    registry.register(GRAPH_DISABLE_USER, EnsureUserDisabled);
}

// ---------------------------------------------------------------------------
// noop
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHandler;

impl ActionHandler for NoopHandler {
    fn execute(&self, _params: &Params) -> Result<String, ActionError> {
        Ok("noop".to_string())
    }
}

// ---------------------------------------------------------------------------
// graph.ensure_user_disabled
// ---------------------------------------------------------------------------

/// Simulated user-disable call. Reads `user_id` (default `unknown`) and
/// returns `simulated:disabled:<user_id>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnsureUserDisabled;

impl ActionHandler for EnsureUserDisabled {
    fn execute(&self, params: &Params) -> Result<String, ActionError> {
        let user_id = match params.get("user_id") {
            None | Some(Value::Null) => "unknown".to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(_) => {
                return Err(ActionError::InvalidParam {
                    name: "user_id".into(),
                    reason: "expected a string".into(),
                })
            }
        };
        Ok(format!("simulated:disabled:{user_id}"))
    }
}
