//! Runbook document model.
//!
//! A runbook is a YAML mapping with a single recognized key, `actions`, bound
//! to an ordered sequence of action descriptors. Parsing is permissive: a
//! missing or malformed `actions` value yields no actions, and entries that
//! are not mappings are dropped. Only a top-level value that is not a mapping
//! is rejected.

use crate::error::{Result, RunbookError};
use serde_yaml::{Mapping, Value};
use std::path::Path;

/// Kind assigned to descriptors that do not declare one.
pub const DEFAULT_KIND: &str = "noop";

/// Name assigned to descriptors that do not declare one.
pub const UNNAMED: &str = "unnamed";

/// Kind-specific parameters of a descriptor, in document order.
pub type Params = Mapping;

// ---------------------------------------------------------------------------
// ActionDescriptor
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ActionDescriptor {
    pub name: String,
    pub kind: String,
    /// Every key of the source mapping except `name` and `kind`.
    pub params: Params,
}

impl ActionDescriptor {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            params: Params::new(),
        }
    }

    /// Builder: add one parameter.
    pub fn with_param(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.insert(Value::from(key), value.into());
        self
    }

    pub fn from_mapping(map: &Mapping) -> Self {
        let name = map
            .get("name")
            .and_then(scalar_text)
            .unwrap_or_else(|| UNNAMED.to_string());
        let kind = map
            .get("kind")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_KIND)
            .to_string();
        let params = map
            .iter()
            .filter(|(k, _)| !matches!(k.as_str(), Some("name") | Some("kind")))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Self { name, kind, params }
    }
}

/// Render a scalar `name` as text. Null, sequences, and mappings have no
/// sensible textual form and fall back to the default name.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// RunbookDocument
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunbookDocument {
    pub actions: Vec<ActionDescriptor>,
}

impl RunbookDocument {
    /// Build a document from a parsed YAML tree.
    ///
    /// A null tree (empty file) is an empty runbook. Any other non-mapping
    /// value is an `InvalidDocument` error.
    pub fn from_value(value: &Value) -> Result<Self> {
        let map = match value {
            Value::Mapping(map) => map,
            Value::Null => return Ok(Self::default()),
            other => {
                return Err(RunbookError::InvalidDocument(format!(
                    "expected a mapping at the top level, found {}",
                    type_name(other)
                )))
            }
        };

        let actions = match map.get("actions") {
            Some(Value::Sequence(entries)) => {
                let total = entries.len();
                let actions: Vec<_> = entries
                    .iter()
                    .filter_map(Value::as_mapping)
                    .map(ActionDescriptor::from_mapping)
                    .collect();
                if actions.len() < total {
                    tracing::debug!(
                        dropped = total - actions.len(),
                        "skipping non-mapping action entries"
                    );
                }
                actions
            }
            Some(other) => {
                tracing::debug!(found = type_name(other), "'actions' is not a sequence");
                Vec::new()
            }
            None => Vec::new(),
        };

        Ok(Self { actions })
    }

    pub fn parse(yaml: &str) -> Result<Self> {
        Self::from_value(&parse_yaml(yaml)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        Self::from_value(&load_yaml(path)?)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Read and parse a YAML file into a generic tree.
pub fn load_yaml(path: &Path) -> Result<Value> {
    let data = std::fs::read_to_string(path)?;
    parse_yaml(&data)
}

/// Parse YAML text into a generic tree. Blank input is `Null`.
pub fn parse_yaml(yaml: &str) -> Result<Value> {
    if yaml.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_yaml::from_str(yaml)?)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
