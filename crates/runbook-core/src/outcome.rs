use serde::Serialize;
use std::fmt;

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Result of one dispatch attempt.
///
/// String forms:
/// - `ok:<name>`
/// - `no-handler:<name>:<kind>`
/// - `failed:<name>:<reason>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Ok {
        name: String,
        /// Status string returned by the handler.
        detail: String,
    },
    NoHandler {
        name: String,
        kind: String,
    },
    Failed {
        name: String,
        reason: String,
    },
}

impl Outcome {
    pub fn name(&self) -> &str {
        match self {
            Outcome::Ok { name, .. }
            | Outcome::NoHandler { name, .. }
            | Outcome::Failed { name, .. } => name,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ok { name, .. } => write!(f, "ok:{name}"),
            Outcome::NoHandler { name, kind } => write!(f, "no-handler:{name}:{kind}"),
            Outcome::Failed { name, reason } => write!(f, "failed:{name}:{reason}"),
        }
    }
}

// ---------------------------------------------------------------------------
// ExecutionResult
// ---------------------------------------------------------------------------

/// Ordered outcomes of a run, one per executed descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExecutionResult {
    pub outcomes: Vec<Outcome>,
}

impl ExecutionResult {
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Outcome strings in input order.
    pub fn lines(&self) -> Vec<String> {
        self.outcomes.iter().map(ToString::to_string).collect()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.len() - self.succeeded()
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }
}

impl FromIterator<Outcome> for ExecutionResult {
    fn from_iter<I: IntoIterator<Item = Outcome>>(iter: I) -> Self {
        Self {
            outcomes: iter.into_iter().collect(),
        }
    }
}
