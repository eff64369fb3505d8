use thiserror::Error;

/// Fatal errors that abort a run before any action executes.
#[derive(Debug, Error)]
pub enum RunbookError {
    #[error("invalid runbook document: {0}")]
    InvalidDocument(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, RunbookError>;

/// Failure raised by a single handler. Never escapes `dispatch`; it is
/// recorded as a failed outcome instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    #[error("missing parameter '{0}'")]
    MissingParam(String),

    #[error("invalid parameter '{name}': {reason}")]
    InvalidParam { name: String, reason: String },

    #[error("{0}")]
    Failed(String),
}
