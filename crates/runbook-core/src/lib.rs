pub mod document;
pub mod error;
pub mod executor;
pub mod handlers;
pub mod outcome;
pub mod registry;

pub use document::{ActionDescriptor, Params, RunbookDocument};
pub use error::{ActionError, Result, RunbookError};
pub use executor::Executor;
pub use outcome::{ExecutionResult, Outcome};
pub use registry::{ActionHandler, ActionRegistry};
