use crate::output::{print_json, print_outcomes};
use anyhow::Context;
use runbook_core::{ActionRegistry, ExecutionResult, Executor, Outcome};
use serde::Serialize;
use std::path::Path;

// ---------------------------------------------------------------------------
// RunExit — typed non-zero exit codes
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum RunExit {
    ActionsFailed { failed: usize, total: usize },
}

impl RunExit {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunExit::ActionsFailed { .. } => 2,
        }
    }
}

impl std::fmt::Display for RunExit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunExit::ActionsFailed { failed, total } => {
                write!(f, "{failed} of {total} action(s) failed")
            }
        }
    }
}

impl std::error::Error for RunExit {}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

pub struct RunOptions {
    pub json: bool,
    pub verbose: bool,
    pub fail_on_error: bool,
}

pub fn run(runbook: &Path, opts: &RunOptions) -> anyhow::Result<()> {
    let executor = Executor::new(ActionRegistry::with_defaults());
    let result = executor
        .run_file(runbook)
        .with_context(|| format!("failed to run runbook '{}'", runbook.display()))?;

    report(&result, opts)?;

    if opts.fail_on_error && result.has_failures() {
        return Err(RunExit::ActionsFailed {
            failed: result.failed(),
            total: result.len(),
        }
        .into());
    }
    Ok(())
}

#[derive(Serialize)]
struct RunReport<'a> {
    executed: usize,
    succeeded: usize,
    failed: usize,
    outcomes: &'a [Outcome],
}

fn report(result: &ExecutionResult, opts: &RunOptions) -> anyhow::Result<()> {
    if opts.json {
        return print_json(&RunReport {
            executed: result.len(),
            succeeded: result.succeeded(),
            failed: result.failed(),
            outcomes: &result.outcomes,
        });
    }
    println!("Executed {} action(s)", result.len());
    if opts.verbose && !result.is_empty() {
        println!();
        print_outcomes(result);
    }
    Ok(())
}
