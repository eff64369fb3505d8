mod cmd;
mod output;

use clap::Parser;
use cmd::run::{RunExit, RunOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "runbook",
    about = "Runbook executor — run the actions declared in a YAML runbook",
    version
)]
struct Cli {
    /// Path to runbook YAML file
    #[arg(long, env = "RUNBOOK_PATH")]
    runbook: PathBuf,

    /// Output the full result as JSON
    #[arg(long, short = 'j')]
    json: bool,

    /// List every action outcome after the summary
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Exit with status 2 if any action failed or had no handler
    #[arg(long)]
    fail_on_error: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let opts = RunOptions {
        json: cli.json,
        verbose: cli.verbose,
        fail_on_error: cli.fail_on_error,
    };

    if let Err(e) = cmd::run::run(&cli.runbook, &opts) {
        let code = e.downcast_ref::<RunExit>().map_or(1, RunExit::exit_code);
        eprintln!("error: {e:#}");
        std::process::exit(code);
    }
}
