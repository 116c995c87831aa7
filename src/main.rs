//! scbctl command-line entry point.
//!
//! ```text
//! scbctl scan <name> <target> [--namespace NS] [--follow]
//!     → load config, apply flag overrides
//!     → validate arguments (before touching the cluster)
//!     → acquire cluster client + namespace
//!     → submit Scan
//!     → optionally follow the worker's log until done or interrupted
//! ```

use std::process::ExitCode;

use clap::Parser;

use scbctl::cli::{connect, run_scan, Cli, Commands};
use scbctl::lifecycle::{signals, CancelSignal};
use scbctl::observability::init_logging;
use scbctl::scan::validate_scan_args;
use scbctl::{ScbError, ScbResult};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(summary) => {
            println!("{}", summary);
            ExitCode::SUCCESS
        }
        Err(ScbError::Cancelled) => {
            eprintln!("Scan follow cancelled");
            ExitCode::from(ScbError::Cancelled.exit_code())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(cli: Cli) -> ScbResult<String> {
    let config = cli.resolve_config()?;
    init_logging(&config.observability.log_level);

    let Commands::Scan(args) = &cli.command;
    validate_scan_args(&args.name, &args.target)?;

    let mut stdout = tokio::io::stdout();
    let mut stderr = tokio::io::stderr();
    let context = connect(
        &config.cluster,
        &config.follow,
        args.namespace.clone(),
        &mut stderr,
    )
    .await?;

    let cancel = CancelSignal::new();
    let interrupts = signals::spawn_interrupt_handler(cancel.clone());

    let result = run_scan(
        &context,
        args,
        &config.follow,
        cancel.clone(),
        &mut stdout,
        &mut stderr,
    )
    .await;

    // Stops the handler task if it is still waiting.
    cancel.trigger();
    let _ = interrupts.await;

    result.map(|outcome| outcome.summary())
}
