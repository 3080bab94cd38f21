//! swift-outdated - Check Swift package manager dependencies for newer releases
//!
//! Reads the `Package.resolved` of a Swift package or Xcode project and lists
//! the pinned dependencies whose repositories have newer version tags.

use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use swift_outdated::cli::{CliArgs, OUTDATED_EXIT_CODE};
use swift_outdated::orchestrator::{Orchestrator, OrchestratorConfig};
use swift_outdated::output::{create_formatter, OutputConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    init_logging(args.verbose);

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr; `RUST_LOG` takes precedence over `--verbose`
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("swift-outdated v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Target: {}", args.path.display());
    }

    let orchestrator = Orchestrator::new(OrchestratorConfig::from_cli(&args))?;
    let summary = orchestrator.run(&args.path).await?;

    let formatter = create_formatter(OutputConfig::from_cli(&args));
    let mut stdout = io::stdout().lock();
    formatter.format(&summary, &mut stdout)?;
    stdout.flush()?;

    if args.fail_on_outdated && summary.has_outdated() {
        return Ok(ExitCode::from(OUTDATED_EXIT_CODE));
    }
    Ok(ExitCode::SUCCESS)
}
