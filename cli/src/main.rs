//! CLI entrypoint for textkit
//!
//! Parses arguments, runs one helper and prints its result to stdout.
//! Logs go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use textkit_presentation::{Cli, ConsoleFormatter, OutputFormatter, execute};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!(operation = cli.command.name(), "Starting textkit");

    let report = execute(&cli.command)
        .inspect_err(|e| warn!(parameter = e.parameter(), "Rejected argument"))
        .with_context(|| format!("{} failed", cli.command.name()))?;

    let formatter: &dyn OutputFormatter = &ConsoleFormatter;
    println!("{}", formatter.render(&report, cli.output));

    Ok(())
}
