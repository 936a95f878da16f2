use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error};
use vrp_dispatch::json::{self, OutputOptions};

/// Builds nearest-neighbor vehicle routes from a JSON dispatch request.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Read the request from this file instead of standard input
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Write the response to this file instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the response
    #[arg(long)]
    pretty: bool,

    /// Add the external ids of the clients served to each route
    #[arg(long)]
    with_clients: bool,

    /// Add the list of clients no route visits
    #[arg(long)]
    with_unassigned: bool,

    #[arg(short, long)]
    debug: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "debug")]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else if cli.quiet {
            tracing::Level::ERROR
        } else {
            tracing::Level::INFO
        })
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let input = match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read standard input")?;
            buffer
        }
    };
    debug!(bytes = input.len(), "request read");

    let options = OutputOptions {
        with_clients: cli.with_clients,
        with_unassigned: cli.with_unassigned,
        pretty: cli.pretty,
    };
    let document = json::run(&input, options)?;

    match &cli.output {
        Some(path) => std::fs::write(path, document)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(document.as_bytes())
                .and_then(|()| stdout.flush())
                .context("failed to write standard output")?;
        }
    }

    Ok(())
}
