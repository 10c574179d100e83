//! Tally CLI - survey satisfaction analysis.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Analyze {
            file,
            output,
            json,
            no_answer,
        } => commands::analyze::run(file, output, json, no_answer, cli.verbose),

        Commands::Rank { file, json } => commands::rank::run(file, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` overrides the default filter.
fn init_logging(verbose: bool) {
    let default = if verbose { "tally=debug" } else { "tally=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
