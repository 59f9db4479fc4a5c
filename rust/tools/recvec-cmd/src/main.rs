use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "recvec-cmd")]
#[command(about = "Runs the record vector conformance suite")]
#[command(version)]
struct Cli {
    /// Log every case as it runs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the conformance cases and report the results
    Run {
        /// Only run cases whose name contains this substring
        #[arg(short, long)]
        filter: Option<String>,

        /// Stop at the first failing case
        #[arg(long)]
        fail_fast: bool,
    },

    /// List the conformance cases
    List {
        /// Only list cases whose name contains this substring
        #[arg(short, long)]
        filter: Option<String>,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(fmt::layer().without_time().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run { filter, fail_fast } => commands::run::run(filter, fail_fast),
        Commands::List { filter } => commands::list::run(filter),
    }
}
