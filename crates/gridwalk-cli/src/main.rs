//! gridwalk CLI
//!
//! Command-line interface for the coverage engine

use clap::{Parser, Subcommand};
use gridwalk_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "gridwalk")]
#[command(about = "gridwalk - count grid points covered by a robot path", long_about = None)]
struct Cli {
    /// Emit structured logs to stdout
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Count covered points for a request file
    Compute(commands::compute::ComputeArgs),
    /// Run every strategy on a request file and check they agree
    Compare(commands::compare::CompareArgs),
    /// List recorded executions
    History(commands::history::HistoryArgs),
}

fn main() {
    let cli = Cli::parse();
    if cli.verbose {
        logging_facility::init(Profile::Development);
    }

    let result = match cli.command {
        Commands::Compute(args) => commands::compute::execute(args),
        Commands::Compare(args) => commands::compare::execute(args),
        Commands::History(args) => commands::history::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
