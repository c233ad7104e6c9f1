//! Compute command
//!
//! Usage: gridwalk compute --input <FILE> [--strategy <NAME>] [--db <PATH>]

use clap::Args;
use gridwalk_core::{compute_coverage, Strategy};
use gridwalk_store::{ExecutionRepo, NewExecution};
use std::path::PathBuf;

use super::{load_request, open_store};

#[derive(Debug, Args)]
pub struct ComputeArgs {
    /// Request file: {"start": {...}, "commands": [...]}
    #[arg(short, long)]
    pub input: PathBuf,

    /// Counting strategy
    #[arg(short, long, default_value_t = Strategy::default())]
    pub strategy: Strategy,

    /// Record the execution in this database
    #[arg(long)]
    pub db: Option<PathBuf>,
}

pub fn execute(args: ComputeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (request, moves) = load_request(&args.input)?;
    let coverage = compute_coverage(request.start, &moves, args.strategy.counter())?;

    println!(
        "unique={} duration={:.6}",
        coverage.unique,
        coverage.duration_seconds()
    );

    if let Some(db_path) = args.db {
        let mut conn = open_store(&db_path)?;
        let record = NewExecution::now(
            moves.len() as u64,
            coverage.unique,
            coverage.duration_seconds(),
        );
        let execution = ExecutionRepo::insert(&mut conn, &record)?;
        println!("recorded id={}", execution.id);
    }

    Ok(())
}
