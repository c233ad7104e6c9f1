//! Compare command
//!
//! Usage: gridwalk compare --input <FILE>

use clap::Args;
use gridwalk_core::{compute_coverage, Strategy};
use std::path::PathBuf;

use super::load_request;

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Request file: {"start": {...}, "commands": [...]}
    #[arg(short, long)]
    pub input: PathBuf,
}

pub fn execute(args: CompareArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (request, moves) = load_request(&args.input)?;

    let mut results = Vec::with_capacity(Strategy::ALL.len());
    for strategy in Strategy::ALL {
        let coverage = compute_coverage(request.start, &moves, strategy.counter())?;
        println!(
            "{:<14} unique={} duration={:.6}",
            strategy,
            coverage.unique,
            coverage.duration_seconds()
        );
        results.push(coverage.unique);
    }

    if results.windows(2).any(|pair| pair[0] != pair[1]) {
        return Err(format!("strategies disagree: {:?}", results).into());
    }
    Ok(())
}
