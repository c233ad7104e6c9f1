//! History command
//!
//! Usage: gridwalk history --db <PATH> [--limit <N>]

use clap::Args;
use gridwalk_store::ExecutionRepo;
use std::path::PathBuf;

use super::open_store;

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Database file
    #[arg(long)]
    pub db: PathBuf,

    /// Maximum number of executions to show, newest first
    #[arg(short, long, default_value_t = 20)]
    pub limit: usize,
}

pub fn execute(args: HistoryArgs) -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_store(&args.db)?;
    let executions = ExecutionRepo::list_recent(&conn, args.limit)?;

    if executions.is_empty() {
        println!("no executions recorded");
        return Ok(());
    }

    for execution in executions {
        println!(
            "{}\t{}\tcommands={}\tresult={}\tduration={:.6}",
            execution.id,
            execution.timestamp.to_rfc3339(),
            execution.commands,
            execution.result,
            execution.duration
        );
    }
    Ok(())
}
