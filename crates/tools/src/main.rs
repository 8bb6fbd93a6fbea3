use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use crawl_core::{InputJournal, ReplayResult, replay};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: String,

    /// Expected final snapshot hash; replay fails if it differs
    #[arg(long)]
    expect_hash: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let journal_data = fs::read_to_string(&args.journal)
        .with_context(|| format!("Failed to read journal file: {}", args.journal))?;
    let journal: InputJournal =
        serde_json::from_str(&journal_data).context("Failed to deserialize journal JSON")?;

    let result: ReplayResult = replay(&journal).context("Replay failed during execution")?;

    println!("Replay complete.");
    println!("Inputs: {}", journal.inputs.len());
    println!("Final Depth: {}", result.final_depth);
    println!("Final Turn: {}", result.final_turn);
    match result.outcome {
        Some(outcome) => println!("Outcome: {outcome:?}"),
        None => println!("Outcome: in progress"),
    }
    println!("Snapshot Hash: {}", result.final_snapshot_hash);

    if let Some(expected) = args.expect_hash {
        anyhow::ensure!(
            expected == result.final_snapshot_hash,
            "snapshot hash mismatch: expected {expected}, got {}",
            result.final_snapshot_hash
        );
    }

    Ok(())
}
