use anyhow::{Context, Result};
use clap::Parser;
use maze_core::{InputJournal, ReplayResult, replay::replay_to_end};
use std::fs;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let journal_data = fs::read_to_string(&args.journal)
        .with_context(|| format!("Failed to read journal file: {}", args.journal))?;
    let journal: InputJournal = serde_json::from_str(&journal_data)
        .with_context(|| "Failed to deserialize journal JSON")?;

    let result: ReplayResult =
        replay_to_end(&journal).with_context(|| "Replay failed during execution")?;

    println!("Replay complete.");
    println!("Seed: {}", journal.seed);
    println!("Final Turn: {}", result.final_turn);
    println!("Final Level: {}", result.final_level);
    println!("Finished: {}", result.finished);
    println!("Snapshot Hash: {}", result.final_snapshot_hash);

    Ok(())
}
