use anyhow::{Context, Result};
use clap::Parser;
use maze_core::{InputJournal, Layout, LayoutSpec, replay};
use std::fs;
use std::path::PathBuf;

const DEFAULT_MAX_TICKS: u64 = 100_000;

#[derive(Parser)]
#[command(author, version, about = "Replays a recorded input journal", long_about = None)]
struct Args {
    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: PathBuf,
    /// Layout JSON file; the classic board when omitted
    #[arg(short, long)]
    layout: Option<PathBuf>,
    #[arg(short, long, default_value_t = DEFAULT_MAX_TICKS)]
    max_ticks: u64,
}

fn load_layout(path: Option<&PathBuf>) -> Result<Layout> {
    let Some(path) = path else {
        return Ok(Layout::classic());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout file: {}", path.display()))?;
    let spec: LayoutSpec =
        serde_json::from_str(&text).context("Failed to deserialize layout JSON")?;
    Layout::from_spec(&spec).with_context(|| format!("Invalid layout in {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let journal_data = fs::read_to_string(&args.journal)
        .with_context(|| format!("Failed to read journal file: {}", args.journal.display()))?;
    let journal = InputJournal::from_json(&journal_data)
        .context("Failed to deserialize journal JSON")?;
    let layout = load_layout(args.layout.as_ref())?;
    log::info!("replaying {} inputs for seed {}", journal.inputs.len(), journal.seed);

    let result = replay(&layout, &journal, args.max_ticks).context("Replay failed")?;

    println!("Replay complete.");
    match result.outcome {
        Some(outcome) => println!("Outcome: {outcome:?}"),
        None => println!("Outcome: unfinished after {} ticks", args.max_ticks),
    }
    println!("Final Tick: {}", result.final_tick);
    println!("Score: {}", result.score);
    println!("Snapshot Hash: 0x{:016x}", result.final_snapshot_hash);

    Ok(())
}
