use anyhow::{Context, Result, ensure};
use clap::Parser;
use maze_core::{CellKind, Direction, Game, Layout, Rules};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 5000)]
    ticks: u32,
    /// TOML rules file; defaults when omitted
    #[arg(short, long)]
    rules: Option<PathBuf>,
}

/// One heading change every eight ticks on average.
const TURN_ODDS: u32 = 8;

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p]
}

fn load_rules(path: Option<&PathBuf>) -> Result<Rules> {
    let Some(path) = path else {
        return Ok(Rules::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read rules file: {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("Invalid rules in {}", path.display()))
}

fn check_invariants(game: &Game, previous_score: u32, previous_pickups: u32) -> Result<()> {
    let state = game.state();
    let round = &state.round;
    let tick = game.current_tick();

    ensure!(round.score >= previous_score, "tick {tick}: score decreased");
    ensure!(round.pickups_remaining <= previous_pickups, "tick {tick}: pickups reappeared");
    let on_grid = state.map.count(CellKind::Pickup);
    ensure!(
        round.pickups_remaining as usize == on_grid,
        "tick {tick}: pickup counter {} disagrees with grid {on_grid}",
        round.pickups_remaining
    );
    ensure!(round.lives <= game.rules().starting_lives, "tick {tick}: lives above start");
    ensure!(
        !state.map.is_wall(state.player.body.cell()),
        "tick {tick}: player inside wall at {:?}",
        state.player.body.pos
    );
    for adversary in state.adversaries.values() {
        ensure!(
            !state.map.is_wall(adversary.body.cell()),
            "tick {tick}: adversary inside wall at {:?}",
            adversary.body.pos
        );
        ensure!(
            !adversary.vulnerable || round.vulnerability_ticks > 0,
            "tick {tick}: vulnerable flag outlived the countdown"
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Starting fuzz harness on seed {} for max {} ticks...", args.seed, args.ticks);
    let rules = load_rules(args.rules.as_ref())?;
    let mut game =
        Game::new(args.seed, &Layout::classic(), rules).context("Invalid rules")?;
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for _ in 0..args.ticks {
        if rng.next_u32() % TURN_ODDS == 0 {
            let heading = choose(&mut rng, &Direction::ALL);
            game.set_desired_heading(heading).context("heading rejected on a live round")?;
        }

        let round = &game.state().round;
        let (score, pickups) = (round.score, round.pickups_remaining);
        game.advance(1);
        check_invariants(&game, score, pickups)?;

        if let Some(outcome) = game.outcome() {
            println!("Finished with outcome {outcome:?} after {} ticks", game.current_tick());
            break;
        }
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
