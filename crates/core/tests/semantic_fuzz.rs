use maze_core::{AdvanceStopReason, CellKind, Direction, Game, Layout, Rules};
use proptest::{
    arbitrary::any,
    test_runner::{Config as ProptestConfig, TestCaseError, TestRunner},
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

const HEADINGS: [Direction; 4] =
    [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn run_fuzz_simulation(game_seed: u64, input_seed: u64, max_ticks: u32) -> Result<(), String> {
    let rules = Rules::default();
    let mut game = Game::new(game_seed, &Layout::classic(), rules.clone())
        .map_err(|error| error.to_string())?;
    let mut rng = ChaCha8Rng::seed_from_u64(input_seed);

    let mut previous = game.snapshot();
    for _ in 0..max_ticks {
        if rng.next_u32() % 16 == 0 {
            game.set_desired_heading(choose(&mut rng, &HEADINGS))
                .map_err(|error| format!("heading rejected mid-round: {error}"))?;
        }
        let result = game.advance(1);
        let snapshot = game.snapshot();
        let map = &game.state().map;
        let tick = snapshot.tick;

        if snapshot.score < previous.score {
            return Err(format!("score decreased at tick {tick} (seed {game_seed})"));
        }
        if snapshot.pickups_remaining > previous.pickups_remaining {
            return Err(format!("pickup count increased at tick {tick} (seed {game_seed})"));
        }
        if snapshot.pickups_remaining as usize != map.count(CellKind::Pickup) {
            return Err(format!("pickup count drifted from the grid at tick {tick}"));
        }
        if snapshot.lives > previous.lives || snapshot.lives > rules.starting_lives {
            return Err(format!("lives grew at tick {tick} (seed {game_seed})"));
        }
        if map.is_wall(snapshot.player.pos.nearest_cell()) {
            return Err(format!("player inside a wall at tick {tick} (seed {game_seed})"));
        }
        for adversary in &snapshot.adversaries {
            if map.is_wall(adversary.pos.nearest_cell()) {
                return Err(format!("adversary inside a wall at tick {tick} (seed {game_seed})"));
            }
            if adversary.vulnerable != (snapshot.vulnerability_ticks > 0) {
                return Err(format!("vulnerability flag out of sync at tick {tick}"));
            }
        }

        previous = snapshot;
        if let AdvanceStopReason::Finished(_) = result.stop_reason {
            break;
        }
    }

    Ok(())
}

#[test]
fn test_fuzz_round_invariants() {
    let mut runner = TestRunner::new(ProptestConfig::with_cases(20));
    let seeds = (any::<u64>(), any::<u64>());

    runner
        .run(&seeds, |(game_seed, input_seed)| {
            run_fuzz_simulation(game_seed, input_seed, 3000).map_err(TestCaseError::fail)?;
            Ok(())
        })
        .expect("semantic fuzz simulation should preserve invariants");
}
