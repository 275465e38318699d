mod frame_input;
mod game_layout;
mod ui_render;
mod ui_text;
mod window_config;

use std::env;

use frame_input::capture_frame_input;
use game_layout::{compute_frame_layout, setup_layout};
use macroquad::prelude::*;
use maze_chase::app_loop::{AppMode, AppState};
use maze_chase::launch::{
    LaunchOptions, SeedChoice, generate_runtime_seed, load_rules, parse_launch_args,
};
use maze_chase::{format_seed, format_snapshot_hash, reason_code};
use maze_core::{Game, InputJournal, Layout, Rules};
use taffy::TaffyTree;
use ui_render::draw_frame;
use window_config::{build_window_conf, runtime_ui_scale};

fn window_conf() -> Conf {
    build_window_conf()
}

fn start_round(options: &LaunchOptions) -> Result<(Game, InputJournal), String> {
    let rules = match &options.rules_path {
        Some(path) => load_rules(path)?,
        None => Rules::default(),
    };
    let seed = options.seed.value();
    match options.seed {
        SeedChoice::Cli(_) => log::info!("seed {} (from --seed)", format_seed(seed)),
        SeedChoice::Generated(_) => log::info!("seed {} (generated)", format_seed(seed)),
    }

    let game = Game::new(seed, &Layout::classic(), rules.clone()).map_err(|err| err.to_string())?;
    Ok((game, InputJournal::new(seed, rules)))
}

fn report_finished_round(game: &Game, journal: &InputJournal) {
    if let Some(outcome) = game.outcome() {
        log::info!(
            "round finished: reason={} score={} tick={} seed={} hash={}",
            reason_code(&outcome),
            game.state().round.score,
            game.current_tick(),
            format_seed(game.seed()),
            format_snapshot_hash(game.snapshot_hash())
        );
    }
    match journal.to_json_pretty() {
        Ok(json) => log::debug!("input journal:\n{json}"),
        Err(err) => log::warn!("could not encode input journal: {err}"),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let options = match parse_launch_args(&args, generate_runtime_seed()) {
        Ok(options) => options,
        Err(err) => {
            log::error!("{err}");
            return;
        }
    };
    let (mut game, mut journal) = match start_round(&options) {
        Ok(round) => round,
        Err(err) => {
            log::error!("{err}");
            return;
        }
    };

    let mut app_state = AppState::new();
    let mut ui_scale = runtime_ui_scale();
    let mut taffy = TaffyTree::new();
    let layout_nodes = setup_layout(&mut taffy);
    let mut reported = false;

    loop {
        let frame_input = capture_frame_input();
        if let Some(action) = frame_input.ui_scale_action {
            ui_scale.apply(action);
        }

        app_state.tick(&mut game, &frame_input.keys_pressed);
        app_state.drain_into(&mut journal);
        if matches!(app_state.mode, AppMode::Finished(_)) && !reported {
            report_finished_round(&game, &journal);
            reported = true;
        }

        clear_background(BLACK);
        let frame_layout = compute_frame_layout(
            &mut taffy,
            &layout_nodes,
            screen_width(),
            screen_height(),
            ui_scale.value(),
        );
        draw_frame(&game, &app_state, &frame_layout, ui_scale.value());

        next_frame().await
    }
}
