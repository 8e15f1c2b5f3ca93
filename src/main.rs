//! Starwars entry point
//!
//! Native builds run the game headless: a seeded autopilot flies the ship
//! for a fixed number of frames and a JSON summary is printed at the end.
//!
//! Usage: `starwars [TICKS] [SEED] [TUNING_JSON]`

use std::path::Path;

use serde::Serialize;

use starwars::Tuning;
use starwars::platform::{Autopilot, Controls};
use starwars::renderer::draw_list;
use starwars::sim::{GameEvent, GamePhase, GameState, tick};

const DEFAULT_TICKS: u64 = 600;
const DEFAULT_SEED: u64 = 1;

/// What the run looked like, printed as JSON
#[derive(Debug, Default, Serialize)]
struct Summary {
    ticks: u64,
    seed: u64,
    phase: Option<GamePhase>,
    shots_fired: u32,
    shots_expired: u32,
    shots_lost_to_star: u32,
    crashed_at_tick: Option<u64>,
    final_position: [f32; 2],
    final_speed: f32,
    sprites_on_screen: usize,
}

fn parse_arg(args: &[String], index: usize, name: &str, default: u64) -> u64 {
    match args.get(index) {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            log::warn!("Ignoring {name} {raw:?}: {e}, using {default}");
            default
        }),
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let ticks = parse_arg(&args, 1, "tick count", DEFAULT_TICKS);
    let seed = parse_arg(&args, 2, "seed", DEFAULT_SEED);
    let tuning = args
        .get(3)
        .map(|path| Tuning::load(Path::new(path)))
        .unwrap_or_default();

    log::info!("Starwars (headless) starting: {ticks} ticks, seed {seed}");

    let mut state = GameState::new(tuning);
    let mut controls = Controls::new();
    let mut pilot = Autopilot::new(seed);
    let mut summary = Summary {
        seed,
        ..Default::default()
    };

    for _ in 0..ticks {
        pilot.drive(&mut controls, &state);
        let input = controls.take_input();

        for event in tick(&mut state, &input) {
            match event {
                GameEvent::ProjectileFired { .. } => summary.shots_fired += 1,
                GameEvent::ProjectileExpired { .. } => summary.shots_expired += 1,
                GameEvent::ProjectileHitStar { .. } => summary.shots_lost_to_star += 1,
                GameEvent::PlayerDestroyed { .. } => {
                    summary.crashed_at_tick = Some(state.time_ticks);
                }
            }
        }
    }

    summary.ticks = state.time_ticks;
    summary.phase = Some(state.phase);
    summary.final_position = state.player.body.pos.to_array();
    summary.final_speed = state.player.body.speed();
    summary.sprites_on_screen = draw_list(&state).len();

    log::info!(
        "Finished after {} ticks: {:?}, {} shots fired",
        summary.ticks,
        state.phase,
        summary.shots_fired
    );

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => log::warn!("Could not encode summary: {e}"),
    }
}
