//! Per-frame simulation tick
//!
//! Core game loop that advances the simulation by exactly one frame.

use serde::{Deserialize, Serialize};

use super::gravity::GravitySolver;
use super::pool::Mortal;
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrust: bool,
    /// Fire one projectile this tick
    pub fire: bool,
}

/// Advance the game state by one frame
///
/// Order: effects age, then (while running) gravity, ship, projectiles,
/// firing, collisions. Dead entities are compacted at the very end so
/// every step of this tick saw the same population.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Explosions animate even after game over
    for effect in state.effects.alive_mut() {
        effect.advance();
    }

    if state.phase == GamePhase::Running {
        apply_gravity(state);

        if state.player.is_alive() {
            state.player.step(input, &state.tuning);
        }

        for id in state.player.step_projectiles(&state.tuning) {
            log::debug!("projectile {id} expired");
            events.push(GameEvent::ProjectileExpired { id });
        }

        if input.fire && state.player.is_alive() {
            let id = state.player.fire(&state.tuning);
            log::debug!("projectile {id} fired from {:?}", state.player.body.pos);
            events.push(GameEvent::ProjectileFired { id });
        }

        resolve_collisions(state, &mut events);
    }

    state.effects.compact();
    state.player.projectiles.compact();
    state.time_ticks += 1;

    events
}

fn apply_gravity(state: &mut GameState) {
    let solver = GravitySolver::from_tuning(&state.tuning);
    let player = &mut state.player;

    let mut bodies = Vec::new();
    if player.is_alive() {
        bodies.push(&mut player.body);
    }
    if state.tuning.projectiles_feel_gravity {
        bodies.extend(player.projectiles.alive_mut().map(|shot| &mut shot.body));
    }

    solver.apply(&state.star.body, bodies);
}

/// Ship first, then every projectile independently
fn resolve_collisions(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let mut explosions = Vec::new();

    let player = &mut state.player;
    if player.is_alive() && state.star.hit_by(&player.hitbox, player.body.pos) {
        let pos = player.body.pos;
        player.kill();
        state.phase = GamePhase::GameOver;
        log::info!("ship fell into the star at {pos:?} after {} ticks", state.time_ticks);
        events.push(GameEvent::PlayerDestroyed { pos });
        explosions.push(pos);
    }

    for shot in state.player.projectiles.alive_mut() {
        if state.star.hit_by(&shot.hitbox, shot.body.pos) {
            shot.kill();
            log::debug!("projectile {} hit the star", shot.id);
            events.push(GameEvent::ProjectileHitStar {
                id: shot.id,
                pos: shot.body.pos,
            });
            explosions.push(shot.body.pos);
        }
    }

    for pos in explosions {
        state.spawn_effect(pos);
    }
}
