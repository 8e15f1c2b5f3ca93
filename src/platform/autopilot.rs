//! Headless pilot
//!
//! Presses keys the way a (not very good) player would, from a seeded RNG so
//! runs are reproducible. Near the star it burns away from it when the nose
//! happens to point outward.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::input::{Controls, Key};
use crate::heading_direction;
use crate::sim::GameState;

/// Closer than this to the star the pilot tries to escape
const DANGER_RADIUS: f32 = 120.0;
/// Chance per tick of tapping fire
const FIRE_CHANCE: f64 = 0.05;

#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    /// Ticks left on the current manoeuvre
    hold_ticks: u32,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            hold_ticks: 0,
        }
    }

    /// Update held keys for the coming tick
    pub fn drive(&mut self, controls: &mut Controls, state: &GameState) {
        let player = &state.player.body;
        let away = (player.pos - state.star.body.pos).normalize_or_zero();
        let nose = heading_direction(state.player.heading);
        let in_danger = player.pos.distance(state.star.body.pos) < DANGER_RADIUS;

        if in_danger {
            // Turn until the nose points away, then burn
            controls.key_up(Key::Right);
            controls.key_down(Key::Left);
            if nose.dot(away) > 0.5 {
                controls.key_down(Key::Up);
            } else {
                controls.key_up(Key::Up);
            }
        } else {
            if self.hold_ticks == 0 {
                self.new_manoeuvre(controls);
            }
            self.hold_ticks = self.hold_ticks.saturating_sub(1);
        }

        // Tap fire: release then press so the latch re-arms
        controls.key_up(Key::Down);
        if self.rng.random_bool(FIRE_CHANCE) {
            controls.key_down(Key::Down);
        }
    }

    fn new_manoeuvre(&mut self, controls: &mut Controls) {
        for key in [Key::Left, Key::Right, Key::Up] {
            controls.key_up(key);
        }

        match self.rng.random_range(0..3) {
            0 => controls.key_down(Key::Left),
            1 => controls.key_down(Key::Right),
            _ => {}
        }
        if self.rng.random_bool(0.4) {
            controls.key_down(Key::Up);
        }

        self.hold_ticks = self.rng.random_range(10..60);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick;

    fn fly(seed: u64, ticks: u32) -> GameState {
        let mut state = GameState::default();
        let mut controls = Controls::new();
        let mut pilot = Autopilot::new(seed);

        for _ in 0..ticks {
            pilot.drive(&mut controls, &state);
            let input = controls.take_input();
            tick(&mut state, &input);
        }
        state
    }

    #[test]
    fn test_same_seed_same_flight() {
        let a = fly(42, 300);
        let b = fly(42, 300);
        assert_eq!(a.player.body, b.player.body);
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.player.projectiles.len(), b.player.projectiles.len());
    }

    #[test]
    fn test_pilot_presses_keys() {
        let state = GameState::default();
        let mut controls = Controls::new();
        let mut pilot = Autopilot::new(7);

        let mut fired = 0;
        let mut steered = 0;
        for _ in 0..500 {
            pilot.drive(&mut controls, &state);
            let input = controls.take_input();
            fired += input.fire as u32;
            steered += (input.turn_left || input.turn_right || input.thrust) as u32;
        }
        assert!(fired > 0);
        assert!(steered > 0);
    }

    #[test]
    fn test_escapes_when_close() {
        let mut state = GameState::default();
        state.player.body.pos = state.star.body.pos + glam::Vec2::new(0.0, 80.0);
        // Nose already points away from the star
        state.player.heading = 0.0;

        let mut controls = Controls::new();
        Autopilot::new(1).drive(&mut controls, &state);
        assert!(controls.take_input().thrust);
    }
}
