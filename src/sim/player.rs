//! The player's ship

use serde::{Deserialize, Serialize};

use super::body::Body;
use super::collision::Hitbox;
use super::kinematics::{clamp_speed, integrate};
use super::pool::{Liveness, Mortal, Pool};
use super::projectile::Projectile;
use super::tick::TickInput;
use crate::{Tuning, heading_direction, normalize_angle};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    /// Nose direction (radians, 0 = up, counter-clockwise positive)
    pub heading: f32,
    pub hitbox: Hitbox,
    pub liveness: Liveness,
    /// Projectiles fired by this ship (owned exclusively)
    pub projectiles: Pool<Projectile>,
    next_projectile_id: u32,
}

impl Mortal for Player {
    fn liveness(&self) -> Liveness {
        self.liveness
    }

    fn kill(&mut self) {
        self.liveness = Liveness::Dead;
    }
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            body: Body::new(tuning.ship_start, tuning.ship_mass),
            heading: 0.0,
            hitbox: tuning.ship_hitbox,
            liveness: Liveness::Alive,
            projectiles: Pool::new(),
            next_projectile_id: 1,
        }
    }

    /// Apply turn and thrust controls for this tick
    pub fn steer(&mut self, input: &TickInput, tuning: &Tuning) {
        if input.turn_left {
            self.heading += tuning.turn_rate;
        }
        if input.turn_right {
            self.heading -= tuning.turn_rate;
        }
        self.heading = normalize_angle(self.heading);

        if input.thrust {
            self.body.vel += heading_direction(self.heading) * tuning.thrust;
        }
    }

    /// Controls, speed cap, then movement
    pub fn step(&mut self, input: &TickInput, tuning: &Tuning) {
        self.steer(input, tuning);
        self.body.vel = clamp_speed(self.body.vel, tuning.max_speed);
        integrate(&mut self.body, tuning.bounds());
        self.body.rotation = self.heading;
    }

    /// Age and move every live projectile. Returns the ids that expired.
    pub fn step_projectiles(&mut self, tuning: &Tuning) -> Vec<u32> {
        let bounds = tuning.bounds();
        self.projectiles
            .alive_mut()
            .filter_map(|shot| (!shot.step(bounds)).then_some(shot.id))
            .collect()
    }

    /// Spawn a projectile at the ship. Returns its id.
    pub fn fire(&mut self, tuning: &Tuning) -> u32 {
        let id = self.next_projectile_id;
        self.next_projectile_id += 1;
        self.projectiles.push(Projectile::launch(id, &self.body, self.heading, tuning));
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_turning_changes_heading() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);

        let left = TickInput {
            turn_left: true,
            ..Default::default()
        };
        player.steer(&left, &tuning);
        assert!((player.heading - tuning.turn_rate).abs() < 1e-6);

        let both = TickInput {
            turn_left: true,
            turn_right: true,
            ..Default::default()
        };
        player.steer(&both, &tuning);
        assert!((player.heading - tuning.turn_rate).abs() < 1e-6);
    }

    #[test]
    fn test_thrust_along_heading() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        player.heading = std::f32::consts::FRAC_PI_2;

        let thrust = TickInput {
            thrust: true,
            ..Default::default()
        };
        player.steer(&thrust, &tuning);
        assert!((player.body.vel.x + tuning.thrust).abs() < 1e-6);
        assert!(player.body.vel.y.abs() < 1e-6);
    }

    #[test]
    fn test_step_caps_speed() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        player.body.vel = Vec2::new(0.0, tuning.max_speed);

        let thrust = TickInput {
            thrust: true,
            ..Default::default()
        };
        player.step(&thrust, &tuning);
        assert!((player.body.speed() - tuning.max_speed).abs() < 1e-5);
        assert!((player.body.pos.y - (tuning.ship_start.y + tuning.max_speed)).abs() < 1e-4);
    }

    #[test]
    fn test_huge_turn_rate_keeps_heading_bounded() {
        let tuning = Tuning {
            turn_rate: 1e10,
            ..Tuning::default()
        };
        let mut player = Player::new(&tuning);
        let left = TickInput {
            turn_left: true,
            ..Default::default()
        };

        for _ in 0..3 {
            player.step(&left, &tuning);
            assert!(player.heading.is_finite());
            assert!(player.heading.abs() <= std::f32::consts::PI);
        }
    }

    #[test]
    fn test_fire_assigns_fresh_ids() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        let a = player.fire(&tuning);
        let b = player.fire(&tuning);
        assert_ne!(a, b);
        assert_eq!(player.projectiles.alive_count(), 2);
    }

    #[test]
    fn test_fire_while_moving() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        player.body.vel = Vec2::new(1.0, 0.0);

        player.fire(&tuning);
        let shot = player.projectiles.alive().next().expect("projectile");
        assert!((shot.body.vel - Vec2::new(1.0, 3.0)).length() < 1e-6);
    }
}
