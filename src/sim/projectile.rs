//! Time-limited projectiles fired by the ship

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::collision::Hitbox;
use super::kinematics::integrate;
use super::pool::{Liveness, Mortal};
use crate::{Tuning, heading_direction, velocity_angle};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub body: Body,
    /// Ticks survived since launch
    pub age: u32,
    /// Removed once `age` exceeds this
    pub ttl: u32,
    pub hitbox: Hitbox,
    pub liveness: Liveness,
}

impl Mortal for Projectile {
    fn liveness(&self) -> Liveness {
        self.liveness
    }

    fn kill(&mut self) {
        self.liveness = Liveness::Dead;
    }
}

impl Projectile {
    /// Launch from `owner` along `heading`, inheriting the owner's velocity
    pub fn launch(id: u32, owner: &Body, heading: f32, tuning: &Tuning) -> Self {
        let vel = heading_direction(heading) * tuning.projectile_speed + owner.vel;
        let mut body = Body::new(owner.pos, tuning.projectile_mass).with_velocity(vel);
        body.rotation = velocity_angle(vel);

        Self {
            id,
            body,
            age: 0,
            ttl: tuning.projectile_ttl,
            hitbox: tuning.projectile_hitbox,
            liveness: Liveness::Alive,
        }
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.age > self.ttl
    }

    /// Age by one tick, then move. Returns `false` if the projectile just expired.
    pub fn step(&mut self, bounds: Vec2) -> bool {
        self.age += 1;
        if self.is_expired() {
            self.kill();
            return false;
        }

        integrate(&mut self.body, bounds);
        self.body.rotation = velocity_angle(self.body.vel);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_launch_inherits_owner_velocity() {
        let tuning = Tuning::default();
        let owner = Body::new(Vec2::new(100.0, 100.0), 0.1).with_velocity(Vec2::new(1.0, 0.0));

        let shot = Projectile::launch(7, &owner, 0.0, &tuning);
        assert!((shot.body.vel.x - 1.0).abs() < 1e-6);
        assert!((shot.body.vel.y - 3.0).abs() < 1e-6);
        assert_eq!(shot.body.pos, owner.pos);
        assert_eq!(shot.body.mass, tuning.projectile_mass);
        assert_eq!(shot.age, 0);
        assert_eq!(shot.id, 7);
    }

    #[test]
    fn test_rotation_follows_velocity() {
        let tuning = Tuning::default();
        let owner = Body::new(Vec2::new(100.0, 100.0), 0.1);
        let mut shot = Projectile::launch(1, &owner, 0.0, &tuning);
        assert!((shot.body.rotation - FRAC_PI_2).abs() < 1e-6);

        shot.body.vel = Vec2::new(-2.0, 0.0);
        shot.step(tuning.bounds());
        assert!((shot.body.rotation.abs() - std::f32::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn test_expires_after_ttl() {
        let tuning = Tuning {
            projectile_ttl: 3,
            ..Tuning::default()
        };
        let owner = Body::new(Vec2::new(100.0, 100.0), 0.1);
        let mut shot = Projectile::launch(1, &owner, 0.0, &tuning);

        for _ in 0..3 {
            assert!(shot.step(tuning.bounds()));
        }
        assert!(shot.is_alive());
        assert!(!shot.step(tuning.bounds()));
        assert!(!shot.is_alive());
    }
}
