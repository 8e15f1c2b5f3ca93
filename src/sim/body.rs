//! Point-mass body shared by every simulated entity

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Position, velocity, mass and visual rotation of a simulated object
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    /// Must be > 0 for anything taking part in gravity or collision
    pub mass: f32,
    /// Sprite rotation (radians)
    pub rotation: f32,
}

impl Body {
    pub fn new(pos: Vec2, mass: f32) -> Self {
        debug_assert!(mass > 0.0, "body mass must be positive");
        Self {
            pos,
            vel: Vec2::ZERO,
            mass,
            rotation: 0.0,
        }
    }

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}
