//! Starwars - a single-player orbital arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (gravity, kinematics, projectiles, collisions, game state)
//! - `renderer`: Draw list handed to the external sprite renderer
//! - `platform`: Key-event input and the headless autopilot
//! - `tuning`: Game constants as a loadable config

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use std::f32::consts::PI;

    /// Playfield dimensions (pixels, y up, origin bottom-left)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Heading change per tick while a turn key is held (1 degree)
    pub const TURN_RATE: f32 = PI / 180.0;
    /// Velocity added per tick while thrusting
    pub const THRUST: f32 = 0.125;
    /// Ship speed cap (pixels/tick)
    pub const MAX_SPEED: f32 = 5.0;

    /// Gravitational constant
    pub const GRAV_CONST: f32 = 1.0;
    pub const STAR_MASS: f32 = 1000.0;
    pub const SHIP_MASS: f32 = 0.1;
    pub const PROJECTILE_MASS: f32 = 0.01;
    /// Distances below this are treated as this when computing r²
    pub const MIN_GRAVITY_DISTANCE: f32 = 1.0;

    /// Projectile lifetime in ticks
    pub const PROJECTILE_TTL: u32 = 300;
    /// Launch speed along the ship heading, added to ship velocity
    pub const PROJECTILE_SPEED: f32 = 3.0;

    /// Ship spawn point
    pub const SHIP_START_X: f32 = 50.0;
    pub const SHIP_START_Y: f32 = 50.0;

    /// Hitbox sizes
    pub const STAR_RADIUS: f32 = 32.0;
    pub const SHIP_HALF_WIDTH: f32 = 12.0;
    pub const SHIP_HALF_HEIGHT: f32 = 9.0;
    pub const PROJECTILE_RADIUS: f32 = 3.0;

    /// Explosion spritesheet length
    pub const EXPLOSION_FRAMES: u32 = 60;
}

/// Normalize angle to [-π, π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    let wrapped = (angle + PI).rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU
    if wrapped >= TAU { -PI } else { wrapped - PI }
}

/// Unit vector the ship's nose points along.
///
/// Heading 0 points up (+y); positive headings turn counter-clockwise.
#[inline]
pub fn heading_direction(heading: f32) -> Vec2 {
    Vec2::new(-heading.sin(), heading.cos())
}

/// Angle of a velocity vector (radians, measured from +x)
#[inline]
pub fn velocity_angle(vel: Vec2) -> f32 {
    vel.y.atan2(vel.x)
}
