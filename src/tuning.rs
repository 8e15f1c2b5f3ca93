//! Game constants as a loadable config
//!
//! The game runs on [`Tuning::default`], which mirrors `consts`. The native
//! runner can override it from a JSON file; missing fields keep their
//! defaults.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{GravityResponse, Hitbox};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Ship handling ===
    /// Heading change per tick (radians)
    pub turn_rate: f32,
    /// Velocity added per tick of thrust
    pub thrust: f32,
    pub max_speed: f32,
    pub ship_start: Vec2,

    // === Gravity ===
    pub grav_const: f32,
    pub star_mass: f32,
    pub ship_mass: f32,
    pub projectile_mass: f32,
    pub min_gravity_distance: f32,
    pub gravity_response: GravityResponse,
    /// Whether projectiles are pulled by the star too
    pub projectiles_feel_gravity: bool,

    // === Projectiles ===
    pub projectile_ttl: u32,
    pub projectile_speed: f32,

    // === Collision ===
    pub star_hitbox: Hitbox,
    pub ship_hitbox: Hitbox,
    pub projectile_hitbox: Hitbox,

    // === Effects ===
    pub explosion_frames: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            turn_rate: TURN_RATE,
            thrust: THRUST,
            max_speed: MAX_SPEED,
            ship_start: Vec2::new(SHIP_START_X, SHIP_START_Y),

            grav_const: GRAV_CONST,
            star_mass: STAR_MASS,
            ship_mass: SHIP_MASS,
            projectile_mass: PROJECTILE_MASS,
            min_gravity_distance: MIN_GRAVITY_DISTANCE,
            gravity_response: GravityResponse::Force,
            projectiles_feel_gravity: false,

            projectile_ttl: PROJECTILE_TTL,
            projectile_speed: PROJECTILE_SPEED,

            star_hitbox: Hitbox::circle(STAR_RADIUS),
            ship_hitbox: Hitbox::rect(SHIP_HALF_WIDTH, SHIP_HALF_HEIGHT),
            projectile_hitbox: Hitbox::circle(PROJECTILE_RADIUS),

            explosion_frames: EXPLOSION_FRAMES,
        }
    }
}

impl Tuning {
    /// Playfield size; positions wrap into [0, bounds)
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }

    /// The star sits at the centre of the playfield
    pub fn star_position(&self) -> Vec2 {
        self.bounds() / 2.0
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load tuning from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Can't read tuning file {}: {e}, using defaults", path.display());
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(tuning) if tuning.is_sane() => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Ok(_) => {
                log::warn!(
                    "Tuning in {} has out-of-range values, using defaults",
                    path.display()
                );
                Self::default()
            }
            Err(e) => {
                log::warn!("Bad tuning file {}: {e}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Masses and playfield must be positive for gravity and wrapping to be defined,
    /// ship handling finite and non-negative, and explosions at least one frame long
    pub fn is_sane(&self) -> bool {
        let non_negative = |v: f32| v.is_finite() && v >= 0.0;
        let positive = |v: f32| v.is_finite() && v > 0.0;

        positive(self.screen_width)
            && positive(self.screen_height)
            && positive(self.star_mass)
            && positive(self.ship_mass)
            && positive(self.projectile_mass)
            && positive(self.min_gravity_distance)
            && non_negative(self.max_speed)
            && non_negative(self.turn_rate)
            && non_negative(self.thrust)
            && non_negative(self.projectile_speed)
            && self.grav_const.is_finite()
            && self.explosion_frames >= 1
    }
}
