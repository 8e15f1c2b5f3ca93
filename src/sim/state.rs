//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::collision::Hitbox;
use super::effect::Effect;
use super::player::Player;
use super::pool::Pool;
use crate::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ship is flying
    Running,
    /// Ship hit the star; only explosions keep animating
    GameOver,
}

/// Something that happened during a tick, for logging and sound hooks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ProjectileFired { id: u32 },
    ProjectileExpired { id: u32 },
    ProjectileHitStar { id: u32, pos: Vec2 },
    PlayerDestroyed { pos: Vec2 },
}

/// The fixed gravity well
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Star {
    pub body: Body,
    pub hitbox: Hitbox,
}

impl Star {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            body: Body::new(tuning.star_position(), tuning.star_mass),
            hitbox: tuning.star_hitbox,
        }
    }

    /// Does a hitbox at `pos` touch the star?
    pub fn hit_by(&self, hitbox: &Hitbox, pos: Vec2) -> bool {
        self.hitbox.overlaps(self.body.pos, hitbox, pos)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub tuning: Tuning,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub star: Star,
    pub player: Player,
    /// Active explosions
    pub effects: Pool<Effect>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl GameState {
    /// Set up a fresh session: star at its spot, ship at the start point
    pub fn new(tuning: Tuning) -> Self {
        Self {
            time_ticks: 0,
            phase: GamePhase::Running,
            star: Star::new(&tuning),
            player: Player::new(&tuning),
            effects: Pool::new(),
            tuning,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Start an explosion at `pos`
    pub fn spawn_effect(&mut self, pos: Vec2) {
        self.effects.push(Effect::new(pos, self.tuning.explosion_frames));
    }
}
