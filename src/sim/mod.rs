//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call per frame, no sub-stepping
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod effect;
pub mod gravity;
pub mod kinematics;
pub mod player;
pub mod pool;
pub mod projectile;
pub mod state;
pub mod tick;

pub use body::Body;
pub use collision::Hitbox;
pub use effect::Effect;
pub use gravity::{GravityResponse, GravitySolver};
pub use player::Player;
pub use pool::{Liveness, Mortal, Pool};
pub use projectile::Projectile;
pub use state::{GameEvent, GamePhase, GameState, Star};
pub use tick::{TickInput, tick};
