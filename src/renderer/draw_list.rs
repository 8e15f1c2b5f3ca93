//! Per-frame draw commands

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{GameState, Mortal};

/// Which sprite to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sprite {
    Star,
    Ship,
    Projectile,
    /// Explosion spritesheet at the given frame
    Explosion { frame: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawCommand {
    pub sprite: Sprite,
    pub pos: Vec2,
    /// Radians, counter-clockwise
    pub rotation: f32,
}

/// Everything to draw this frame, back to front: star, ship, its projectiles, explosions.
///
/// A destroyed ship takes its projectiles off screen with it.
pub fn draw_list(state: &GameState) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(2 + state.player.projectiles.len() + state.effects.len());

    commands.push(DrawCommand {
        sprite: Sprite::Star,
        pos: state.star.body.pos,
        rotation: state.star.body.rotation,
    });

    if state.player.is_alive() {
        commands.push(DrawCommand {
            sprite: Sprite::Ship,
            pos: state.player.body.pos,
            rotation: state.player.body.rotation,
        });

        commands.extend(state.player.projectiles.alive().map(|shot| DrawCommand {
            sprite: Sprite::Projectile,
            pos: shot.body.pos,
            rotation: shot.body.rotation,
        }));
    }

    commands.extend(state.effects.alive().map(|fx| DrawCommand {
        sprite: Sprite::Explosion {
            frame: fx.current_frame,
        },
        pos: fx.pos,
        rotation: 0.0,
    }));

    commands
}
