//! Explosion effects

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::pool::{Liveness, Mortal};

/// One explosion animation playing at a fixed spot
///
/// Frame 0 is shown on the tick the explosion spawns, so every frame of the
/// sheet plays once. An effect with no frames is born dead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Effect {
    pub pos: Vec2,
    pub frame_count: u32,
    pub current_frame: u32,
    pub liveness: Liveness,
}

impl Mortal for Effect {
    fn liveness(&self) -> Liveness {
        self.liveness
    }

    fn kill(&mut self) {
        self.liveness = Liveness::Dead;
    }
}

impl Effect {
    pub fn new(pos: Vec2, frame_count: u32) -> Self {
        Self {
            pos,
            frame_count,
            current_frame: 0,
            liveness: if frame_count == 0 {
                Liveness::Dead
            } else {
                Liveness::Alive
            },
        }
    }

    /// Show the next frame; dies once it runs past the last one
    pub fn advance(&mut self) {
        self.current_frame += 1;
        if self.current_frame >= self.frame_count {
            self.kill();
        }
    }
}
