//! Keyboard state to `TickInput`
//!
//! Held keys (turn, thrust) stay active until released. Fire is one-shot:
//! pressing it latches a single shot for the next tick, and auto-repeat
//! while it is held does not fire again.

use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    /// Thrust
    Up,
    /// Fire
    Down,
}

#[derive(Debug, Clone, Default)]
pub struct Controls {
    left: bool,
    right: bool,
    thrust: bool,
    fire_held: bool,
    fire_pending: bool,
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        match key {
            Key::Left => self.left = true,
            Key::Right => self.right = true,
            Key::Up => self.thrust = true,
            Key::Down => {
                if !self.fire_held {
                    self.fire_pending = true;
                }
                self.fire_held = true;
            }
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Left => self.left = false,
            Key::Right => self.right = false,
            Key::Up => self.thrust = false,
            Key::Down => self.fire_held = false,
        }
    }

    /// Input for the next tick; consumes a latched shot
    pub fn take_input(&mut self) -> TickInput {
        let input = TickInput {
            turn_left: self.left,
            turn_right: self.right,
            thrust: self.thrust,
            fire: self.fire_pending,
        };
        self.fire_pending = false;
        input
    }
}
