//! Entity pool with explicit liveness
//!
//! Entities are marked `Dead` during a tick and stay in the pool (so later
//! steps of the same tick can still see where they were) until `compact`
//! runs once at the end of the tick.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Liveness {
    #[default]
    Alive,
    Dead,
}

/// Anything that can live in a [`Pool`]
pub trait Mortal {
    fn liveness(&self) -> Liveness;

    fn kill(&mut self);

    fn is_alive(&self) -> bool {
        self.liveness() == Liveness::Alive
    }
}

/// Insertion-ordered arena of entities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pool<T> {
    items: Vec<T>,
}

impl<T> Default for Pool<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Mortal> Pool<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Live entries only
    pub fn alive(&self) -> impl Iterator<Item = &T> {
        self.items.iter().filter(|item| item.is_alive())
    }

    pub fn alive_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.items.iter_mut().filter(|item| item.is_alive())
    }

    pub fn alive_count(&self) -> usize {
        self.alive().count()
    }

    /// All entries, including ones killed since the last compaction
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop dead entries, keeping order. Returns how many were removed.
    pub fn compact(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.is_alive());
        before - self.items.len()
    }
}
