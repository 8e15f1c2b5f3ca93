//! Platform abstraction layer
//!
//! Turns whatever the host window delivers into per-tick simulation input:
//! - `input`: key-down/key-up tracking
//! - `autopilot`: seeded key presses for headless runs

pub mod autopilot;
pub mod input;

pub use autopilot::Autopilot;
pub use input::{Controls, Key};
