//! Rendering interface
//!
//! Sprite drawing happens in the host framework; this module only decides
//! what to draw each frame and in which order.

pub mod draw_list;

pub use draw_list::{DrawCommand, Sprite, draw_list};
