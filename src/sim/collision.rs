//! Collision shapes and overlap tests
//!
//! Every body carries a hitbox centred on its position: a circle or an
//! axis-aligned rectangle. Shapes that only touch along an edge do not
//! overlap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Collision shape, centred on the owning body's position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Hitbox {
    Circle { radius: f32 },
    /// Axis-aligned box, ignores sprite rotation
    Rect { half_extents: Vec2 },
}

impl Hitbox {
    pub fn circle(radius: f32) -> Self {
        Hitbox::Circle { radius }
    }

    pub fn rect(half_width: f32, half_height: f32) -> Self {
        Hitbox::Rect {
            half_extents: Vec2::new(half_width, half_height),
        }
    }

    /// Check whether this hitbox at `pos` overlaps `other` at `other_pos`
    pub fn overlaps(&self, pos: Vec2, other: &Hitbox, other_pos: Vec2) -> bool {
        match (*self, *other) {
            (Hitbox::Circle { radius: ra }, Hitbox::Circle { radius: rb }) => {
                circle_circle(pos, ra, other_pos, rb)
            }
            (Hitbox::Rect { half_extents: ha }, Hitbox::Rect { half_extents: hb }) => {
                rect_rect(pos, ha, other_pos, hb)
            }
            (Hitbox::Circle { radius }, Hitbox::Rect { half_extents }) => {
                circle_rect(pos, radius, other_pos, half_extents)
            }
            (Hitbox::Rect { half_extents }, Hitbox::Circle { radius }) => {
                circle_rect(other_pos, radius, pos, half_extents)
            }
        }
    }
}

#[inline]
fn circle_circle(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let reach = ra + rb;
    a.distance_squared(b) < reach * reach
}

#[inline]
fn rect_rect(a: Vec2, ha: Vec2, b: Vec2, hb: Vec2) -> bool {
    let gap = (a - b).abs();
    let reach = ha + hb;
    gap.x < reach.x && gap.y < reach.y
}

/// Closest point on the box to the circle centre decides the hit
#[inline]
fn circle_rect(center: Vec2, radius: f32, rect_center: Vec2, half_extents: Vec2) -> bool {
    let closest = center.clamp(rect_center - half_extents, rect_center + half_extents);
    center.distance_squared(closest) < radius * radius
}
