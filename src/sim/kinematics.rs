//! Explicit Euler motion on a wrapping playfield

use glam::Vec2;

use super::body::Body;

/// Rescale `vel` so its length does not exceed `max_speed`, keeping direction
#[inline]
pub fn clamp_speed(vel: Vec2, max_speed: f32) -> Vec2 {
    vel.clamp_length_max(max_speed)
}

/// Bring a coordinate back into [0, bound) after at most one bound-width of overshoot
#[inline]
pub fn wrap_coordinate(value: f32, bound: f32) -> f32 {
    let wrapped = if value >= bound {
        value - bound
    } else if value < 0.0 {
        value + bound
    } else {
        value
    };
    // A tiny negative plus the bound can round up to exactly the bound
    if wrapped >= bound { wrapped - bound } else { wrapped }
}

/// Wrap each axis independently (toroidal playfield)
#[inline]
pub fn wrap_position(pos: Vec2, bounds: Vec2) -> Vec2 {
    Vec2::new(
        wrap_coordinate(pos.x, bounds.x),
        wrap_coordinate(pos.y, bounds.y),
    )
}

/// Move a body by one tick of velocity and wrap it onto the playfield
pub fn integrate(body: &mut Body, bounds: Vec2) {
    body.pos = wrap_position(body.pos + body.vel, bounds);
}
