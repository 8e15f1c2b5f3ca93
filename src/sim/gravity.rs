//! Star gravity
//!
//! One fixed heavy body pulls on every participant with F = G·M·m / r².
//! The heavy body itself never moves.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use crate::Tuning;

/// How the pull is turned into a velocity change each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GravityResponse {
    /// Add F directly to velocity
    #[default]
    Force,
    /// Add F / m (true Newtonian acceleration)
    Acceleration,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravitySolver {
    pub grav_const: f32,
    /// Floor applied to r before squaring
    pub min_distance: f32,
    pub response: GravityResponse,
}

impl GravitySolver {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            grav_const: tuning.grav_const,
            min_distance: tuning.min_gravity_distance,
            response: tuning.gravity_response,
        }
    }

    /// Velocity change `heavy` imposes on `body` for one tick
    pub fn pull(&self, heavy: &Body, body: &Body) -> Vec2 {
        let offset = heavy.pos - body.pos;
        let r = offset.length();
        if r == 0.0 {
            // Direction undefined when centres coincide
            log::trace!("gravity: body at star centre {:?}, no pull", body.pos);
            return Vec2::ZERO;
        }

        let r = r.max(self.min_distance);
        let force = self.grav_const * heavy.mass * body.mass / (r * r);
        let impulse = offset.normalize() * force;

        match self.response {
            GravityResponse::Force => impulse,
            GravityResponse::Acceleration => impulse / body.mass,
        }
    }

    /// Apply one tick of gravity from `heavy` to every body in `bodies`
    pub fn apply<'a>(&self, heavy: &Body, bodies: impl IntoIterator<Item = &'a mut Body>) {
        for body in bodies {
            let dv = self.pull(heavy, body);
            log::trace!("gravity: {:?} dv={:?}", body.pos, dv);
            body.vel += dv;
        }
    }
}
