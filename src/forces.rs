//! Force generators.
//!
//! Each generator is a pure function of the participants' current state and returns the
//! force to feed into an accumulator (`add_force`). Nothing here mutates or retains a body.
//! Screen coordinates are assumed: +y points down, so weight is positive in y.

use crate::math::vec2::Vec2;
use crate::objects::{Particle, RigidBody};

/// Read access to the state the force generators need. Implemented by both
/// [`RigidBody`] and [`Particle`].
pub trait Kinematic {
    fn position(&self) -> Vec2;
    fn velocity(&self) -> Vec2;
    fn inv_mass(&self) -> f64;

    fn mass(&self) -> f64 {
        let inv_mass = self.inv_mass();
        if inv_mass == 0.0 {
            0.0
        } else {
            1.0 / inv_mass
        }
    }
}

impl Kinematic for RigidBody {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn inv_mass(&self) -> f64 {
        self.inv_mass
    }
}

impl Kinematic for Particle {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn inv_mass(&self) -> f64 {
        self.inv_mass
    }
}

/// Constant weight `m * g` along +y. Zero for static participants.
pub fn weight_force<K: Kinematic>(body: &K, gravity: f64) -> Vec2 {
    if body.inv_mass() == 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(0.0, body.mass() * gravity)
}

/// Quadratic drag opposing the velocity: `-k * |v|^2 * v_hat`.
pub fn drag_force<K: Kinematic>(body: &K, k: f64) -> Vec2 {
    let velocity = body.velocity();
    let speed_sq = velocity.magnitude_sq();
    if speed_sq > 0.0 {
        velocity.normalized() * (-k * speed_sq)
    } else {
        Vec2::ZERO
    }
}

/// Inverse-square attraction pulling `a` toward `b`: `G * m_a * m_b / r^2`.
///
/// The squared distance is clamped to at least 1 so close encounters stay finite.
/// Returns zero if either participant is static. Apply the negated force to `b`.
pub fn gravitational_force<A: Kinematic, B: Kinematic>(a: &A, b: &B, g: f64) -> Vec2 {
    if a.inv_mass() == 0.0 || b.inv_mass() == 0.0 {
        return Vec2::ZERO;
    }

    let d = b.position() - a.position();
    let distance_sq = d.magnitude_sq().max(1.0);
    let magnitude = g * a.mass() * b.mass() / distance_sq;
    d.normalized() * magnitude
}

/// Hookean spring between `a` and `b`, as the force on `a`: `k * (|d| - rest_length)` along `d = b - a`.
///
/// A stretched spring pulls `a` toward `b`; a compressed one pushes it away.
/// Apply the negated force to `b`.
pub fn spring_force<A: Kinematic, B: Kinematic>(a: &A, b: &B, rest_length: f64, k: f64) -> Vec2 {
    let d = b.position() - a.position();
    let displacement = d.magnitude() - rest_length;
    d.normalized() * (k * displacement)
}
