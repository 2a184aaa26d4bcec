//! Semi-implicit (symplectic) Euler kernels shared by `RigidBody` and `Particle`.
//!
//! Velocity is always advanced before position, and the position update uses the
//! freshly updated velocity. Swapping that order turns this into explicit Euler,
//! which drifts in energy over long runs.

use crate::math::vec2::Vec2;

/// Advances linear state by one step: `v += a*dt; p += v*dt`.
pub fn integrate_linear(position: &mut Vec2, velocity: &mut Vec2, acceleration: Vec2, dt: f64) {
    *velocity += acceleration * dt;
    *position += *velocity * dt;
}

/// Advances angular state by one step: `w += alpha*dt; theta += w*dt`.
pub fn integrate_angular(angle: &mut f64, angular_velocity: &mut f64, angular_acceleration: f64, dt: f64) {
    *angular_velocity += angular_acceleration * dt;
    *angle += *angular_velocity * dt;
}
