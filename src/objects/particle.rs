use super::rigid_body::inverse_or_zero;
use crate::integration::integrator;
use crate::math::vec2::Vec2;

/// Default draw radius for particles.
pub const PARTICLE_RADIUS: f64 = 5.0;

/// Point mass without shape or rotation. Used by force-only setups
/// (springs, mutual gravitation); it never takes part in collision detection.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Acceleration applied during the last `integrate` call.
    pub acceleration: Vec2,
    pub sum_forces: Vec2,
    pub inv_mass: f64,
    pub radius: f64,
}

impl Particle {
    pub fn new(x: f64, y: f64, mass: f64) -> Self {
        let mut particle = Self {
            position: Vec2::new(x, y),
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            sum_forces: Vec2::ZERO,
            inv_mass: 0.0,
            radius: PARTICLE_RADIUS,
        };
        particle.set_mass(mass);
        particle
    }

    /// Sets the mass; values at or below the mass epsilon make the particle static.
    pub fn set_mass(&mut self, mass: f64) {
        self.inv_mass = inverse_or_zero(mass);
    }

    pub fn is_static(&self) -> bool {
        self.inv_mass == 0.0
    }

    pub fn add_force(&mut self, force: Vec2) {
        self.sum_forces += force;
    }

    pub fn clear_forces(&mut self) {
        self.sum_forces = Vec2::ZERO;
    }

    /// Semi-implicit Euler step. Static particles only have their accumulator cleared.
    pub fn integrate(&mut self, dt: f64) {
        if self.is_static() {
            self.clear_forces();
            return;
        }
        self.acceleration = self.sum_forces * self.inv_mass;
        integrator::integrate_linear(&mut self.position, &mut self.velocity, self.acceleration, dt);
        self.clear_forces();
    }
}
