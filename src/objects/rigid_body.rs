use crate::integration::integrator;
use crate::math::{Transform, Vec2};
use crate::shapes::{Shape, ShapeKind};

/// Masses and inertias at or below this are treated as infinite (inverse 0).
pub const MASS_EPSILON: f64 = 1e-6;

/// Reciprocal with the zero-guard used for mass and inertia.
pub(crate) fn inverse_or_zero(value: f64) -> f64 {
    if value <= MASS_EPSILON {
        0.0
    } else {
        1.0 / value
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    // Geometry, owned exclusively by this body
    pub shape: Shape,

    // Linear state
    pub position: Vec2,
    pub velocity: Vec2,
    pub sum_forces: Vec2,

    // Angular state
    pub angle: f64, // Radians
    pub angular_velocity: f64,
    pub sum_torque: f64,

    // Fixed at construction
    pub inv_mass: f64,    // 0.0 for static
    pub inv_inertia: f64, // 0.0 if torque cannot rotate the body
}

impl RigidBody {
    /// Creates a body at `(x, y)` from a copy of `shape`.
    ///
    /// Inverse mass and inverse inertia are derived from the shape; a shape whose mass
    /// is at most [`MASS_EPSILON`] produces a static body. Polygon world vertices are
    /// computed immediately, so they are valid before the first step.
    pub fn new(shape: &Shape, x: f64, y: f64) -> Self {
        let shape = shape.clone();
        let inv_mass = inverse_or_zero(shape.mass());
        let inv_inertia = inverse_or_zero(shape.moment_of_inertia());

        let mut body = Self {
            shape,
            position: Vec2::new(x, y),
            velocity: Vec2::ZERO,
            sum_forces: Vec2::ZERO,
            angle: 0.0,
            angular_velocity: 0.0,
            sum_torque: 0.0,
            inv_mass,
            inv_inertia,
        };
        body.update_world_vertices();
        body
    }

    pub fn is_static(&self) -> bool {
        self.inv_mass == 0.0
    }

    /// Mass of the body, 0.0 for static bodies.
    pub fn mass(&self) -> f64 {
        if self.inv_mass > 0.0 {
            1.0 / self.inv_mass
        } else {
            0.0
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    pub fn transform(&self) -> Transform {
        Transform::new(self.position, self.angle)
    }

    /// Radius for circle bodies, `None` otherwise.
    pub fn radius(&self) -> Option<f64> {
        self.shape.as_circle().map(|circle| circle.radius)
    }

    /// Current world-space polygon outline, `None` for circles.
    /// Already rotated and translated; do not apply the body transform again.
    pub fn world_vertices(&self) -> Option<&[Vec2]> {
        self.shape.as_polygon().map(|polygon| polygon.world_vertices.as_slice())
    }

    /// Accumulates a force through the center. Takes effect at the next `integrate`.
    pub fn add_force(&mut self, force: Vec2) {
        self.sum_forces += force;
    }

    pub fn add_torque(&mut self, torque: f64) {
        self.sum_torque += torque;
    }

    /// Applies a force at a world-space point, accumulating both the force and the torque `r x F`.
    pub fn add_force_at_point(&mut self, force: Vec2, point_world: Vec2) {
        self.add_force(force);
        let arm = point_world - self.position;
        self.add_torque(arm.cross(force));
    }

    pub fn clear_forces(&mut self) {
        self.sum_forces = Vec2::ZERO;
    }

    pub fn clear_torque(&mut self) {
        self.sum_torque = 0.0;
    }

    /// Advances the body by `dt` with semi-implicit Euler, refreshes polygon world
    /// vertices and clears both accumulators.
    pub fn integrate(&mut self, dt: f64) {
        if self.inv_mass > 0.0 {
            let acceleration = self.sum_forces * self.inv_mass;
            integrator::integrate_linear(&mut self.position, &mut self.velocity, acceleration, dt);
        }

        if self.inv_inertia > 0.0 {
            let angular_acceleration = self.sum_torque * self.inv_inertia;
            integrator::integrate_angular(&mut self.angle, &mut self.angular_velocity, angular_acceleration, dt);
        }

        self.update_world_vertices();

        self.clear_forces();
        self.clear_torque();
    }

    /// Recomputes the polygon world-vertex cache from `position` and `angle`. No-op for circles.
    pub fn update_world_vertices(&mut self) {
        let transform = self.transform();
        if let Shape::Polygon(polygon) = &mut self.shape {
            transform.apply_all(&polygon.local_vertices, &mut polygon.world_vertices);
        }
    }
}
