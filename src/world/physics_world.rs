use crate::{
    collision,
    common::PhysicsConfig,
    forces,
    objects::rigid_body::RigidBody,
    shapes::Shape,
};

/// Owns the body collection and runs the fixed-step loop:
/// accumulate forces, integrate, then the all-pairs collision pass.
#[derive(Debug)]
pub struct PhysicsWorld {
    pub bodies: Vec<RigidBody>,
    pub config: PhysicsConfig,
}

impl PhysicsWorld {
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            bodies: Vec::new(),
            config,
        }
    }

    /// Adds a rigid body to the world and returns its index.
    pub fn add_body(&mut self, body: RigidBody) -> usize {
        let index = self.bodies.len();
        self.bodies.push(body);
        index
    }

    /// Builds a body from a copy of `shape` at `(x, y)` and adds it.
    pub fn create_body(&mut self, shape: &Shape, x: f64, y: f64) -> usize {
        self.add_body(RigidBody::new(shape, x, y))
    }

    /// Advances the simulation by one time step `dt`. Non-positive and NaN steps are ignored.
    pub fn step(&mut self, dt: f64) {
        if !(dt > 0.0) {
            return;
        }

        // 1. Accumulate forces
        for body in self.bodies.iter_mut() {
            let weight = forces::weight_force(body, self.config.gravity);
            body.add_force(weight);
            if self.config.drag_coefficient > 0.0 {
                let drag = forces::drag_force(body, self.config.drag_coefficient);
                body.add_force(drag);
            }
        }

        // 2. Integrate motion
        for body in self.bodies.iter_mut() {
            body.integrate(dt);
            if let Some(bounds) = &self.config.bounds {
                bounds.keep_in_bounds(body);
            }
        }

        // 3. Detect and resolve collisions in pair order
        collision::detect_and_resolve(&mut self.bodies, &self.config.resolution, self.config.log_collisions);
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new(PhysicsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2::Vec2;
    use crate::shapes::{Circle, Polygon};
    use crate::world::Bounds;
    const EPSILON: f64 = 1e-9;

    fn ball(mass: f64) -> Shape {
        Circle::new(1.0, mass).into()
    }

    #[test]
    fn test_world_new() {
        let world = PhysicsWorld::default();
        assert!(world.bodies.is_empty());
        assert_eq!(world.config.gravity, 10.0);
    }

    #[test]
    fn test_create_body_returns_indices() {
        let mut world = PhysicsWorld::default();
        let idx1 = world.create_body(&ball(1.0), 0.0, 0.0);
        let idx2 = world.create_body(&ball(2.0), 5.0, 0.0);
        assert_eq!(idx1, 0);
        assert_eq!(idx2, 1);
        assert_eq!(world.bodies[1].mass(), 2.0);
    }

    #[test]
    fn test_step_gravity() {
        let mut world = PhysicsWorld::default();
        let idx = world.create_body(&ball(1.0), 0.0, 0.0);

        world.step(0.1);

        // g = 10 along +y: v = 1, p = 0.1
        assert!((world.bodies[idx].velocity.y - 1.0).abs() < EPSILON);
        assert!((world.bodies[idx].position.y - 0.1).abs() < EPSILON);
        assert!(world.bodies[idx].velocity.x.abs() < EPSILON);
    }

    #[test]
    fn test_step_drag_slows_body() {
        let config = PhysicsConfig { gravity: 0.0, drag_coefficient: 0.1, ..Default::default() };
        let mut world = PhysicsWorld::new(config);
        let idx = world.create_body(&ball(1.0), 0.0, 0.0);
        world.bodies[idx].velocity = Vec2::new(10.0, 0.0);

        world.step(0.1);

        // drag = -0.1 * 100 = -10, v = 10 - 1 = 9
        assert!((world.bodies[idx].velocity.x - 9.0).abs() < EPSILON);
    }

    #[test]
    fn test_step_ignores_non_positive_dt() {
        let mut world = PhysicsWorld::default();
        world.create_body(&ball(1.0), 0.0, 0.0);
        world.step(0.0);
        world.step(-1.0);
        world.step(f64::NAN);
        assert_eq!(world.bodies[0].position, Vec2::ZERO);
        assert!(!world.bodies[0].velocity.x.is_nan() && !world.bodies[0].velocity.y.is_nan());
        assert_eq!(world.bodies[0].sum_forces, Vec2::ZERO);
    }

    #[test]
    fn test_step_static_body_stays_put() {
        let mut world = PhysicsWorld::default();
        let idx = world.create_body(&ball(0.0), 3.0, 4.0);
        let initial_state = world.bodies[idx].clone();

        world.step(0.1);

        assert_eq!(world.bodies[idx], initial_state);
    }

    #[test]
    fn test_step_ball_rests_on_static_box() {
        let mut world = PhysicsWorld::default();
        world.create_body(&Polygon::new_box(20.0, 2.0, 0.0).into(), 0.0, 2.0);
        let ball_idx = world.create_body(&ball(1.0), 0.0, 0.0);

        for _ in 0..300 {
            world.step(1.0 / 60.0);
        }

        // Top face of the box is y = 1; the ball must not sink through it.
        let ball = &world.bodies[ball_idx];
        assert!(ball.position.y < 1.0, "ball sank to {}", ball.position.y);
        assert!(ball.position.y > -1.0);
        assert_eq!(world.bodies[0].position, Vec2::new(0.0, 2.0));
    }

    #[test]
    fn test_step_with_bounds() {
        let config = PhysicsConfig { bounds: Some(Bounds::new(100.0, 100.0)), ..Default::default() };
        let mut world = PhysicsWorld::new(config);
        let idx = world.create_body(&Circle::new(5.0, 1.0).into(), 50.0, 94.0);
        world.bodies[idx].velocity = Vec2::new(0.0, 100.0);

        world.step(0.1);

        assert!((world.bodies[idx].position.y - 95.0).abs() < EPSILON);
        assert!(world.bodies[idx].velocity.y < 0.0);
    }
}
