//! Scenario files for the headless driver.
//!
//! A scenario is a `serde`-deserializable description of a world: the physics
//! parameters, the fixed step, how many steps to run, and the initial bodies.
//!
//! ```yaml
//! dt: 0.0166667
//! steps: 600
//! config:
//!   gravity: 10.0
//!   bounds: { width: 1280.0, height: 720.0 }
//! bodies:
//!   - shape: { type: box, width: 100.0, height: 100.0 }
//!     mass: 5.0
//!     position: [640.0, 360.0]
//!   - shape: { type: circle, radius: 15.0 }
//!     mass: 1.0
//!     position: [100.0, 100.0]
//!     velocity: [50.0, 0.0]
//! ```

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::common::PhysicsConfig;
use crate::math::vec2::Vec2;
use crate::objects::RigidBody;
use crate::shapes::{Circle, Polygon, Shape};
use crate::world::PhysicsWorld;

#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeConfig {
    Circle { radius: f64 },
    Box { width: f64, height: f64 },
    Polygon { vertices: Vec<Vec2> },
}

/// Initial state of one body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub shape: ShapeConfig,
    pub mass: f64, // <= 1e-6 makes the body static
    pub position: Vec2,
    #[serde(default)]
    pub velocity: Vec2,
    #[serde(default)]
    pub angle: f64,
    #[serde(default)]
    pub angular_velocity: f64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub config: PhysicsConfig,
    #[serde(default = "ScenarioConfig::default_dt")]
    pub dt: f64,
    #[serde(default = "ScenarioConfig::default_steps")]
    pub steps: usize,
    pub bodies: Vec<BodyConfig>,
}

/// Fails unless `value` is a finite number. NaN and infinities fail.
fn ensure_finite(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        bail!("{name} must be a finite number, got {value}");
    }
    Ok(())
}

fn ensure_finite_vec(name: &str, value: Vec2) -> Result<()> {
    ensure_finite(name, value.x)?;
    ensure_finite(name, value.y)
}

impl ShapeConfig {
    /// Builds the shape, rejecting geometry the constructors would panic on.
    pub fn build(&self, mass: f64) -> Result<Shape> {
        let shape = match self {
            ShapeConfig::Circle { radius } => {
                ensure_finite("circle radius", *radius)?;
                if *radius < 0.0 {
                    bail!("circle radius must be non-negative, got {radius}");
                }
                Circle::new(*radius, mass).into()
            }
            ShapeConfig::Box { width, height } => {
                ensure_finite("box width", *width)?;
                ensure_finite("box height", *height)?;
                if *width <= 0.0 || *height <= 0.0 {
                    bail!("box extents must be positive, got {width}x{height}");
                }
                Polygon::new_box(*width, *height, mass).into()
            }
            ShapeConfig::Polygon { vertices } => {
                if vertices.len() < 3 {
                    bail!("polygon needs at least 3 vertices, got {}", vertices.len());
                }
                for vertex in vertices {
                    ensure_finite_vec("polygon vertex", *vertex)?;
                }
                Polygon::new(vertices.clone(), mass).into()
            }
        };
        Ok(shape)
    }
}

impl BodyConfig {
    pub fn build(&self) -> Result<RigidBody> {
        ensure_finite("mass", self.mass)?;
        ensure_finite_vec("position", self.position)?;
        ensure_finite_vec("velocity", self.velocity)?;
        ensure_finite("angle", self.angle)?;
        ensure_finite("angular_velocity", self.angular_velocity)?;

        let shape = self.shape.build(self.mass)?;
        let mut body = RigidBody::new(&shape, self.position.x, self.position.y);
        body.velocity = self.velocity;
        body.angle = self.angle;
        body.angular_velocity = self.angular_velocity;
        body.update_world_vertices();
        Ok(body)
    }
}

impl ScenarioConfig {
    fn default_dt() -> f64 {
        1.0 / 60.0
    }

    fn default_steps() -> usize {
        600
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let scenario: ScenarioConfig = serde_yaml::from_str(yaml).context("invalid scenario YAML")?;
        ensure_finite("dt", scenario.dt)?;
        if scenario.dt <= 0.0 {
            bail!("dt must be positive, got {}", scenario.dt);
        }

        let config = &scenario.config;
        ensure_finite("gravity", config.gravity)?;
        ensure_finite("gravitational_constant", config.gravitational_constant)?;
        ensure_finite("spring_constant", config.spring_constant)?;
        ensure_finite("drag_coefficient", config.drag_coefficient)?;
        ensure_finite("restitution", config.resolution.restitution)?;
        ensure_finite("correction_percent", config.resolution.correction_percent)?;
        if let Some(bounds) = &config.bounds {
            ensure_finite("bounds width", bounds.width)?;
            ensure_finite("bounds height", bounds.height)?;
        }
        Ok(scenario)
    }

    /// Builds a world holding every body of the scenario, in file order.
    pub fn build_world(&self) -> Result<PhysicsWorld> {
        let mut world = PhysicsWorld::new(self.config.clone());
        for (i, body) in self.bodies.iter().enumerate() {
            let body = body.build().with_context(|| format!("body #{i}"))?;
            world.add_body(body);
        }
        Ok(world)
    }
}
