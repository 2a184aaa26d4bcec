pub mod collision;
pub mod common;
pub mod forces;
pub mod integration;
pub mod math;
pub mod objects;
pub mod scenario;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use collision::{detect_and_resolve, CollisionInfo};
pub use common::{PhysicsConfig, ResolutionConfig};
pub use math::{Transform, Vec2};
pub use objects::{Particle, RigidBody};
pub use scenario::ScenarioConfig;
pub use shapes::{Circle, Polygon, Shape, ShapeKind};
pub use world::{Bounds, ParticleSystem, PhysicsWorld, Spring};
