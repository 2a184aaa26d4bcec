pub mod bounds;
pub mod particle_system;
pub mod physics_world;

pub use bounds::Bounds;
pub use particle_system::{ParticleSystem, Spring};
pub use physics_world::PhysicsWorld;
