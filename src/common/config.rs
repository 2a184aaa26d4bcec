//! Simulation parameters, passed explicitly to the step and collision functions.
//!
//! Every field has a default, so a scenario file only needs to list what it changes:
//!
//! ```yaml
//! gravity: 10.0
//! drag_coefficient: 0.01
//! resolution:
//!   restitution: 0.5
//!   correction_percent: 0.8
//! bounds:
//!   width: 1280.0
//!   height: 720.0
//! ```

use serde::Deserialize;

use crate::world::Bounds;

/// Parameters of the impulse resolver.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ResolutionConfig {
    /// Coefficient of restitution along the normal. Range [0, 1].
    pub restitution: f64,
    /// Fraction of the penetration removed by positional correction each pass.
    pub correction_percent: f64,
    /// Skip the velocity impulse when the pair is already moving apart.
    /// Turning this off applies the impulse unconditionally, which can add energy.
    pub skip_separating: bool,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            restitution: 0.5,
            correction_percent: 0.8,
            skip_separating: true,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f64,                // weight acceleration along +y
    pub gravitational_constant: f64, // G for mutual attraction
    pub spring_constant: f64,        // Hooke's k
    pub drag_coefficient: f64,       // quadratic drag k, 0 disables drag
    pub resolution: ResolutionConfig,
    /// Optional rectangle the world keeps bodies inside after integration.
    pub bounds: Option<Bounds>,
    /// Print every detected contact and resolution during `step`.
    pub log_collisions: bool,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 10.0,
            gravitational_constant: 5000.0,
            spring_constant: 50.0,
            drag_coefficient: 0.0,
            resolution: ResolutionConfig::default(),
            bounds: None,
            log_collisions: false,
        }
    }
}
