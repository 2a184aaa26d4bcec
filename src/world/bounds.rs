use serde::Deserialize;

use crate::objects::rigid_body::RigidBody;

/// Open-top rectangle `[0, width] x [.., height]` in screen coordinates (+y down).
///
/// Bodies are clamped against the floor and both side walls with a damped bounce.
/// The floor also damps tangential and angular velocity, which is the only friction
/// the engine has.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
    #[serde(default = "Bounds::default_bounce_damping")]
    pub bounce_damping: f64,
    #[serde(default = "Bounds::default_friction")]
    pub friction: f64,
    /// Half-extent assumed for polygons, which have no radius.
    #[serde(default = "Bounds::default_polygon_extent")]
    pub polygon_extent: f64,
}

impl Bounds {
    fn default_bounce_damping() -> f64 {
        0.7
    }

    fn default_friction() -> f64 {
        0.8
    }

    fn default_polygon_extent() -> f64 {
        50.0
    }

    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            bounce_damping: Self::default_bounce_damping(),
            friction: Self::default_friction(),
            polygon_extent: Self::default_polygon_extent(),
        }
    }

    /// Clamps `body` inside the bounds, reflecting and damping the velocity on contact.
    pub fn keep_in_bounds(&self, body: &mut RigidBody) {
        let extent = body.radius().unwrap_or(self.polygon_extent);
        let mut moved = false;

        // Floor
        if body.position.y + extent > self.height {
            body.position.y = self.height - extent;
            body.velocity.y *= -self.bounce_damping;
            body.velocity.x *= self.friction;
            body.angular_velocity *= self.friction;
            moved = true;
        }

        // Right wall
        if body.position.x + extent > self.width {
            body.position.x = self.width - extent;
            body.velocity.x *= -self.bounce_damping;
            body.angular_velocity *= self.friction;
            moved = true;
        }

        // Left wall
        if body.position.x - extent < 0.0 {
            body.position.x = extent;
            body.velocity.x *= -self.bounce_damping;
            body.angular_velocity *= self.friction;
            moved = true;
        }

        if moved {
            body.update_world_vertices();
        }
    }
}
