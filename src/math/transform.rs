use super::vec2::Vec2;

/// Placement of a body's local frame in the world: rotate by `angle`, then translate by `position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    pub angle: f64, // Radians
}

impl Transform {
    pub fn new(position: Vec2, angle: f64) -> Self {
        Self { position, angle }
    }

    /// Maps a local-space point into world space (rotation then translation).
    pub fn apply(self, point: Vec2) -> Vec2 {
        self.position + point.rotated(self.angle)
    }

    /// Rewrites `out` with the world-space image of every point in `local`, preserving order.
    /// Reuses the existing allocation of `out`.
    pub fn apply_all(self, local: &[Vec2], out: &mut Vec<Vec2>) {
        out.clear();
        out.extend(local.iter().map(|&v| self.apply(v)));
    }
}
