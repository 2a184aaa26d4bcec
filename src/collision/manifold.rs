use crate::math::vec2::Vec2;

/// Result of a narrow-phase test between two bodies of one collection.
///
/// Bodies are referred to by index; the info is built and consumed within a single
/// detection + resolution call and never kept across steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionInfo {
    /// Index of the first body involved in the collision.
    pub body_a_idx: usize,
    /// Index of the second body involved in the collision.
    pub body_b_idx: usize,
    /// Overlap along `normal`. Zero when the shapes just touch.
    pub penetration_depth: f64,
    /// Unit vector pointing from body A towards body B.
    pub normal: Vec2,
    /// Approximate contact location. For polygon pairs this is only body A's position,
    /// not a clipped contact manifold.
    pub contact_point: Vec2,
}
