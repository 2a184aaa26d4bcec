use super::manifold::CollisionInfo;
use crate::common::ResolutionConfig;
use crate::objects::rigid_body::RigidBody;

/// Pushes the two bodies apart along the normal, split by inverse mass.
///
/// Only `correction_percent` of the depth is removed per call to avoid jitter.
/// Static bodies are never moved. Moved polygons get their world vertices refreshed so
/// later pairs in the same pass test against the corrected outline.
pub fn apply_positional_correction(
    body_a: &mut RigidBody,
    body_b: &mut RigidBody,
    info: &CollisionInfo,
    config: &ResolutionConfig,
) {
    let total_inv_mass = body_a.inv_mass + body_b.inv_mass;
    if total_inv_mass == 0.0 {
        return;
    }

    let separation = info.normal * (info.penetration_depth / total_inv_mass * config.correction_percent);

    if body_a.inv_mass != 0.0 {
        body_a.position -= separation * body_a.inv_mass;
        body_a.update_world_vertices();
    }
    if body_b.inv_mass != 0.0 {
        body_b.position += separation * body_b.inv_mass;
        body_b.update_world_vertices();
    }
}

/// Applies a linear impulse along the normal and returns its magnitude `j`.
///
/// Returns 0.0 without touching velocities when both bodies are static, or when the pair
/// is already separating and `skip_separating` is set. Angular velocity is never changed.
pub fn apply_impulse(
    body_a: &mut RigidBody,
    body_b: &mut RigidBody,
    info: &CollisionInfo,
    config: &ResolutionConfig,
) -> f64 {
    let total_inv_mass = body_a.inv_mass + body_b.inv_mass;
    if total_inv_mass == 0.0 {
        return 0.0;
    }

    let relative_velocity = body_b.velocity - body_a.velocity;
    let relative_speed = relative_velocity.dot(info.normal);

    if config.skip_separating && relative_speed > 0.0 {
        return 0.0;
    }

    let j = -(1.0 + config.restitution) * relative_speed / total_inv_mass;
    let impulse = info.normal * j;

    if body_a.inv_mass != 0.0 {
        body_a.velocity -= impulse * body_a.inv_mass;
    }
    if body_b.inv_mass != 0.0 {
        body_b.velocity += impulse * body_b.inv_mass;
    }
    j
}

/// Resolves one detected collision: positional correction first, then the velocity impulse.
/// Returns the impulse magnitude applied.
pub fn resolve_collision(
    body_a: &mut RigidBody,
    body_b: &mut RigidBody,
    info: &CollisionInfo,
    config: &ResolutionConfig,
) -> f64 {
    apply_positional_correction(body_a, body_b, info, config);
    apply_impulse(body_a, body_b, info, config)
}
