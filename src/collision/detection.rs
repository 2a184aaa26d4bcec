use super::manifold::CollisionInfo;
use crate::math::vec2::{Vec2, VEC2_EPSILON};
use crate::objects::rigid_body::RigidBody;
use crate::shapes::{Circle, Polygon, Shape};

/// Fallback normal for coincident centers, where the center-to-center direction is undefined.
const COINCIDENT_NORMAL: Vec2 = Vec2::UNIT_Y;

/// Checks for collision between two circles.
/// Touching circles (distance equal to the radii sum) count as colliding with zero depth.
pub fn check_circle_circle(
    body_a: &RigidBody,
    body_a_idx: usize,
    body_b: &RigidBody,
    body_b_idx: usize,
) -> Option<CollisionInfo> {
    let (circle_a, circle_b) = match (&body_a.shape, &body_b.shape) {
        (Shape::Circle(a), Shape::Circle(b)) => (a, b),
        _ => return None,
    };

    let dist_vec = body_b.position - body_a.position;
    let distance = dist_vec.magnitude();
    let radii_sum = circle_a.radius + circle_b.radius;

    if distance > radii_sum {
        return None;
    }

    let normal = if distance > VEC2_EPSILON {
        dist_vec / distance
    } else {
        COINCIDENT_NORMAL
    };

    Some(CollisionInfo {
        body_a_idx,
        body_b_idx,
        penetration_depth: radii_sum - distance,
        normal,
        contact_point: body_a.position + normal * circle_a.radius,
    })
}

/// Tests every world-space edge normal of `reference` as a separating axis.
///
/// Returns `None` as soon as one axis separates the projections, otherwise the
/// smallest overlap seen and its axis, folded into `best`.
fn min_overlap_on_edges_of(
    reference: &Polygon,
    poly_a: &Polygon,
    poly_b: &Polygon,
    mut best: (f64, Vec2),
) -> Option<(f64, Vec2)> {
    for i in 0..reference.world_vertices.len() {
        let axis = reference.world_edge_normal(i);
        // Repeated vertices give a zero-length edge whose normal stays unnormalized
        if axis.magnitude_sq() < 0.5 {
            continue;
        }

        let (min_a, max_a) = poly_a.project_onto(axis);
        let (min_b, max_b) = poly_b.project_onto(axis);

        if max_a < min_b || max_b < min_a {
            return None;
        }

        let overlap = max_a.min(max_b) - min_a.max(min_b);
        if overlap < best.0 {
            best = (overlap, axis);
        }
    }
    Some(best)
}

/// Separating Axis Theorem test between two convex polygons, using their cached world vertices.
///
/// The axis of least overlap becomes the normal, oriented from A's position toward B's.
pub fn check_polygon_polygon(
    body_a: &RigidBody,
    body_a_idx: usize,
    body_b: &RigidBody,
    body_b_idx: usize,
) -> Option<CollisionInfo> {
    let (poly_a, poly_b) = match (&body_a.shape, &body_b.shape) {
        (Shape::Polygon(a), Shape::Polygon(b)) => (a, b),
        _ => return None,
    };

    let best = (f64::INFINITY, Vec2::ZERO);
    let best = min_overlap_on_edges_of(poly_a, poly_a, poly_b, best)?;
    let (depth, axis) = min_overlap_on_edges_of(poly_b, poly_a, poly_b, best)?;

    let center_to_center = body_b.position - body_a.position;
    let normal = if axis.dot(center_to_center) < 0.0 { -axis } else { axis };

    Some(CollisionInfo {
        body_a_idx,
        body_b_idx,
        penetration_depth: depth,
        normal,
        contact_point: body_a.position,
    })
}

fn project_circle_onto_axis(center: Vec2, circle: &Circle, axis: Vec2) -> (f64, f64) {
    let center_proj = center.dot(axis);
    (center_proj - circle.radius, center_proj + circle.radius)
}

/// Checks a circle (body A) against a convex polygon (body B) with SAT.
///
/// Candidate axes are the polygon's edge normals plus the direction from the circle
/// center to the nearest polygon vertex, which covers corner contacts.
pub fn check_circle_polygon(
    circle_body: &RigidBody,
    circle_body_idx: usize,
    polygon_body: &RigidBody,
    polygon_body_idx: usize,
) -> Option<CollisionInfo> {
    let (circle, polygon) = match (&circle_body.shape, &polygon_body.shape) {
        (Shape::Circle(c), Shape::Polygon(p)) => (c, p),
        _ => return None,
    };
    let center = circle_body.position;

    let mut axes: Vec<Vec2> = (0..polygon.world_vertices.len())
        .map(|i| polygon.world_edge_normal(i))
        .collect();

    let closest_vertex = polygon
        .world_vertices
        .iter()
        .copied()
        .min_by(|a, b| a.distance(center).total_cmp(&b.distance(center)))?;
    axes.push((closest_vertex - center).normalized());

    let mut min_overlap = f64::INFINITY;
    let mut mtv_axis = Vec2::ZERO;

    for axis in axes {
        // Normalization leaves degenerate axes unchanged; they cannot separate anything.
        if axis.magnitude_sq() < 0.5 {
            continue;
        }

        let (min_c, max_c) = project_circle_onto_axis(center, circle, axis);
        let (min_p, max_p) = polygon.project_onto(axis);

        if max_c < min_p || max_p < min_c {
            return None;
        }

        let overlap = max_c.min(max_p) - min_c.max(min_p);
        if overlap < min_overlap {
            min_overlap = overlap;
            mtv_axis = axis;
        }
    }

    if !min_overlap.is_finite() {
        return None;
    }

    let center_to_center = polygon_body.position - center;
    let normal = if mtv_axis.dot(center_to_center) < 0.0 { -mtv_axis } else { mtv_axis };

    Some(CollisionInfo {
        body_a_idx: circle_body_idx,
        body_b_idx: polygon_body_idx,
        penetration_depth: min_overlap,
        normal,
        contact_point: center + normal * circle.radius,
    })
}

/// Picks the detector for the pair's shape combination.
///
/// The returned info keeps the caller's A/B order, so the normal always points from
/// `body_a` toward `body_b`, whichever of the two is the circle.
pub fn check_collision(
    body_a: &RigidBody,
    body_a_idx: usize,
    body_b: &RigidBody,
    body_b_idx: usize,
) -> Option<CollisionInfo> {
    match (&body_a.shape, &body_b.shape) {
        (Shape::Circle(_), Shape::Circle(_)) => check_circle_circle(body_a, body_a_idx, body_b, body_b_idx),
        (Shape::Polygon(_), Shape::Polygon(_)) => check_polygon_polygon(body_a, body_a_idx, body_b, body_b_idx),
        (Shape::Circle(_), Shape::Polygon(_)) => check_circle_polygon(body_a, body_a_idx, body_b, body_b_idx),
        (Shape::Polygon(_), Shape::Circle(_)) => {
            check_circle_polygon(body_b, body_b_idx, body_a, body_a_idx).map(|info| CollisionInfo {
                body_a_idx,
                body_b_idx,
                normal: -info.normal,
                ..info
            })
        }
    }
}
