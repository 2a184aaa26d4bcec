pub mod detection;
pub mod manifold;
pub mod resolution;

pub use detection::*;
pub use manifold::CollisionInfo;
pub use resolution::resolve_collision;

use crate::common::ResolutionConfig;
use crate::objects::rigid_body::RigidBody;

/// Mutable references to two distinct bodies of one slice. Requires `idx_a < idx_b`.
fn body_pair_mut(bodies: &mut [RigidBody], idx_a: usize, idx_b: usize) -> (&mut RigidBody, &mut RigidBody) {
    debug_assert!(idx_a < idx_b, "body pair must be ordered");
    let (head, tail) = bodies.split_at_mut(idx_b);
    (&mut head[idx_a], &mut tail[0])
}

/// All-pairs narrow phase with immediate resolution.
///
/// Visits every unordered pair `(i, j)` with `i < j` in ascending lexicographic order and
/// resolves each contact as soon as it is found, so later pairs see the positions and
/// velocities already changed by earlier ones. Pairs of two static bodies are skipped.
/// Returns the number of contacts resolved.
pub fn detect_and_resolve(bodies: &mut [RigidBody], config: &ResolutionConfig, should_log: bool) -> usize {
    let mut resolved = 0;

    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let (body_a, body_b) = body_pair_mut(bodies, i, j);

            if body_a.is_static() && body_b.is_static() {
                continue;
            }

            let Some(info) = check_collision(body_a, i, body_b, j) else {
                continue;
            };

            if should_log {
                println!(
                    "[detect_and_resolve] contact {}-{}: normal={}, depth={:.3}, contact={}",
                    i, j, info.normal, info.penetration_depth, info.contact_point
                );
            }

            let impulse = resolve_collision(body_a, body_b, &info, config);
            resolved += 1;

            if should_log {
                println!(
                    "  impulse j={:.3}; A pos={} vel={}; B pos={} vel={}",
                    impulse, body_a.position, body_a.velocity, body_b.position, body_b.velocity
                );
            }
        }
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2::Vec2;
    use crate::shapes::{Circle, Polygon, Shape};
    const EPSILON: f64 = 1e-9;

    fn circle(mass: f64) -> Shape {
        Circle::new(1.0, mass).into()
    }

    #[test]
    fn test_detect_and_resolve_counts_contacts() {
        let mut bodies = vec![
            RigidBody::new(&circle(1.0), 0.0, 0.0),
            RigidBody::new(&circle(1.0), 1.5, 0.0),  // overlaps body 0
            RigidBody::new(&circle(1.0), 10.0, 0.0), // alone
        ];

        let resolved = detect_and_resolve(&mut bodies, &ResolutionConfig::default(), false);

        assert_eq!(resolved, 1);
        assert!(bodies[0].position.x < 0.0);
        assert!(bodies[1].position.x > 1.5);
        assert_eq!(bodies[2].position, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_detect_and_resolve_skips_static_pairs() {
        let mut bodies = vec![
            RigidBody::new(&circle(0.0), 0.0, 0.0),
            RigidBody::new(&circle(0.0), 0.5, 0.0),
        ];
        let resolved = detect_and_resolve(&mut bodies, &ResolutionConfig::default(), false);
        assert_eq!(resolved, 0);
    }

    #[test]
    fn test_detect_and_resolve_is_sequential() {
        // Body 1 sits between 0 and 2. Resolving (0,1) pushes body 1 into body 2,
        // so pair (1,2) sees the updated overlap rather than the original one.
        let config = ResolutionConfig { correction_percent: 1.0, ..Default::default() };
        let mut bodies = vec![
            RigidBody::new(&circle(0.0), 0.0, 0.0),
            RigidBody::new(&circle(1.0), 1.5, 0.0),
            RigidBody::new(&circle(0.0), 3.6, 0.0),
        ];

        let resolved = detect_and_resolve(&mut bodies, &config, false);

        // (0,1): depth 0.5, body 1 -> 2.0. (1,2): distance 1.6, depth 0.4, body 1 -> 1.6.
        assert_eq!(resolved, 2);
        assert!((bodies[1].position.x - 1.6).abs() < EPSILON);
        assert_eq!(bodies[0].position, Vec2::ZERO);
        assert_eq!(bodies[2].position, Vec2::new(3.6, 0.0));
    }

    #[test]
    fn test_detect_and_resolve_mixed_shapes() {
        let mut bodies = vec![
            RigidBody::new(&Polygon::new_box(2.0, 2.0, 0.0).into(), 0.0, 0.0),
            RigidBody::new(&circle(1.0), 0.0, -1.5),
        ];
        bodies[1].velocity = Vec2::new(0.0, 2.0);

        let resolved = detect_and_resolve(&mut bodies, &ResolutionConfig::default(), false);

        assert_eq!(resolved, 1);
        // Circle pushed up (away from the box) and bounced
        assert!(bodies[1].position.y < -1.5);
        assert!(bodies[1].velocity.y < 0.0);
        assert_eq!(bodies[0].position, Vec2::ZERO);
    }
}
