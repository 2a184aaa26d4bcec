use crate::math::vec2::Vec2;

/// A convex polygon with its vertices in local space and a world-space cache.
///
/// Vertices must be wound consistently (counter-clockwise with +y up gives outward
/// edge normals). Concave input is not supported.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub local_vertices: Vec<Vec2>,
    /// Refreshed by the owning body after every integration step; renderers read this directly.
    pub world_vertices: Vec<Vec2>,
    pub mass: f64,
}

impl Polygon {
    /// Creates a new polygon from a vector of local-space vertices.
    ///
    /// Panics if fewer than 3 vertices are provided.
    pub fn new(vertices: Vec<Vec2>, mass: f64) -> Self {
        if vertices.len() < 3 {
            panic!("Polygon must have at least 3 vertices.");
        }
        Polygon {
            world_vertices: vertices.clone(),
            local_vertices: vertices,
            mass,
        }
    }

    /// Axis-aligned rectangle centered on the local origin.
    pub fn new_box(width: f64, height: f64, mass: f64) -> Self {
        let hw = width / 2.0;
        let hh = height / 2.0;
        Self::new(
            vec![
                Vec2::new(-hw, -hh),
                Vec2::new(hw, -hh),
                Vec2::new(hw, hh),
                Vec2::new(-hw, hh),
            ],
            mass,
        )
    }

    /// Calculates the area of the polygon using the Shoelace formula.
    pub fn calculate_area(&self) -> f64 {
        let n = self.local_vertices.len();
        let mut area = 0.0;
        for i in 0..n {
            let v1 = self.local_vertices[i];
            let v2 = self.local_vertices[(i + 1) % n];
            area += v1.cross(v2);
        }
        (area / 2.0).abs()
    }

    /// Second moment of area about the local origin (unit density).
    fn second_moment_about_origin(&self) -> f64 {
        let n = self.local_vertices.len();
        let mut inertia_sum = 0.0;
        for i in 0..n {
            let v1 = self.local_vertices[i];
            let v2 = self.local_vertices[(i + 1) % n];
            let cross_prod = v1.cross(v2);
            inertia_sum += cross_prod * (v1.magnitude_sq() + v1.dot(v2) + v2.magnitude_sq());
        }
        (inertia_sum / 12.0).abs()
    }

    /// Moment of inertia about the local origin, which is the point the body rotates around.
    /// The mass is spread uniformly over the area. Degenerate (zero-area) polygons report 0.
    pub fn moment_of_inertia(&self) -> f64 {
        let area = self.calculate_area();
        if area < 1e-10 {
            return 0.0;
        }
        let density = self.mass / area;
        self.second_moment_about_origin() * density
    }

    /// Unit normal of world-space edge `i` (from vertex `i` to vertex `i + 1`).
    pub fn world_edge_normal(&self, i: usize) -> Vec2 {
        let n = self.world_vertices.len();
        let edge = self.world_vertices[(i + 1) % n] - self.world_vertices[i];
        Vec2::new(edge.y, -edge.x).normalized()
    }

    /// Projects the world vertices onto `axis` and returns the `(min, max)` interval.
    pub fn project_onto(&self, axis: Vec2) -> (f64, f64) {
        let mut min_proj = f64::INFINITY;
        let mut max_proj = f64::NEG_INFINITY;
        for vertex in &self.world_vertices {
            let projection = vertex.dot(axis);
            min_proj = min_proj.min(projection);
            max_proj = max_proj.max(projection);
        }
        (min_proj, max_proj)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_polygon_new() {
        let vertices = vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)];
        let polygon = Polygon::new(vertices, 1.0);
        assert_eq!(polygon.local_vertices.len(), 3);
        assert_eq!(polygon.world_vertices, polygon.local_vertices);
    }

    #[test]
    #[should_panic]
    fn test_polygon_new_too_few_vertices() {
        Polygon::new(vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)], 1.0);
    }

    #[test]
    fn test_polygon_area() {
        assert!((Polygon::new_box(1.0, 1.0, 1.0).calculate_area() - 1.0).abs() < EPSILON);
        let triangle = Polygon::new(
            vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)],
            1.0,
        );
        assert!((triangle.calculate_area() - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_polygon_inertia_box() {
        // Rectangle about its center: m * (w^2 + h^2) / 12
        let polygon = Polygon::new_box(100.0, 100.0, 5.0);
        let expected = 5.0 * (100.0f64.powi(2) + 100.0f64.powi(2)) / 12.0;
        assert!((polygon.moment_of_inertia() - expected).abs() < 1e-6);
    }

    #[test]
    fn test_polygon_inertia_ignores_winding() {
        let ccw = Polygon::new_box(2.0, 1.0, 3.0);
        let mut reversed = ccw.local_vertices.clone();
        reversed.reverse();
        let cw = Polygon::new(reversed, 3.0);
        assert!((ccw.moment_of_inertia() - cw.moment_of_inertia()).abs() < EPSILON);
        assert!(cw.moment_of_inertia() > 0.0);
    }

    #[test]
    fn test_polygon_inertia_degenerate_is_zero() {
        let line = Polygon::new(
            vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0)],
            1.0,
        );
        assert_eq!(line.moment_of_inertia(), 0.0);
    }

    #[test]
    fn test_polygon_edge_normals_point_outward() {
        let polygon = Polygon::new_box(1.0, 1.0, 1.0);
        // Bottom edge (-0.5,-0.5) -> (0.5,-0.5)
        assert_eq!(polygon.world_edge_normal(0), Vec2::new(0.0, -1.0));
        // Right edge
        assert_eq!(polygon.world_edge_normal(1), Vec2::new(1.0, 0.0));
        // Closing edge wraps back to vertex 0
        assert_eq!(polygon.world_edge_normal(3), Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_polygon_projection() {
        let polygon = Polygon::new_box(2.0, 4.0, 1.0);
        let (min_x, max_x) = polygon.project_onto(Vec2::UNIT_X);
        assert!((min_x - -1.0).abs() < EPSILON);
        assert!((max_x - 1.0).abs() < EPSILON);
        let (min_y, max_y) = polygon.project_onto(Vec2::UNIT_Y);
        assert!((min_y - -2.0).abs() < EPSILON);
        assert!((max_y - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_polygon_projection_all_negative() {
        // Every projection below zero; the max bound must still be overwritten.
        let polygon = Polygon::new(
            vec![Vec2::new(-5.0, 0.0), Vec2::new(-3.0, 0.0), Vec2::new(-4.0, 1.0)],
            1.0,
        );
        let (min, max) = polygon.project_onto(Vec2::UNIT_X);
        assert!((min - -5.0).abs() < EPSILON);
        assert!((max - -3.0).abs() < EPSILON);
    }
}
