#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
    pub mass: f64,
}

impl Circle {
    pub fn new(radius: f64, mass: f64) -> Self {
        assert!(radius >= 0.0, "Circle radius cannot be negative");
        Self { radius, mass }
    }

    /// Solid disk: I = 0.5 * m * r^2.
    pub fn moment_of_inertia(&self) -> f64 {
        0.5 * self.mass * self.radius * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_circle_new() {
        let c = Circle::new(5.0, 2.0);
        assert_eq!(c.radius, 5.0);
        assert_eq!(c.mass, 2.0);
    }

    #[test]
    fn test_circle_inertia() {
        let c = Circle::new(2.0, 10.0);
        assert!((c.moment_of_inertia() - 20.0).abs() < EPSILON);
    }

    #[test]
    #[should_panic]
    fn test_circle_new_negative_radius() {
        Circle::new(-1.0, 1.0);
    }
}
