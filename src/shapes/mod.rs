pub mod circle;
pub mod polygon;

pub use circle::Circle;
pub use polygon::Polygon;

/// Discriminant of a [`Shape`], used to pick a collision detector and by renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Polygon,
}

/// Geometry of a rigid body. The shape carries the mass because its geometry
/// determines the rotational inertia.
///
/// `Clone` is a deep copy: a body owns its shape outright and never shares
/// vertex storage with another body.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Polygon(Polygon),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Polygon(_) => ShapeKind::Polygon,
        }
    }

    pub fn mass(&self) -> f64 {
        match self {
            Shape::Circle(circle) => circle.mass,
            Shape::Polygon(polygon) => polygon.mass,
        }
    }

    /// Moment of inertia about the shape's local origin.
    pub fn moment_of_inertia(&self) -> f64 {
        match self {
            Shape::Circle(circle) => circle.moment_of_inertia(),
            Shape::Polygon(polygon) => polygon.moment_of_inertia(),
        }
    }

    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Shape::Circle(circle) => Some(circle),
            _ => None,
        }
    }

    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Shape::Polygon(polygon) => Some(polygon),
            _ => None,
        }
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}
