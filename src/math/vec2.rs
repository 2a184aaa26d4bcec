use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::Deserialize;

/// Tolerance used by `==` and by the normalization guard.
pub const VEC2_EPSILON: f64 = 1e-5;

/// 2D vector or point. Equality is approximate (see [`VEC2_EPSILON`]).
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(from = "[f64; 2]")]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    pub const UNIT_X: Vec2 = Vec2 { x: 1.0, y: 0.0 };
    pub const UNIT_Y: Vec2 = Vec2 { x: 0.0, y: 1.0 };

    /// Creates a new Vec2.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the dot product of two vectors.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product (scalar). Equivalent to z-component of 3D cross product.
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Squared length. Avoids the square root for comparisons.
    pub fn magnitude_sq(self) -> f64 {
        self.dot(self)
    }

    pub fn magnitude(self) -> f64 {
        self.magnitude_sq().sqrt()
    }

    /// Scales the vector to unit length in place.
    /// Vectors shorter than [`VEC2_EPSILON`] are left unchanged.
    pub fn normalize(&mut self) {
        let mag = self.magnitude();
        if mag > VEC2_EPSILON {
            *self /= mag;
        }
    }

    /// Returns a unit-length copy, or the vector itself if it is (nearly) zero.
    pub fn normalized(self) -> Self {
        let mut result = self;
        result.normalize();
        result
    }

    /// Rotates the vector in place by `angle` radians (counter-clockwise).
    pub fn rotate(&mut self, angle: f64) {
        let (sin_a, cos_a) = angle.sin_cos();
        let x = self.x * cos_a - self.y * sin_a;
        let y = self.x * sin_a + self.y * cos_a;
        self.x = x;
        self.y = y;
    }

    /// Returns a copy rotated by `angle` radians.
    pub fn rotated(self, angle: f64) -> Self {
        let mut result = self;
        result.rotate(angle);
        result
    }

    /// Returns a vector perpendicular to this vector (90-degree counter-clockwise rotation).
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    pub fn distance(self, other: Self) -> f64 {
        (self - other).magnitude()
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl PartialEq for Vec2 {
    fn eq(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < VEC2_EPSILON && (self.y - other.y).abs() < VEC2_EPSILON
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec2({}, {})", self.x, self.y)
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

// Vec2 * f64
impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

// f64 * Vec2
impl Mul<Vec2> for f64 {
    type Output = Vec2;

    fn mul(self, vec: Vec2) -> Vec2 {
        vec * self
    }
}

// No zero guard: callers divide by magnitudes they have already checked.
impl Div<f64> for Vec2 {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl MulAssign<f64> for Vec2 {
    fn mul_assign(&mut self, scalar: f64) {
        self.x *= scalar;
        self.y *= scalar;
    }
}

impl DivAssign<f64> for Vec2 {
    fn div_assign(&mut self, scalar: f64) {
        self.x /= scalar;
        self.y /= scalar;
    }
}
