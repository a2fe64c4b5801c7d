//! Mat2 - a 2x2 real matrix and the preset builders
//!
//! Row-major entries: the map is (x,y) -> (a11*x + a12*y, a21*x + a22*y).
//! Preset constructors are pure; they build a matrix and nothing else.

use rand::Rng;

use super::point::Point;

/// A 2x2 matrix over f64
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat2 {
    pub a11: f64,
    pub a12: f64,
    pub a21: f64,
    pub a22: f64,
}

impl Mat2 {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0);

    pub const fn new(a11: f64, a12: f64, a21: f64, a22: f64) -> Self {
        Self { a11, a12, a21, a22 }
    }

    /// Uniform scale: [[k,0],[0,k]]
    pub const fn scale(k: f64) -> Self {
        Self::new(k, 0.0, 0.0, k)
    }

    /// Horizontal shear: [[1,k],[0,1]]
    pub const fn shear(k: f64) -> Self {
        Self::new(1.0, k, 0.0, 1.0)
    }

    /// Counter-clockwise rotation by the given angle in degrees
    pub fn rotation(degrees: f64) -> Self {
        let theta = degrees.to_radians();
        let (sin, cos) = theta.sin_cos();
        Self::new(cos, -sin, sin, cos)
    }

    /// Mirror across the y-axis: [[-1,0],[0,1]]
    pub const fn mirror_y() -> Self {
        Self::new(-1.0, 0.0, 0.0, 1.0)
    }

    /// Random matrix with entries on a half-unit lattice in [-2, 2]
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut entry = || (rng.random_range(-2.0..=2.0_f64) * 2.0).round() / 2.0;
        Self::new(entry(), entry(), entry(), entry())
    }

    pub fn entries(&self) -> [f64; 4] {
        [self.a11, self.a12, self.a21, self.a22]
    }

    pub fn is_finite(&self) -> bool {
        self.entries().iter().all(|v| v.is_finite())
    }

    /// Image of a point under the map
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a11 * p.x + self.a12 * p.y,
            self.a21 * p.x + self.a22 * p.y,
        )
    }

    pub fn determinant(&self) -> f64 {
        self.a11 * self.a22 - self.a12 * self.a21
    }

    /// Inverse, or None when the matrix is singular
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        Some(Self::new(
            self.a22 / det,
            -self.a12 / det,
            -self.a21 / det,
            self.a11 / det,
        ))
    }
}

impl Default for Mat2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}
