//! Point and PointSet - the geometry value types

/// A point in the plane
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };
    pub const E1: Self = Self { x: 1.0, y: 0.0 };
    pub const E2: Self = Self { x: 0.0, y: 1.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Affine blend `(1-t)*self + t*other`
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            x: (1.0 - t) * self.x + t * other.x,
            y: (1.0 - t) * self.y + t * other.y,
        }
    }

    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn approx_eq(self, other: Self, tol: f64) -> bool {
        (self.x - other.x).abs() <= tol && (self.y - other.y).abs() <= tol
    }
}

/// An ordered polyline. Order is meaningful: a grid segment has 2 points,
/// the unit-square outline has 5 (closed, first == last).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointSet(Vec<Point>);

impl PointSet {
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    /// A 2-point segment
    pub fn segment(a: Point, b: Point) -> Self {
        Self(vec![a, b])
    }

    /// The unit-square outline, closed: (0,0) (1,0) (1,1) (0,1) (0,0)
    pub fn unit_square() -> Self {
        Self(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
            Point::new(0.0, 0.0),
        ])
    }

    pub fn points(&self) -> &[Point] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.0.len() >= 2 && self.0.first() == self.0.last()
    }

    /// New PointSet with `f` applied to every point, order preserved
    pub fn map(&self, f: impl Fn(Point) -> Point) -> Self {
        Self(self.0.iter().map(|&p| f(p)).collect())
    }
}
