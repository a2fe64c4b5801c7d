//! Matrix and point math for the visualizer
//!
//! Everything here is pure: matrices, polylines, and the two operations
//! the animation engine is built on - applying a matrix to a polyline and
//! blending two polylines of equal shape.

pub mod mat2;
pub mod point;

pub use mat2::Mat2;
pub use point::{Point, PointSet};

/// Image of a polyline under the matrix. Preserves point count and order.
pub fn apply_matrix(m: &Mat2, points: &PointSet) -> PointSet {
    points.map(|p| m.apply(p))
}

/// Elementwise affine blend `(1-t)*source + t*target`.
///
/// Both polylines must have the same length; a mismatch is a programming
/// error, not a recoverable condition.
pub fn interpolate(source: &PointSet, target: &PointSet, t: f64) -> PointSet {
    assert_eq!(
        source.len(),
        target.len(),
        "interpolate requires polylines of equal length"
    );
    PointSet::new(
        source
            .points()
            .iter()
            .zip(target.points())
            .map(|(&s, &d)| s.lerp(d, t))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_matrix_matches_pointwise_application() {
        let m = Mat2::new(2.0, 1.0, -1.0, 3.0);
        let set = PointSet::new(vec![
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(-2.0, 5.0),
        ]);
        let out = apply_matrix(&m, &set);
        assert_eq!(out.len(), set.len());
        for (src, dst) in set.points().iter().zip(out.points()) {
            assert_eq!(*dst, m.apply(*src));
        }
    }

    #[test]
    fn interpolate_endpoints_are_exact() {
        let src = PointSet::segment(Point::new(-5.0, 1.0), Point::new(5.0, 1.0));
        let tgt = PointSet::segment(Point::new(-10.0, 2.0), Point::new(10.0, 2.0));
        assert_eq!(interpolate(&src, &tgt, 0.0), src);
        assert_eq!(interpolate(&src, &tgt, 1.0), tgt);
    }

    #[test]
    fn interpolate_blends_elementwise() {
        let src = PointSet::segment(Point::new(0.0, 0.0), Point::new(4.0, 0.0));
        let tgt = PointSet::segment(Point::new(0.0, 2.0), Point::new(0.0, 2.0));
        let mid = interpolate(&src, &tgt, 0.5);
        assert_eq!(mid.points()[0], Point::new(0.0, 1.0));
        assert_eq!(mid.points()[1], Point::new(2.0, 1.0));
    }

    #[test]
    #[should_panic(expected = "equal length")]
    fn interpolate_rejects_mismatched_lengths() {
        let src = PointSet::segment(Point::ORIGIN, Point::E1);
        let tgt = PointSet::unit_square();
        let _ = interpolate(&src, &tgt, 0.5);
    }
}
