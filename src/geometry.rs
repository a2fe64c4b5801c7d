//! GeometryState - the committed baseline of every drawn shape
//!
//! The baseline holds the grid segments, the unit-square outline, and the
//! two basis vectors. It only ever changes by wholesale replacement: either
//! a finished animation commits its target, or a reset rebuilds the
//! identity geometry. It never holds in-flight animation state.

use crate::math::{self, Mat2, Point, PointSet};

/// Half-extent of the drawn window and the grid, in world units
pub const GRID_EXTENT: f64 = 5.0;
/// Spacing between grid lines
pub const GRID_STEP: f64 = 1.0;

/// The full set of shapes the visualizer tracks
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryState {
    /// 2-point segments, one per grid line on each axis
    pub grid: Vec<PointSet>,
    /// Closed 5-point outline of the unit square
    pub square: PointSet,
    /// Image of (1,0) under the committed transformation
    pub e1: Point,
    /// Image of (0,1) under the committed transformation
    pub e2: Point,
}

impl GeometryState {
    /// Untransformed geometry: grid lines at every `step` tick spanning
    /// `[lo, hi]` on both axes, the unit square, and the standard basis.
    pub fn identity(lo: f64, hi: f64, step: f64) -> Self {
        let mut grid = Vec::new();
        let mut tick = lo;
        while tick <= hi + step * 1e-9 {
            grid.push(PointSet::segment(Point::new(tick, lo), Point::new(tick, hi)));
            grid.push(PointSet::segment(Point::new(lo, tick), Point::new(hi, tick)));
            tick += step;
        }
        Self {
            grid,
            square: PointSet::unit_square(),
            e1: Point::E1,
            e2: Point::E2,
        }
    }

    /// Image of every tracked shape under the matrix
    pub fn transformed(&self, m: &Mat2) -> Self {
        Self {
            grid: self.grid.iter().map(|line| math::apply_matrix(m, line)).collect(),
            square: math::apply_matrix(m, &self.square),
            e1: m.apply(self.e1),
            e2: m.apply(self.e2),
        }
    }

    /// Shape-wise blend of two states with the same grid layout
    pub fn between(source: &Self, target: &Self, t: f64) -> Self {
        debug_assert_eq!(source.grid.len(), target.grid.len());
        Self {
            grid: source
                .grid
                .iter()
                .zip(&target.grid)
                .map(|(s, d)| math::interpolate(s, d, t))
                .collect(),
            square: math::interpolate(&source.square, &target.square, t),
            e1: source.e1.lerp(target.e1, t),
            e2: source.e2.lerp(target.e2, t),
        }
    }
}

impl Default for GeometryState {
    fn default() -> Self {
        Self::identity(-GRID_EXTENT, GRID_EXTENT, GRID_STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_grid_covers_every_tick() {
        let state = GeometryState::identity(-5.0, 5.0, 1.0);
        // 11 ticks, one vertical and one horizontal segment each
        assert_eq!(state.grid.len(), 22);
        assert!(state.grid.iter().all(|line| line.len() == 2));
        assert_eq!(state.e1, Point::new(1.0, 0.0));
        assert_eq!(state.e2, Point::new(0.0, 1.0));
        assert!(state.square.is_closed());
    }

    #[test]
    fn transformed_scales_the_square() {
        let state = GeometryState::default();
        let scaled = state.transformed(&Mat2::new(2.0, 0.0, 0.0, 1.0));
        let expect = [
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 1.0),
            Point::new(0.0, 1.0),
            Point::new(0.0, 0.0),
        ];
        assert_eq!(scaled.square.points(), expect);
        assert_eq!(scaled.e1, Point::new(2.0, 0.0));
        assert_eq!(scaled.e2, Point::new(0.0, 1.0));
    }

    #[test]
    fn mirror_flips_the_square() {
        let state = GeometryState::default();
        let mirrored = state.transformed(&Mat2::mirror_y());
        let expect = [
            Point::new(0.0, 0.0),
            Point::new(-1.0, 0.0),
            Point::new(-1.0, 1.0),
            Point::new(0.0, 1.0),
            Point::new(0.0, 0.0),
        ];
        assert_eq!(mirrored.square.points(), expect);
    }

    #[test]
    fn between_endpoints_reproduce_the_states() {
        let source = GeometryState::default();
        let target = source.transformed(&Mat2::shear(1.0));
        assert_eq!(GeometryState::between(&source, &target, 0.0), source);
        assert_eq!(GeometryState::between(&source, &target, 1.0), target);
    }

    #[test]
    fn snapshot_is_an_independent_copy() {
        let state = GeometryState::default();
        let mut copy = state.clone();
        copy.e1 = Point::new(9.0, 9.0);
        assert_eq!(state.e1, Point::E1);
    }
}
