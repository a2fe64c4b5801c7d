//! Controller - orchestrates one transform-and-commit cycle
//!
//! The controller owns the baseline geometry and the single optional
//! session. A session is created when a valid matrix is requested, lives
//! for exactly one animation, and is destroyed when the last frame commits
//! its target as the new baseline. A second request while a session runs is
//! rejected, never queued.

use thiserror::Error;

use crate::animate::Timeline;
use crate::geometry::{GRID_EXTENT, GRID_STEP, GeometryState};
use crate::math::Mat2;
use crate::render::RenderSink;

/// Recoverable failures of transform/reset requests. Neither mutates any
/// geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("matrix entries must be finite numbers")]
    InvalidMatrix,
    #[error("a transformation is already running")]
    Busy,
}

/// One in-progress animated transition
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    source: GeometryState,
    target: GeometryState,
    frame: u32,
}

/// Outcome of advancing the animation by one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A frame was emitted; wait this long before the next tick
    Frame { interval_ms: u32 },
    /// The final frame was emitted and the target committed
    Done,
    /// No session is running
    Idle,
}

pub struct Controller {
    baseline: GeometryState,
    session: Option<Session>,
    timeline: Timeline,
}

impl Controller {
    pub fn new() -> Self {
        Self::with_timeline(Timeline::DEFAULT)
    }

    pub fn with_timeline(timeline: Timeline) -> Self {
        Self {
            baseline: GeometryState::identity(-GRID_EXTENT, GRID_EXTENT, GRID_STEP),
            session: None,
            timeline,
        }
    }

    /// The committed baseline. Never reflects in-flight animation state.
    pub fn baseline(&self) -> &GeometryState {
        &self.baseline
    }

    pub fn is_busy(&self) -> bool {
        self.session.is_some()
    }

    /// Validate the matrix and open a session from the current baseline.
    ///
    /// Fails with `InvalidMatrix` on non-finite entries and with `Busy`
    /// while another session runs; both leave everything untouched.
    pub fn request_transform(&mut self, m: Mat2) -> Result<(), TransformError> {
        if !m.is_finite() {
            return Err(TransformError::InvalidMatrix);
        }
        if self.is_busy() {
            return Err(TransformError::Busy);
        }
        let source = self.baseline.clone();
        let target = source.transformed(&m);
        self.session = Some(Session { source, target, frame: 0 });
        Ok(())
    }

    /// Emit the next frame to the sink.
    ///
    /// Frames go out strictly in increasing progress order, 0..=1. The
    /// final frame equals the target exactly; the commit happens in the
    /// same tick, after that frame is drawn.
    pub fn tick(&mut self, sink: &mut impl RenderSink) -> Step {
        let Some(session) = self.session.as_mut() else {
            return Step::Idle;
        };
        let t = self.timeline.progress(session.frame);
        let frame = GeometryState::between(&session.source, &session.target, t);
        sink.draw_frame(&frame);

        if session.frame >= self.timeline.last_frame() {
            // Whole-value replacement; the baseline is never half-updated.
            if let Some(finished) = self.session.take() {
                self.baseline = finished.target;
            }
            Step::Done
        } else {
            session.frame += 1;
            Step::Frame { interval_ms: self.timeline.interval_ms() }
        }
    }

    /// Discard the baseline and re-establish the identity geometry,
    /// then ask the sink for a full redraw. Rejected while a session runs.
    pub fn reset(&mut self, sink: &mut impl RenderSink) -> Result<(), TransformError> {
        if self.is_busy() {
            return Err(TransformError::Busy);
        }
        self.baseline = GeometryState::identity(-GRID_EXTENT, GRID_EXTENT, GRID_STEP);
        sink.draw_full_reset(&self.baseline);
        Ok(())
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point;

    const TOL: f64 = 1e-9;

    /// Sink that records every emitted snapshot
    #[derive(Default)]
    struct Recorder {
        frames: Vec<GeometryState>,
        resets: Vec<GeometryState>,
    }

    impl RenderSink for Recorder {
        fn draw_frame(&mut self, state: &GeometryState) {
            self.frames.push(state.clone());
        }

        fn draw_full_reset(&mut self, state: &GeometryState) {
            self.resets.push(state.clone());
        }
    }

    fn run_to_completion(ctrl: &mut Controller, sink: &mut Recorder) {
        loop {
            match ctrl.tick(sink) {
                Step::Frame { .. } => {}
                Step::Done => break,
                Step::Idle => panic!("tick on an idle controller"),
            }
        }
    }

    fn states_close(a: &GeometryState, b: &GeometryState, tol: f64) -> bool {
        a.e1.approx_eq(b.e1, tol)
            && a.e2.approx_eq(b.e2, tol)
            && a.square
                .points()
                .iter()
                .zip(b.square.points())
                .all(|(x, y)| x.approx_eq(*y, tol))
            && a.grid.iter().zip(&b.grid).all(|(s, d)| {
                s.points()
                    .iter()
                    .zip(d.points())
                    .all(|(x, y)| x.approx_eq(*y, tol))
            })
    }

    #[test]
    fn invalid_matrix_is_rejected_without_state_change() {
        let mut ctrl = Controller::new();
        let before = ctrl.baseline().clone();
        let err = ctrl.request_transform(Mat2::new(f64::NAN, 0.0, 0.0, 1.0));
        assert_eq!(err, Err(TransformError::InvalidMatrix));
        assert!(!ctrl.is_busy());
        assert_eq!(*ctrl.baseline(), before);
    }

    #[test]
    fn second_request_while_busy_is_rejected() {
        let mut ctrl = Controller::new();
        ctrl.request_transform(Mat2::scale(2.0)).unwrap();
        let in_flight = ctrl.session.clone();
        let before = ctrl.baseline().clone();

        assert_eq!(ctrl.request_transform(Mat2::shear(1.0)), Err(TransformError::Busy));
        let mut sink = Recorder::default();
        assert_eq!(ctrl.reset(&mut sink), Err(TransformError::Busy));

        // Neither the baseline nor the running session was touched
        assert_eq!(*ctrl.baseline(), before);
        assert_eq!(ctrl.session, in_flight);
        assert!(sink.resets.is_empty());
    }

    #[test]
    fn session_emits_every_frame_in_order_and_commits_last() {
        let mut ctrl = Controller::new();
        let source = ctrl.baseline().clone();
        let target = source.transformed(&Mat2::new(2.0, 0.0, 0.0, 1.0));

        ctrl.request_transform(Mat2::new(2.0, 0.0, 0.0, 1.0)).unwrap();
        let mut sink = Recorder::default();
        run_to_completion(&mut ctrl, &mut sink);

        assert_eq!(sink.frames.len(), 60);
        assert_eq!(sink.frames[0], source);
        assert_eq!(*sink.frames.last().unwrap(), target);
        assert_eq!(*ctrl.baseline(), target);
        assert!(!ctrl.is_busy());

        // e1.x moves 1 -> 2 without ever stepping backwards
        let mut prev = sink.frames[0].e1.x;
        for frame in &sink.frames[1..] {
            assert!(frame.e1.x >= prev);
            prev = frame.e1.x;
        }
    }

    #[test]
    fn scale_x_scenario() {
        let mut ctrl = Controller::new();
        ctrl.request_transform(Mat2::new(2.0, 0.0, 0.0, 1.0)).unwrap();
        let mut sink = Recorder::default();
        run_to_completion(&mut ctrl, &mut sink);

        let expect = [
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.0, 1.0),
            Point::new(0.0, 1.0),
            Point::new(0.0, 0.0),
        ];
        assert_eq!(ctrl.baseline().square.points(), expect);
        assert_eq!(ctrl.baseline().e1, Point::new(2.0, 0.0));
        assert_eq!(ctrl.baseline().e2, Point::new(0.0, 1.0));
    }

    #[test]
    fn rotation_scenario() {
        let mut ctrl = Controller::new();
        ctrl.request_transform(Mat2::rotation(90.0)).unwrap();
        let mut sink = Recorder::default();
        run_to_completion(&mut ctrl, &mut sink);

        assert!(ctrl.baseline().e1.approx_eq(Point::new(0.0, 1.0), TOL));
        assert!(ctrl.baseline().e2.approx_eq(Point::new(-1.0, 0.0), TOL));
    }

    #[test]
    fn round_trip_restores_the_baseline() {
        let mut ctrl = Controller::new();
        let original = ctrl.baseline().clone();
        let m = Mat2::new(2.0, 1.0, 1.0, 1.0);
        let inv = m.inverse().unwrap();

        let mut sink = Recorder::default();
        ctrl.request_transform(m).unwrap();
        run_to_completion(&mut ctrl, &mut sink);
        ctrl.request_transform(inv).unwrap();
        run_to_completion(&mut ctrl, &mut sink);

        assert!(states_close(ctrl.baseline(), &original, TOL));
    }

    #[test]
    fn reset_is_idempotent_and_draws_fully() {
        let mut ctrl = Controller::new();
        let mut sink = Recorder::default();
        ctrl.request_transform(Mat2::shear(1.0)).unwrap();
        run_to_completion(&mut ctrl, &mut sink);

        ctrl.reset(&mut sink).unwrap();
        let after_first = ctrl.baseline().clone();
        ctrl.reset(&mut sink).unwrap();

        assert_eq!(*ctrl.baseline(), after_first);
        assert_eq!(after_first, GeometryState::default());
        assert_eq!(sink.resets.len(), 2);
    }

    #[test]
    fn tick_without_session_is_idle() {
        let mut ctrl = Controller::new();
        let mut sink = Recorder::default();
        assert_eq!(ctrl.tick(&mut sink), Step::Idle);
        assert!(sink.frames.is_empty());
    }
}
