//! RenderSink - the output boundary of the engine
//!
//! The engine never draws; it hands geometry snapshots to a sink. The web
//! view backs the sink with a Dioxus signal, tests back it with a recorder.

use crate::geometry::GeometryState;

/// Receiver for geometry snapshots
pub trait RenderSink {
    /// One animation frame; called once per frame, in order
    fn draw_frame(&mut self, state: &GeometryState);

    /// Full redraw after a reset; not an animated transition
    fn draw_full_reset(&mut self, state: &GeometryState);
}
