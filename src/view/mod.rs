//! View - Dioxus components and the signal-backed render sink

pub mod matrix_input;
pub mod plot;
pub mod visualizer;

pub use visualizer::Visualizer;

use dioxus::prelude::*;

use crate::geometry::GeometryState;
use crate::render::RenderSink;

/// RenderSink that publishes snapshots through a Dioxus signal; the plot
/// component re-renders from whatever the signal holds.
pub struct SignalSink {
    displayed: Signal<GeometryState>,
}

impl SignalSink {
    pub fn new(displayed: Signal<GeometryState>) -> Self {
        Self { displayed }
    }
}

impl RenderSink for SignalSink {
    fn draw_frame(&mut self, state: &GeometryState) {
        self.displayed.set(state.clone());
    }

    fn draw_full_reset(&mut self, state: &GeometryState) {
        self.displayed.set(state.clone());
    }
}
