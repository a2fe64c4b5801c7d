//! Timeline - frame schedule and easing for one animated transition
//!
//! The timeline is decoupled from what it animates: it only maps a frame
//! index to an eased progress fraction and fixes the per-frame interval.
//! The controller owns the Idle/Running state; a timeline is just the
//! schedule a running session follows.

/// Smoothstep easing: 3t^2 - 2t^3.
///
/// Maps linear time progress to interpolation progress with zero velocity
/// at both endpoints. `ease(0) == 0` and `ease(1) == 1` exactly.
pub fn ease(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Fixed frame schedule for a transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timeline {
    duration_ms: u32,
    frame_count: u32,
}

impl Timeline {
    /// Floor on the per-frame interval, matching typical timer resolution
    pub const MIN_INTERVAL_MS: u32 = 15;

    pub const DEFAULT: Self = Self {
        duration_ms: 900,
        frame_count: 60,
    };

    /// `frame_count` must be at least 2 so progress spans 0..=1
    pub fn new(duration_ms: u32, frame_count: u32) -> Self {
        assert!(frame_count >= 2, "a timeline needs at least two frames");
        Self { duration_ms, frame_count }
    }

    pub const fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub const fn last_frame(&self) -> u32 {
        self.frame_count - 1
    }

    /// Delay between emitted frames
    pub fn interval_ms(&self) -> u32 {
        (self.duration_ms / self.frame_count).max(Self::MIN_INTERVAL_MS)
    }

    /// Eased progress for a frame index, 0 at the first frame, 1 at the last
    pub fn progress(&self, frame: u32) -> f64 {
        let t = f64::from(frame.min(self.last_frame())) / f64::from(self.last_frame());
        ease(t)
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::DEFAULT
    }
}
