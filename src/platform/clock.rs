//! Frame timing
//!
//! Converts `requestAnimationFrame` timestamps (milliseconds) into clamped
//! simulation deltas (seconds).

use crate::consts::MAX_FRAME_DT;

#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous call, in `[0, MAX_FRAME_DT]`.
    /// The first call after construction or `reset` returns 0.
    pub fn advance(&mut self, timestamp_ms: f64) -> f32 {
        let previous = self.last_ms.unwrap_or(timestamp_ms);
        self.last_ms = Some(timestamp_ms);
        let dt = ((timestamp_ms - previous) / 1000.0) as f32;
        dt.clamp(0.0, MAX_FRAME_DT)
    }

    /// Forget the previous timestamp
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
