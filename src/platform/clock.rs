//! Frame timing
//!
//! Converts animation-frame timestamps (ms) into `dt` measured in nominal
//! frames, the unit the speed constants are tuned in.

/// Tracks the previous frame timestamp
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<f64>,
    nominal_frame_ms: f64,
}

impl FrameClock {
    pub fn new(nominal_frame_ms: f64) -> Self {
        Self {
            last: None,
            nominal_frame_ms,
        }
    }

    /// Record a timestamp and return the elapsed nominal frames.
    ///
    /// The first call has nothing to compare against and returns 0. A
    /// timestamp earlier than the previous one also yields 0.
    pub fn advance(&mut self, timestamp_ms: f64) -> f32 {
        let dt = match self.last {
            Some(last) => ((timestamp_ms - last) / self.nominal_frame_ms).max(0.0),
            None => 0.0,
        };
        self.last = Some(timestamp_ms);
        dt as f32
    }

    /// Forget the previous timestamp
    pub fn reset(&mut self) {
        self.last = None;
    }
}
