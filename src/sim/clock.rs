//! Frame clock
//!
//! Turns the driver's animation-frame timestamps into elapsed milliseconds.

use serde::{Deserialize, Serialize};

/// Tracks the previous frame timestamp (milliseconds)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimClock {
    last: Option<f64>,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed time since the previous call, never negative.
    ///
    /// The first call returns 0. Timestamps that go backwards also yield 0,
    /// and the new timestamp still becomes the reference for the next frame.
    pub fn tick(&mut self, now: f64) -> f32 {
        let dtime = match self.last {
            Some(prev) => (now - prev).max(0.0),
            None => 0.0,
        };
        self.last = Some(now);
        dtime as f32
    }

    /// Timestamp of the previous frame, if any
    pub fn last(&self) -> Option<f64> {
        self.last
    }

    /// Forget the previous timestamp so the next frame starts from zero
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_zero() {
        let mut clock = SimClock::new();
        assert_eq!(clock.tick(1234.5), 0.0);
        assert_eq!(clock.last(), Some(1234.5));
    }

    #[test]
    fn test_delta_between_frames() {
        let mut clock = SimClock::new();
        clock.tick(1000.0);
        assert_eq!(clock.tick(1016.0), 16.0);
        assert_eq!(clock.tick(1016.0), 0.0);
        assert_eq!(clock.tick(1050.0), 34.0);
    }

    #[test]
    fn test_backwards_timestamp_clamps_to_zero() {
        let mut clock = SimClock::new();
        clock.tick(500.0);
        assert_eq!(clock.tick(400.0), 0.0);
        // The earlier timestamp is now the reference
        assert_eq!(clock.tick(410.0), 10.0);
    }

    #[test]
    fn test_reset() {
        let mut clock = SimClock::new();
        clock.tick(10.0);
        clock.reset();
        assert_eq!(clock.tick(5000.0), 0.0);
    }
}
