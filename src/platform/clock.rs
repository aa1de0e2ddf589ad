//! Frame delta tracking

use crate::consts::{FRAME_DT_MS, MAX_FRAME_DT_MS};

/// Turns animation-frame timestamps into clamped deltas
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_time: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last_time: None }
    }

    /// Milliseconds since the previous frame
    ///
    /// The first frame reports a nominal 60 Hz step. Long stalls (hidden tab,
    /// debugger) are clamped so a pending timer does not jump ahead.
    pub fn delta_ms(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_time {
            Some(last) => ((now_ms - last) as f32).clamp(0.0, MAX_FRAME_DT_MS),
            None => FRAME_DT_MS,
        };
        self.last_time = Some(now_ms);
        dt
    }

    /// Forget the last timestamp (loop restarted)
    pub fn reset(&mut self) {
        self.last_time = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_nominal() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.delta_ms(5000.0), FRAME_DT_MS);
        assert_eq!(clock.delta_ms(5016.0), 16.0);
    }

    #[test]
    fn test_stalls_are_clamped() {
        let mut clock = FrameClock::new();
        clock.delta_ms(0.0);
        assert_eq!(clock.delta_ms(10_000.0), MAX_FRAME_DT_MS);
        // Timestamps going backwards never yield a negative delta
        assert_eq!(clock.delta_ms(9_000.0), 0.0);
    }

    #[test]
    fn test_reset_restarts_nominal() {
        let mut clock = FrameClock::new();
        clock.delta_ms(0.0);
        clock.reset();
        assert_eq!(clock.delta_ms(400.0), FRAME_DT_MS);
    }
}
