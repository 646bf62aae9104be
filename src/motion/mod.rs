//! Finite-difference motion estimation.

use glam::Vec3;

/// Estimates instantaneous speed from successive position samples.
#[derive(Clone, Debug, Default)]
pub struct SpeedTracker {
    previous: Option<Vec3>,
}

impl SpeedTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Speed in units per second between the previous sample and
    /// `position`, `elapsed_ms` apart.
    ///
    /// The first call seeds the history and returns 0. `elapsed_ms`
    /// must be positive; zero divides by zero.
    pub fn calculate_speed(&mut self, position: Vec3, elapsed_ms: f32) -> f32 {
        debug_assert!(elapsed_ms > 0.0, "elapsed_ms must be positive");
        let speed = match self.previous {
            None => 0.0,
            Some(prev) => position.distance(prev) / elapsed_ms * 1000.0,
        };
        self.previous = Some(position);
        speed
    }

    /// Forget the previous sample; the next call returns 0 again.
    pub fn reset(&mut self) {
        self.previous = None;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
