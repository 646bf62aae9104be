//! Day cycle clock.
//!
//! Owns the time-of-day value for the whole scene: an integer millisecond
//! count inside a fixed-length day, advanced from real elapsed time and
//! wrapped modulo the day length. The atmosphere model samples this value
//! every frame but never writes it.

/// Cycle milliseconds in one full in-game day.
pub const MILLISEC_PER_DAY: u64 = 86_400_000;

/// Monotonic time-of-day clock with day counting.
#[derive(Clone, Debug)]
pub struct DayClock {
    /// Current position inside the day, in `[0, day_length)` cycle ms.
    time_of_day: u64,
    /// Number of full days completed.
    day_count: u32,
    /// Cycle milliseconds per day.
    day_length: u64,
    /// Real-to-cycle time multiplier.
    time_scale: f64,
    /// Sub-millisecond remainder carried between advances.
    carry: f64,
}

impl DayClock {
    /// Create a clock at `start_ms` cycle milliseconds into the day.
    ///
    /// `time_scale` converts real elapsed milliseconds into cycle
    /// milliseconds; 72.0 compresses a full day into 20 real minutes.
    pub fn new(start_ms: u64, day_length: u64, time_scale: f64) -> Self {
        let day_length = day_length.max(1);
        Self {
            time_of_day: start_ms % day_length,
            day_count: 0,
            day_length,
            time_scale,
            carry: 0.0,
        }
    }

    /// Advance by `elapsed_ms` real milliseconds, wrapping at day end.
    pub fn advance(&mut self, elapsed_ms: u64) {
        self.carry += elapsed_ms as f64 * self.time_scale;
        let whole = self.carry.floor();
        self.carry -= whole;

        self.time_of_day += whole as u64;
        while self.time_of_day >= self.day_length {
            self.time_of_day -= self.day_length;
            self.day_count += 1;
        }
    }

    /// Current time-of-day in `[0, day_length)` cycle milliseconds.
    #[inline]
    pub fn time_of_day(&self) -> u64 {
        self.time_of_day
    }

    /// Jump to a specific time-of-day, wrapping into range.
    pub fn set_time_of_day(&mut self, ms: u64) {
        self.time_of_day = ms % self.day_length;
        self.carry = 0.0;
    }

    /// Number of full days completed since construction.
    #[inline]
    pub fn day_count(&self) -> u32 {
        self.day_count
    }

    /// Cycle milliseconds per day.
    #[inline]
    pub fn day_length(&self) -> u64 {
        self.day_length
    }

    /// Time-of-day as a fraction of the day in `[0.0, 1.0)`.
    #[inline]
    pub fn day_fraction(&self) -> f32 {
        (self.time_of_day as f64 / self.day_length as f64) as f32
    }

    /// Time-of-day as an hour in `[0.0, 24.0)`.
    #[inline]
    pub fn hour(&self) -> f32 {
        self.day_fraction() * 24.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_wraps_start() {
        let c = DayClock::new(MILLISEC_PER_DAY + 500, MILLISEC_PER_DAY, 1.0);
        assert_eq!(c.time_of_day(), 500);
        assert_eq!(c.day_count(), 0);
    }

    #[test]
    fn test_advance_unscaled() {
        let mut c = DayClock::new(0, MILLISEC_PER_DAY, 1.0);
        c.advance(1234);
        assert_eq!(c.time_of_day(), 1234);
    }

    #[test]
    fn test_advance_scaled() {
        // 72x scale: one real second is 72 cycle seconds
        let mut c = DayClock::new(0, MILLISEC_PER_DAY, 72.0);
        c.advance(1000);
        assert_eq!(c.time_of_day(), 72_000);
    }

    #[test]
    fn test_advance_wraps_and_counts_days() {
        let mut c = DayClock::new(MILLISEC_PER_DAY - 10, MILLISEC_PER_DAY, 1.0);
        c.advance(10 + MILLISEC_PER_DAY);
        assert_eq!(c.time_of_day(), 0);
        assert_eq!(c.day_count(), 2);
    }

    #[test]
    fn test_fractional_carry_accumulates() {
        // 0.5x scale: two 1ms advances make one cycle ms
        let mut c = DayClock::new(0, MILLISEC_PER_DAY, 0.5);
        c.advance(1);
        assert_eq!(c.time_of_day(), 0);
        c.advance(1);
        assert_eq!(c.time_of_day(), 1);
    }

    #[test]
    fn test_set_time_of_day() {
        let mut c = DayClock::new(0, MILLISEC_PER_DAY, 1.0);
        c.set_time_of_day(MILLISEC_PER_DAY + 42);
        assert_eq!(c.time_of_day(), 42);
    }

    #[test]
    fn test_day_fraction_and_hour() {
        let mut c = DayClock::new(0, MILLISEC_PER_DAY, 1.0);
        c.set_time_of_day(MILLISEC_PER_DAY / 4);
        assert!((c.day_fraction() - 0.25).abs() < 1e-6);
        assert!((c.hour() - 6.0).abs() < 1e-4);
    }
}
