//! Sun orbit math.
//!
//! The sun travels a circle of fixed radius in the x/y plane, centred
//! `y_offset` above the origin. Time-of-day maps linearly onto the
//! orbit angle with midnight at the bottom of the circle, so the sun
//! crosses the horizon band twice per day.

use serde::{Deserialize, Serialize};

/// Default orbit radius in world units.
pub const SUN_ORBIT_RADIUS: f32 = 800.0;

/// Shape of the sun's apparent path across the sky.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbitConfig {
    /// Orbit radius in world units.
    pub radius: f32,
    /// Vertical offset of the orbit centre. Raising it keeps the sun
    /// above the horizon longer.
    pub y_offset: i32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            radius: SUN_ORBIT_RADIUS,
            y_offset: 200,
        }
    }
}

/// Orbit angle in radians for a time-of-day sample.
///
/// `angle = 2π·t/T − π/2`: midnight sits at the bottom of the circle,
/// the zenith crossing at mid-day. Computed in f64 because `t` exceeds
/// f32's integer range late in the day.
pub fn sun_angle(time_of_day: u64, day_length: u64) -> f32 {
    let frac = time_of_day as f64 / day_length as f64;
    (std::f64::consts::TAU * frac - std::f64::consts::FRAC_PI_2) as f32
}

/// Sun position on the orbit circle: `(r·cos θ, r·sin θ + y_offset, 0)`.
pub fn sun_position(angle: f32, config: &OrbitConfig) -> [f32; 3] {
    let y_offset = config.y_offset as f32;
    [
        config.radius * angle.cos(),
        config.radius * angle.sin() + y_offset,
        0.0,
    ]
}

/// Day/night blend factor before clamping.
///
/// Normalizes the sun height into `[0, 1]` over the orbit's vertical
/// range, then stretches by 2 so the day layer reaches full opacity
/// well before the sun peaks. Runs 0..2 over a day; negative only for
/// heights below the orbit's bottom.
pub fn day_alpha_raw(sun_y: f32, config: &OrbitConfig) -> f32 {
    let y_offset = config.y_offset as f32;
    (sun_y + config.radius - y_offset) / (config.radius * 2.0) * 2.0
}

/// Day/night blend factor clamped to `[0, 1]`.
///
/// The upper clamp keeps the day sky at constant brightness (no stars
/// bleeding through near noon); the lower clamp resolves the below-zero
/// tail to fully-night.
pub fn day_alpha(sun_y: f32, config: &OrbitConfig) -> f32 {
    day_alpha_raw(sun_y, config).clamp(0.0, 1.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
