//! Atmosphere runtime state and GPU uniform.

use bytemuck::{Pod, Zeroable};

use crate::atmosphere::light::{moon_light, sun_light};
use crate::atmosphere::orbit::{self, OrbitConfig};
use crate::core::clock::MILLISEC_PER_DAY;
use crate::engine::light::LightDescriptor;

// ---------------------------------------------------------------------------
// CPU-side state
// ---------------------------------------------------------------------------

/// Full sky state for one frame, a pure function of time-of-day and the
/// orbit configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct AtmosphereState {
    // Time
    pub time_of_day: u64,
    pub day_count: u32,
    pub day_fraction: f32,

    // Sun orbit
    pub sun_angle: f32,
    pub sun_position: [f32; 3],

    // Day/night blend
    pub day_alpha_raw: f32,
    pub day_alpha: f32,

    // Light levels
    pub brightness: f32,
    pub ambient_level: f32,

    // Directional lights
    pub sun_light: LightDescriptor,
    pub moon_light: LightDescriptor,
}

impl AtmosphereState {
    /// Compute the frame state for a time-of-day sample.
    pub fn compute(
        time_of_day: u64,
        day_length: u64,
        day_count: u32,
        orbit: &OrbitConfig,
    ) -> Self {
        let angle = orbit::sun_angle(time_of_day, day_length);
        let sun_position = orbit::sun_position(angle, orbit);
        let day_alpha_raw = orbit::day_alpha_raw(sun_position[1], orbit);
        let day_alpha = orbit::day_alpha(sun_position[1], orbit);

        let sun = sun_light(angle, day_alpha);
        let moon = moon_light(angle, day_alpha);

        Self {
            time_of_day,
            day_count,
            day_fraction: (time_of_day as f64 / day_length as f64) as f32,
            sun_angle: angle,
            sun_position,
            day_alpha_raw,
            day_alpha,
            brightness: sun.diffuse.r,
            ambient_level: sun.ambient.r,
            sun_light: sun,
            moon_light: moon,
        }
    }
}

impl Default for AtmosphereState {
    fn default() -> Self {
        Self::compute(0, MILLISEC_PER_DAY, 0, &OrbitConfig::default())
    }
}

// ---------------------------------------------------------------------------
// GPU uniform
// ---------------------------------------------------------------------------

/// GPU-ready atmosphere uniform buffer.
///
/// All `vec3` fields are padded to 16-byte alignment for WGSL
/// compatibility.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct AtmosphereUniform {
    // -- Sun (16 + 16 = 32 bytes) --
    pub sun_direction: [f32; 3],
    pub day_alpha: f32,
    pub sun_position: [f32; 3],
    pub brightness: f32,

    // -- Moon (16 bytes) --
    pub moon_direction: [f32; 3],
    pub moon_brightness: f32,

    // -- Scalars (16 bytes) --
    pub ambient_level: f32,
    pub day_fraction: f32,
    pub _pad: [f32; 2],
}

impl From<&AtmosphereState> for AtmosphereUniform {
    fn from(s: &AtmosphereState) -> Self {
        Self {
            sun_direction: s.sun_light.direction.to_array(),
            day_alpha: s.day_alpha,
            sun_position: s.sun_position,
            brightness: s.brightness,
            moon_direction: s.moon_light.direction.to_array(),
            moon_brightness: s.moon_light.diffuse.r,
            ambient_level: s.ambient_level,
            day_fraction: s.day_fraction,
            _pad: [0.0; 2],
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
