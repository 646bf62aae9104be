//! Directional light synthesis.
//!
//! Converts the day/night blend factor into sun and moon light
//! parameters. Brightness follows a logistic response rather than the
//! linear skybox blend, giving a short, continuous dusk/dawn ramp while
//! the sky imagery cross-fades over a much longer window.

use glam::Vec3;

use crate::core::types::Rgba;
use crate::engine::light::LightDescriptor;

/// Fixed dim level of the moon light.
pub const MOON_LIGHT_LEVEL: f32 = 0.2;

/// Logistic day/night brightness response.
///
/// Centred at `alpha = 0.6` with steepness `1/0.05`; `brightness(0.6)`
/// is exactly 0.5 and the curve saturates within a few percent of alpha
/// on either side.
pub fn brightness(alpha: f32) -> f32 {
    1.0 / (1.0 + (-(alpha - 0.6) / 0.05).exp())
}

/// Ambient floor scales linearly with the blend factor.
pub fn ambient_level(alpha: f32) -> f32 {
    alpha * 0.2
}

/// Light direction for a given orbit angle: from the sun toward the
/// scene, opposite the sun's position vector.
pub fn sun_light_direction(angle: f32) -> Vec3 {
    Vec3::new(-angle.cos(), -angle.sin(), 0.0)
}

/// The moon sits diametrically opposite the sun on the orbit.
pub fn moon_light_direction(angle: f32) -> Vec3 {
    -sun_light_direction(angle)
}

/// Moon brightness: the sun response inverted and scaled to the dim cap,
/// so the moon fades in exactly as the sun light drops out.
pub fn moon_brightness(alpha: f32) -> f32 {
    MOON_LIGHT_LEVEL * (1.0 - brightness(alpha))
}

/// Sun light parameters for a frame. Deliberately achromatic: every
/// channel inside each color carries the same level.
pub fn sun_light(angle: f32, alpha: f32) -> LightDescriptor {
    let b = brightness(alpha);
    LightDescriptor::directional(
        sun_light_direction(angle),
        Rgba::splat(ambient_level(alpha)),
        Rgba::splat(b),
        Rgba::splat(b),
    )
}

/// Moon light parameters for a frame, mirroring the sun's shape.
pub fn moon_light(angle: f32, alpha: f32) -> LightDescriptor {
    let b = moon_brightness(alpha);
    LightDescriptor::directional(
        moon_light_direction(angle),
        Rgba::splat(b),
        Rgba::splat(b),
        Rgba::splat(b),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
