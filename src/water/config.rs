//! Water configuration.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::core::types::{ClipPlane, Rgba};

/// Offset of the mirror clip plane below the water surface. Values
/// between 0.75 and roughly 1.3 avoid seams at the waterline.
pub const CLIP_PLANE_BIAS: f32 = 0.75;

/// Water surface configuration with tuned defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WaterConfig {
    /// Water plane height in world units.
    pub height: f32,
    /// Half extent of the square water mesh.
    pub half_extent: f32,
    /// Mesh tessellation along x and z.
    pub tessellation: [u32; 2],
    /// Distortion map scroll speed in x and y.
    pub bump_speed: [f32; 2],
    /// Clear color for both capture surfaces. A muted deep blue so
    /// un-captured pixels read as open water.
    pub background_color: Rgba,
    /// Capture surface dimensions; -1 uses the viewport size.
    pub surface_size: [i32; 2],
    /// DUDV distortion texture path.
    pub distortion_texture: String,
    /// Distortion amplitude handed to the texture decoder.
    pub distortion_amplitude: f32,
}

impl Default for WaterConfig {
    fn default() -> Self {
        Self {
            height: 85.0,
            half_extent: 2048.0,
            tessellation: [16, 16],
            bump_speed: [0.5, 0.5],
            background_color: Rgba::new(0.0, 0.0, 0.19, 1.0),
            surface_size: [-1, -1],
            distortion_texture: "media/distortiontexture.dds".into(),
            distortion_amplitude: 150.0,
        }
    }
}

impl WaterConfig {
    /// The mirror clip plane for this water body: horizontal, biased
    /// slightly below the surface.
    pub fn clip_plane(&self) -> ClipPlane {
        clip_plane(self.height)
    }
}

/// Clip plane for a water surface at `height`.
pub fn clip_plane(height: f32) -> ClipPlane {
    ClipPlane::new(Vec3::Y, -height - CLIP_PLANE_BIAS)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
