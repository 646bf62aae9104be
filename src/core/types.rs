//! Core type aliases and shared value types

pub use glam::{Vec2, Vec3};

use serde::{Deserialize, Serialize};

/// Standard Result type for the engine
pub type Result<T> = std::result::Result<T, crate::core::error::Error>;

/// RGBA color with `f32` channels in linear space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// All four channels set to the same level.
    pub const fn splat(level: f32) -> Self {
        Self::new(level, level, level, level)
    }

    /// White at the given opacity.
    pub const fn opacity(alpha: f32) -> Self {
        Self::new(1.0, 1.0, 1.0, alpha)
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// A world-space plane: `dot(normal, p) + offset = 0`.
///
/// Used to exclude geometry from a render pass, e.g. everything below
/// the waterline during the reflection capture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipPlane {
    pub normal: Vec3,
    pub offset: f32,
}

impl ClipPlane {
    pub fn new(normal: Vec3, offset: f32) -> Self {
        Self { normal, offset }
    }
}
