//! Light engine contract.

use glam::Vec3;

use crate::core::types::{Result, Rgba};

/// Opaque handle to a light resource owned by the lighting subsystem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LightHandle(pub u32);

/// Kind of light resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightKind {
    /// Fixed direction, no position. Sun and moon illumination.
    Directional,
    /// Positioned light with distance attenuation.
    Point,
}

/// Full description of a light resource.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightDescriptor {
    pub kind: LightKind,
    pub direction: Vec3,
    pub ambient: Rgba,
    pub diffuse: Rgba,
    pub specular: Rgba,
    /// Constant/linear/quadratic attenuation. Always zero for
    /// directional lights.
    pub attenuation: Vec3,
}

impl LightDescriptor {
    /// A directional light with zero attenuation.
    pub fn directional(direction: Vec3, ambient: Rgba, diffuse: Rgba, specular: Rgba) -> Self {
        Self {
            kind: LightKind::Directional,
            direction,
            ambient,
            diffuse,
            specular,
            attenuation: Vec3::ZERO,
        }
    }
}

/// Creates and rewrites light resources on behalf of the core.
pub trait LightEngine {
    /// Create a light resource under a debug `label`.
    fn create_light(&mut self, desc: &LightDescriptor, label: &str) -> Result<LightHandle>;

    /// Read back the current descriptor of a light.
    fn light(&self, handle: LightHandle) -> Result<LightDescriptor>;

    /// Rewrite a light's descriptor.
    fn set_light(&mut self, handle: LightHandle, desc: &LightDescriptor) -> Result<()>;
}
