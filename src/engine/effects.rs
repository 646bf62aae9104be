//! Mesh effect contract.

use crate::core::types::{ClipPlane, Result};
use crate::engine::scene::MeshHandle;
use crate::engine::texture::TextureHandle;

/// Screen-space and per-mesh effects applied by the host renderer.
pub trait GraphicEffects {
    /// Bind the reflection/refraction captures and the mirror clip
    /// plane to a water mesh.
    fn set_water_reflection(
        &mut self,
        mesh: MeshHandle,
        reflect: TextureHandle,
        refract: TextureHandle,
        plane: ClipPlane,
    ) -> Result<()>;

    /// Scroll the mesh's distortion map over time.
    fn set_bump_animation(&mut self, mesh: MeshHandle, enabled: bool, speed_x: f32, speed_y: f32);
}
