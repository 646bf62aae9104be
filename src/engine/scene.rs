//! Scene renderer contract.

use glam::Vec3;

use crate::core::types::{Result, Rgba};
use crate::engine::surface::RenderSurface;
use crate::engine::texture::TextureHandle;

/// Opaque handle to a mesh owned by the rendering subsystem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub u32);

/// Flat subdivided mesh description, used for the water surface.
#[derive(Clone, Copy, Debug)]
pub struct WaterMeshDesc {
    /// Distortion (DUDV) texture applied to the surface.
    pub texture: TextureHandle,
    pub min_x: f32,
    pub min_z: f32,
    pub max_x: f32,
    pub max_z: f32,
    /// World-space height of the plane.
    pub height: f32,
    /// Tessellation along x and z.
    pub tiles_x: u32,
    pub tiles_z: u32,
    /// Whether the mesh blends with the scene behind it.
    pub alpha_blended: bool,
}

/// Draw-side contract the core renders through.
///
/// Skybox draws honor the most recent texture and color-blend state;
/// the core is responsible for ordering its calls within a frame.
pub trait SceneRenderer {
    fn skybox_enable(&mut self, enabled: bool);

    /// Bind the six cube faces for subsequent skybox renders.
    #[allow(clippy::too_many_arguments)]
    fn skybox_set_textures(
        &mut self,
        front: TextureHandle,
        back: TextureHandle,
        left: TextureHandle,
        right: TextureHandle,
        up: TextureHandle,
        down: TextureHandle,
    );

    /// Color-blend state for subsequent skybox renders; the alpha
    /// channel controls layer opacity.
    fn skybox_set_color(&mut self, color: Rgba);

    fn skybox_render(&mut self);

    /// Horizon/fog pass drawn after the skybox layers.
    fn atmosphere_render(&mut self);

    fn sun_enable(&mut self, enabled: bool);

    fn sun_set_texture(&mut self, texture: TextureHandle);

    /// Billboard size in world units.
    fn sun_set_billboard_size(&mut self, size: f32);

    fn sun_set_position(&mut self, position: Vec3);

    /// Create an off-screen render target. A `width`/`height` of -1
    /// uses the viewport dimensions.
    fn create_render_surface(&mut self, width: i32, height: i32) -> Result<Box<dyn RenderSurface>>;

    fn create_water_mesh(&mut self, desc: &WaterMeshDesc) -> Result<MeshHandle>;

    fn render_mesh(&mut self, mesh: MeshHandle);
}
