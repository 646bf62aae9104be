//! Off-screen render surface contract.

use crate::core::types::{Result, Rgba};
use crate::engine::texture::TextureHandle;

/// An off-screen buffer the scene can be captured into and later
/// sampled as a texture.
///
/// `start_render`/`end_render` must pair and must not nest within the
/// same surface; the host renders the desired content between them.
pub trait RenderSurface {
    fn set_background_color(&mut self, color: Rgba);

    /// Begin capturing into this surface.
    fn start_render(&mut self) -> Result<()>;

    /// Finish the capture begun by `start_render`.
    fn end_render(&mut self) -> Result<()>;

    /// The surface's content as a texture input. The handle is stable
    /// for the surface's lifetime; content updates on each ended render.
    fn texture(&self) -> TextureHandle;
}
