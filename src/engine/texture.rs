//! Texture provider contract.

use crate::core::types::Result;

/// Opaque handle to a texture owned by the asset subsystem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Color-key transparency applied while decoding a texture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorKeyMode {
    /// No color keying.
    #[default]
    None,
    /// Black pixels become transparent.
    Black,
}

/// Loads and decodes textures on behalf of the core.
///
/// The core holds the returned handles for its own lifetime but never
/// owns the underlying resources; the provider does.
pub trait TextureProvider {
    /// Load a texture from `path` under a debug `label`.
    ///
    /// A `width`/`height` of -1 keeps the source dimensions.
    fn load_texture(
        &mut self,
        path: &str,
        label: &str,
        width: i32,
        height: i32,
        color_key: ColorKeyMode,
        mipmaps: bool,
    ) -> Result<TextureHandle>;

    /// Load a DUDV displacement texture with the given distortion
    /// amplitude. Used for water surface animation.
    fn load_dudv_texture(
        &mut self,
        path: &str,
        label: &str,
        amplitude: f32,
    ) -> Result<TextureHandle>;
}
