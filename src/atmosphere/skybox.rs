//! Skybox texture sets.
//!
//! Two six-face cube sets (day, night) plus the sun billboard texture.
//! The set holds opaque handles only; the asset subsystem owns the
//! texture lifetimes.

use serde::{Deserialize, Serialize};

use crate::core::types::Result;
use crate::engine::texture::{ColorKeyMode, TextureHandle, TextureProvider};

/// Per-face texture paths for one skybox.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkyboxPaths {
    pub up: String,
    pub down: String,
    pub left: String,
    pub right: String,
    pub front: String,
    pub back: String,
}

impl SkyboxPaths {
    /// All six faces under `dir`, named `<stem>_<face>.<ext>`.
    pub fn from_dir(dir: &str, stem: &str, ext: &str) -> Self {
        let face = |name: &str| format!("{dir}/{stem}_{name}.{ext}");
        Self {
            up: face("up"),
            down: face("down"),
            left: face("north"),
            right: face("south"),
            front: face("west"),
            back: face("east"),
        }
    }
}

/// The six loaded faces of one skybox.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkyboxFaces {
    pub up: TextureHandle,
    pub down: TextureHandle,
    pub left: TextureHandle,
    pub right: TextureHandle,
    pub front: TextureHandle,
    pub back: TextureHandle,
}

impl SkyboxFaces {
    /// Resolve all six faces through the provider. Labels are prefixed
    /// so both sets stay distinguishable in the host's debug tooling.
    pub fn load(
        textures: &mut dyn TextureProvider,
        paths: &SkyboxPaths,
        label_prefix: &str,
    ) -> Result<Self> {
        let mut face = |path: &str, which: &str| {
            textures.load_texture(
                path,
                &format!("{label_prefix}Sky{which}"),
                -1,
                -1,
                ColorKeyMode::None,
                true,
            )
        };
        Ok(Self {
            up: face(&paths.up, "Top")?,
            down: face(&paths.down, "Bottom")?,
            left: face(&paths.left, "Left")?,
            right: face(&paths.right, "Right")?,
            front: face(&paths.front, "Front")?,
            back: face(&paths.back, "Back")?,
        })
    }
}

/// The full sky texture set: day faces, night faces, sun billboard.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkyboxSet {
    pub day: SkyboxFaces,
    pub night: SkyboxFaces,
    pub sun: TextureHandle,
}

impl SkyboxSet {
    pub fn load(
        textures: &mut dyn TextureProvider,
        day: &SkyboxPaths,
        night: &SkyboxPaths,
        sun_path: &str,
    ) -> Result<Self> {
        let day = SkyboxFaces::load(textures, day, "Day")?;
        let night = SkyboxFaces::load(textures, night, "Night")?;
        let sun = textures.load_texture(sun_path, "Sun", -1, -1, ColorKeyMode::None, true)?;
        log::debug!("skybox set loaded: 12 faces + sun billboard");
        Ok(Self { day, night, sun })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
