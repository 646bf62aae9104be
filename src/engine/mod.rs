//! Collaborator contracts for the host rendering subsystem.
//!
//! The core never reaches into ambient engine state; everything it needs
//! is injected through these traits. [`Engine`] bundles them into a
//! single seam for hosts that implement the full surface on one type.

pub mod effects;
pub mod headless;
pub mod light;
pub mod scene;
pub mod surface;
pub mod texture;

pub use effects::GraphicEffects;
pub use light::{LightDescriptor, LightEngine, LightHandle, LightKind};
pub use scene::{MeshHandle, SceneRenderer, WaterMeshDesc};
pub use surface::RenderSurface;
pub use texture::{ColorKeyMode, TextureHandle, TextureProvider};

/// Everything the core needs from the host, as one injectable seam.
pub trait Engine: TextureProvider + LightEngine + SceneRenderer + GraphicEffects {}

impl<T> Engine for T where T: TextureProvider + LightEngine + SceneRenderer + GraphicEffects {}
