//! Planar water surface controller.
//!
//! Owns the paired reflection/refraction capture surfaces and the
//! blended water mesh. The host wraps its scene re-renders in the
//! begin/end blocks each frame, then calls [`render`](WaterSurfaceController::render)
//! to composite the mesh from both captures.

pub mod config;

pub use config::{clip_plane, WaterConfig, CLIP_PLANE_BIAS};

use crate::core::error::Error;
use crate::core::types::Result;
use crate::engine::scene::{MeshHandle, WaterMeshDesc};
use crate::engine::surface::RenderSurface;
use crate::engine::texture::TextureHandle;
use crate::engine::Engine;

/// Manages the render-target lifecycle for one reflective water body.
///
/// Both capture surfaces are created at construction and owned for the
/// controller's full lifetime; dropping the controller releases them.
/// `begin_*`/`end_*` must pair within a frame; the contract is checked
/// and violations surface as [`Error::Surface`].
pub struct WaterSurfaceController {
    config: WaterConfig,
    reflect: Box<dyn RenderSurface>,
    refract: Box<dyn RenderSurface>,
    mesh: MeshHandle,
    reflect_active: bool,
    refract_active: bool,
}

impl WaterSurfaceController {
    /// Create the capture surfaces, water mesh, and effect bindings.
    ///
    /// Surface creation failure is fatal: no surfaces, no water. The
    /// error propagates to the owning scene.
    pub fn new(engine: &mut dyn Engine, config: WaterConfig) -> Result<Self> {
        let [width, height] = config.surface_size;
        let mut reflect = engine.create_render_surface(width, height)?;
        reflect.set_background_color(config.background_color);
        let mut refract = engine.create_render_surface(width, height)?;
        refract.set_background_color(config.background_color);

        let dudv = engine.load_dudv_texture(
            &config.distortion_texture,
            "DUDV",
            config.distortion_amplitude,
        )?;

        let mesh = engine.create_water_mesh(&WaterMeshDesc {
            texture: dudv,
            min_x: -config.half_extent,
            min_z: -config.half_extent,
            max_x: config.half_extent,
            max_z: config.half_extent,
            height: config.height,
            tiles_x: config.tessellation[0],
            tiles_z: config.tessellation[1],
            alpha_blended: true,
        })?;

        engine.set_water_reflection(mesh, reflect.texture(), refract.texture(), config.clip_plane())?;
        engine.set_bump_animation(mesh, true, config.bump_speed[0], config.bump_speed[1]);

        log::info!(
            "water surfaces created: height {}, clip offset {}",
            config.height,
            config.clip_plane().offset
        );

        Ok(Self {
            config,
            reflect,
            refract,
            mesh,
            reflect_active: false,
            refract_active: false,
        })
    }

    /// Begin the reflection capture. The host renders the mirrored
    /// scene before calling [`end_reflect`](Self::end_reflect).
    pub fn begin_reflect(&mut self) -> Result<()> {
        if self.reflect_active {
            return Err(Error::Surface("reflection capture already begun".into()));
        }
        self.reflect.start_render()?;
        self.reflect_active = true;
        Ok(())
    }

    /// End the reflection capture begun by [`begin_reflect`](Self::begin_reflect).
    pub fn end_reflect(&mut self) -> Result<()> {
        if !self.reflect_active {
            return Err(Error::Surface("end_reflect without begin_reflect".into()));
        }
        self.reflect.end_render()?;
        self.reflect_active = false;
        Ok(())
    }

    /// Begin the refraction capture.
    pub fn begin_refract(&mut self) -> Result<()> {
        if self.refract_active {
            return Err(Error::Surface("refraction capture already begun".into()));
        }
        self.refract.start_render()?;
        self.refract_active = true;
        Ok(())
    }

    /// End the refraction capture begun by [`begin_refract`](Self::begin_refract).
    pub fn end_refract(&mut self) -> Result<()> {
        if !self.refract_active {
            return Err(Error::Surface("end_refract without begin_refract".into()));
        }
        self.refract.end_render()?;
        self.refract_active = false;
        Ok(())
    }

    /// Draw the water mesh from both captures. With stale captures this
    /// renders last frame's content, which is valid, not an error.
    pub fn render(&self, engine: &mut dyn Engine) {
        engine.render_mesh(self.mesh);
    }

    #[inline]
    pub fn config(&self) -> &WaterConfig {
        &self.config
    }

    #[inline]
    pub fn mesh(&self) -> MeshHandle {
        self.mesh
    }

    /// The reflection capture as a texture input.
    pub fn reflect_texture(&self) -> TextureHandle {
        self.reflect.texture()
    }

    /// The refraction capture as a texture input.
    pub fn refract_texture(&self) -> TextureHandle {
        self.refract.texture()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    use crate::engine::headless::{EngineCall, HeadlessEngine};

    fn new_controller(engine: &mut HeadlessEngine) -> WaterSurfaceController {
        WaterSurfaceController::new(engine, WaterConfig::default()).unwrap()
    }

    #[test]
    fn test_construction_wires_effects() {
        let mut engine = HeadlessEngine::new();
        let water = new_controller(&mut engine);
        let calls = engine.calls();

        let surfaces = calls
            .iter()
            .filter(|c| matches!(c, EngineCall::CreateRenderSurface(_)))
            .count();
        assert_eq!(surfaces, 2);

        let background = WaterConfig::default().background_color;
        assert!(calls.contains(&EngineCall::SurfaceBackground(
            water.reflect_texture(),
            background
        )));
        assert!(calls.contains(&EngineCall::SurfaceBackground(
            water.refract_texture(),
            background
        )));

        assert!(calls.contains(&EngineCall::SetWaterReflection {
            mesh: water.mesh(),
            reflect: water.reflect_texture(),
            refract: water.refract_texture(),
            plane: WaterConfig::default().clip_plane(),
        }));
        assert!(calls.contains(&EngineCall::SetBumpAnimation {
            mesh: water.mesh(),
            enabled: true,
            speed: [0.5, 0.5],
        }));
    }

    #[test]
    fn test_surface_creation_failure_is_fatal() {
        let mut engine = HeadlessEngine::new();
        engine.fail_surface_creation = true;
        let result = WaterSurfaceController::new(&mut engine, WaterConfig::default());
        assert!(matches!(result, Err(Error::Surface(_))));
    }

    #[test]
    fn test_begin_end_pairs_record_in_order() {
        let mut engine = HeadlessEngine::new();
        let mut water = new_controller(&mut engine);
        engine.take_calls();

        water.begin_reflect().unwrap();
        water.end_reflect().unwrap();
        water.begin_refract().unwrap();
        water.end_refract().unwrap();
        water.render(&mut engine);

        assert_eq!(
            engine.calls(),
            vec![
                EngineCall::SurfaceStart(water.reflect_texture()),
                EngineCall::SurfaceEnd(water.reflect_texture()),
                EngineCall::SurfaceStart(water.refract_texture()),
                EngineCall::SurfaceEnd(water.refract_texture()),
                EngineCall::RenderMesh(water.mesh()),
            ]
        );
    }

    #[test]
    fn test_end_without_begin_is_contract_error() {
        let mut engine = HeadlessEngine::new();
        let mut water = new_controller(&mut engine);

        assert!(matches!(water.end_reflect(), Err(Error::Surface(_))));
        assert!(matches!(water.end_refract(), Err(Error::Surface(_))));
    }

    #[test]
    fn test_begin_twice_is_contract_error() {
        let mut engine = HeadlessEngine::new();
        let mut water = new_controller(&mut engine);

        water.begin_reflect().unwrap();
        assert!(matches!(water.begin_reflect(), Err(Error::Surface(_))));
        water.end_reflect().unwrap();

        // Pairing recovers after the error
        water.begin_reflect().unwrap();
        water.end_reflect().unwrap();
    }

    #[test]
    fn test_render_without_captures_is_valid() {
        let mut engine = HeadlessEngine::new();
        let water = new_controller(&mut engine);
        engine.take_calls();

        // Stale-content render: allowed, draws the mesh regardless
        water.render(&mut engine);
        assert_eq!(engine.calls(), vec![EngineCall::RenderMesh(water.mesh())]);
    }
}
