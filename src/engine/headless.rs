//! Headless engine backing for tests and the demo driver.
//!
//! Implements every collaborator contract without touching a GPU. Each
//! call is appended to a shared log so callers can assert frame ordering
//! (night skybox before day skybox, lights rewritten after the draws).

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use glam::Vec3;

use crate::core::error::Error;
use crate::core::types::{ClipPlane, Result, Rgba};
use crate::engine::effects::GraphicEffects;
use crate::engine::light::{LightDescriptor, LightEngine, LightHandle};
use crate::engine::scene::{MeshHandle, SceneRenderer, WaterMeshDesc};
use crate::engine::surface::RenderSurface;
use crate::engine::texture::{ColorKeyMode, TextureHandle, TextureProvider};

/// One recorded collaborator call.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineCall {
    LoadTexture { label: String, handle: TextureHandle },
    CreateLight { label: String, handle: LightHandle },
    SetLight(LightHandle),
    SkyboxEnable(bool),
    SkyboxSetTextures([TextureHandle; 6]),
    SkyboxSetColor(Rgba),
    SkyboxRender,
    AtmosphereRender,
    SunEnable(bool),
    SunSetTexture(TextureHandle),
    SunSetBillboardSize(f32),
    SunSetPosition(Vec3),
    CreateRenderSurface(TextureHandle),
    CreateWaterMesh(MeshHandle),
    RenderMesh(MeshHandle),
    SetWaterReflection {
        mesh: MeshHandle,
        reflect: TextureHandle,
        refract: TextureHandle,
        plane: ClipPlane,
    },
    SetBumpAnimation {
        mesh: MeshHandle,
        enabled: bool,
        speed: [f32; 2],
    },
    SurfaceBackground(TextureHandle, Rgba),
    SurfaceStart(TextureHandle),
    SurfaceEnd(TextureHandle),
}

type CallLog = Rc<RefCell<Vec<EngineCall>>>;

/// A render surface that records its start/end pairing.
struct HeadlessSurface {
    texture: TextureHandle,
    active: bool,
    log: CallLog,
}

impl RenderSurface for HeadlessSurface {
    fn set_background_color(&mut self, color: Rgba) {
        self.log
            .borrow_mut()
            .push(EngineCall::SurfaceBackground(self.texture, color));
    }

    fn start_render(&mut self) -> Result<()> {
        if self.active {
            return Err(Error::Surface("start_render while already rendering".into()));
        }
        self.active = true;
        self.log.borrow_mut().push(EngineCall::SurfaceStart(self.texture));
        Ok(())
    }

    fn end_render(&mut self) -> Result<()> {
        if !self.active {
            return Err(Error::Surface("end_render without start_render".into()));
        }
        self.active = false;
        self.log.borrow_mut().push(EngineCall::SurfaceEnd(self.texture));
        Ok(())
    }

    fn texture(&self) -> TextureHandle {
        self.texture
    }
}

/// In-memory implementation of the full collaborator surface.
pub struct HeadlessEngine {
    log: CallLog,
    next_texture: u32,
    next_light: u32,
    next_mesh: u32,
    lights: HashMap<LightHandle, LightDescriptor>,
    /// When set, the next surface creation fails. For fatal-path tests.
    pub fail_surface_creation: bool,
}

impl HeadlessEngine {
    pub fn new() -> Self {
        Self {
            log: Rc::new(RefCell::new(Vec::new())),
            next_texture: 0,
            next_light: 0,
            next_mesh: 0,
            lights: HashMap::new(),
            fail_surface_creation: false,
        }
    }

    /// Snapshot of the recorded calls.
    pub fn calls(&self) -> Vec<EngineCall> {
        self.log.borrow().clone()
    }

    /// Drain the recorded calls.
    pub fn take_calls(&mut self) -> Vec<EngineCall> {
        std::mem::take(&mut *self.log.borrow_mut())
    }

    fn record(&self, call: EngineCall) {
        self.log.borrow_mut().push(call);
    }

    fn alloc_texture(&mut self) -> TextureHandle {
        let handle = TextureHandle(self.next_texture);
        self.next_texture += 1;
        handle
    }
}

impl Default for HeadlessEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextureProvider for HeadlessEngine {
    fn load_texture(
        &mut self,
        _path: &str,
        label: &str,
        _width: i32,
        _height: i32,
        _color_key: ColorKeyMode,
        _mipmaps: bool,
    ) -> Result<TextureHandle> {
        let handle = self.alloc_texture();
        self.record(EngineCall::LoadTexture {
            label: label.to_string(),
            handle,
        });
        Ok(handle)
    }

    fn load_dudv_texture(&mut self, _path: &str, label: &str, _amplitude: f32) -> Result<TextureHandle> {
        let handle = self.alloc_texture();
        self.record(EngineCall::LoadTexture {
            label: label.to_string(),
            handle,
        });
        Ok(handle)
    }
}

impl LightEngine for HeadlessEngine {
    fn create_light(&mut self, desc: &LightDescriptor, label: &str) -> Result<LightHandle> {
        let handle = LightHandle(self.next_light);
        self.next_light += 1;
        self.lights.insert(handle, *desc);
        self.record(EngineCall::CreateLight {
            label: label.to_string(),
            handle,
        });
        Ok(handle)
    }

    fn light(&self, handle: LightHandle) -> Result<LightDescriptor> {
        self.lights
            .get(&handle)
            .copied()
            .ok_or_else(|| Error::Light(format!("unknown light handle {}", handle.0)))
    }

    fn set_light(&mut self, handle: LightHandle, desc: &LightDescriptor) -> Result<()> {
        if !self.lights.contains_key(&handle) {
            return Err(Error::Light(format!("unknown light handle {}", handle.0)));
        }
        self.lights.insert(handle, *desc);
        self.record(EngineCall::SetLight(handle));
        Ok(())
    }
}

impl SceneRenderer for HeadlessEngine {
    fn skybox_enable(&mut self, enabled: bool) {
        self.record(EngineCall::SkyboxEnable(enabled));
    }

    fn skybox_set_textures(
        &mut self,
        front: TextureHandle,
        back: TextureHandle,
        left: TextureHandle,
        right: TextureHandle,
        up: TextureHandle,
        down: TextureHandle,
    ) {
        self.record(EngineCall::SkyboxSetTextures([front, back, left, right, up, down]));
    }

    fn skybox_set_color(&mut self, color: Rgba) {
        self.record(EngineCall::SkyboxSetColor(color));
    }

    fn skybox_render(&mut self) {
        self.record(EngineCall::SkyboxRender);
    }

    fn atmosphere_render(&mut self) {
        self.record(EngineCall::AtmosphereRender);
    }

    fn sun_enable(&mut self, enabled: bool) {
        self.record(EngineCall::SunEnable(enabled));
    }

    fn sun_set_texture(&mut self, texture: TextureHandle) {
        self.record(EngineCall::SunSetTexture(texture));
    }

    fn sun_set_billboard_size(&mut self, size: f32) {
        self.record(EngineCall::SunSetBillboardSize(size));
    }

    fn sun_set_position(&mut self, position: Vec3) {
        self.record(EngineCall::SunSetPosition(position));
    }

    fn create_render_surface(&mut self, _width: i32, _height: i32) -> Result<Box<dyn RenderSurface>> {
        if self.fail_surface_creation {
            return Err(Error::Surface("surface creation failed".into()));
        }
        let texture = self.alloc_texture();
        self.record(EngineCall::CreateRenderSurface(texture));
        Ok(Box::new(HeadlessSurface {
            texture,
            active: false,
            log: Rc::clone(&self.log),
        }))
    }

    fn create_water_mesh(&mut self, _desc: &WaterMeshDesc) -> Result<MeshHandle> {
        let handle = MeshHandle(self.next_mesh);
        self.next_mesh += 1;
        self.record(EngineCall::CreateWaterMesh(handle));
        Ok(handle)
    }

    fn render_mesh(&mut self, mesh: MeshHandle) {
        self.record(EngineCall::RenderMesh(mesh));
    }
}

impl GraphicEffects for HeadlessEngine {
    fn set_water_reflection(
        &mut self,
        mesh: MeshHandle,
        reflect: TextureHandle,
        refract: TextureHandle,
        plane: ClipPlane,
    ) -> Result<()> {
        self.record(EngineCall::SetWaterReflection {
            mesh,
            reflect,
            refract,
            plane,
        });
        Ok(())
    }

    fn set_bump_animation(&mut self, mesh: MeshHandle, enabled: bool, speed_x: f32, speed_y: f32) {
        self.record(EngineCall::SetBumpAnimation {
            mesh,
            enabled,
            speed: [speed_x, speed_y],
        });
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
