//! Time-of-day atmosphere model.
//!
//! Drives the day/night sky and its directional lighting. The main entry
//! point is [`AtmosphereModel`]: advance it with [`update`](AtmosphereModel::update)
//! each frame, then call [`render`](AtmosphereModel::render) to issue the
//! skybox draw sequence and rewrite the sun/moon lights. The computed
//! per-frame values are exposed as an [`AtmosphereState`] (CPU-side) and
//! [`AtmosphereUniform`] (GPU-ready buffer).

pub mod config;
pub mod light;
pub mod orbit;
pub mod skybox;
pub mod state;

// Re-exports
pub use config::AtmosphereConfig;
pub use orbit::{OrbitConfig, SUN_ORBIT_RADIUS};
pub use skybox::{SkyboxFaces, SkyboxPaths, SkyboxSet};
pub use state::{AtmosphereState, AtmosphereUniform};

use glam::Vec3;

use crate::core::clock::DayClock;
use crate::core::types::{Result, Rgba};
use crate::engine::light::{LightDescriptor, LightHandle};
use crate::engine::Engine;

// ---------------------------------------------------------------------------
// AtmosphereModel
// ---------------------------------------------------------------------------

/// Converts a time-of-day sample into the frame's sky draws and
/// directional-light parameters.
///
/// Frame contract: call [`update`](Self::update) before
/// [`render`](Self::render) so the frame renders the current time.
/// `render` itself is a pure function of time-of-day and the orbit
/// configuration; repeated calls without an intervening `update`
/// produce identical output.
pub struct AtmosphereModel {
    config: AtmosphereConfig,
    clock: DayClock,
    skybox: SkyboxSet,
    sun_light: LightHandle,
    moon_light: LightHandle,
    state: AtmosphereState,
}

impl AtmosphereModel {
    /// Load the sky textures and create the sun/moon lights.
    ///
    /// Any resource failure here is fatal to construction; there is no
    /// degraded sky.
    pub fn new(engine: &mut dyn Engine, config: AtmosphereConfig) -> Result<Self> {
        let skybox = SkyboxSet::load(
            &mut *engine,
            &config.day_sky,
            &config.night_sky,
            &config.sun_texture,
        )?;

        engine.sun_set_texture(skybox.sun);
        engine.sun_set_billboard_size(config.sun_billboard_size);
        engine.sun_enable(true);

        let sun_light = engine.create_light(
            &LightDescriptor::directional(
                Vec3::new(1.0, -1.0, 0.0),
                Rgba::BLACK,
                Rgba::WHITE,
                Rgba::WHITE,
            ),
            "sun",
        )?;
        let moon_light = engine.create_light(
            &LightDescriptor::directional(
                Vec3::new(1.0, -1.0, 0.0),
                Rgba::new(0.2, 0.2, 0.2, 1.0),
                Rgba::new(0.2, 0.2, 0.2, 1.0),
                Rgba::new(0.2, 0.2, 0.2, 1.0),
            ),
            "moon",
        )?;

        let clock = DayClock::new(config.start_time_ms, config.day_length_ms, config.time_scale);
        let state = AtmosphereState::compute(
            clock.time_of_day(),
            clock.day_length(),
            clock.day_count(),
            &config.orbit,
        );

        log::info!(
            "atmosphere initialized: day length {}ms, orbit radius {}, y offset {}",
            config.day_length_ms,
            config.orbit.radius,
            config.orbit.y_offset
        );

        Ok(Self {
            config,
            clock,
            skybox,
            sun_light,
            moon_light,
            state,
        })
    }

    /// Advance the clock by `elapsed_ms` real milliseconds.
    pub fn update(&mut self, elapsed_ms: u64) {
        self.clock.advance(elapsed_ms);
    }

    /// Recompute the sky state for the current time-of-day, draw the
    /// skybox layers and sun billboard, and rewrite both lights.
    pub fn render(&mut self, engine: &mut dyn Engine) -> Result<()> {
        self.state = AtmosphereState::compute(
            self.clock.time_of_day(),
            self.clock.day_length(),
            self.clock.day_count(),
            &self.config.orbit,
        );
        let state = &self.state;

        // Night layer first, fully opaque; the day layer then
        // alpha-composites over it as the sun rises.
        engine.skybox_enable(true);
        let night = &self.skybox.night;
        engine.skybox_set_textures(
            night.front,
            night.back,
            night.left,
            night.right,
            night.up,
            night.down,
        );
        engine.skybox_set_color(Rgba::WHITE);
        engine.skybox_render();

        let day = &self.skybox.day;
        engine.skybox_set_textures(day.front, day.back, day.left, day.right, day.up, day.down);
        engine.skybox_set_color(Rgba::opacity(state.day_alpha));
        engine.skybox_render();

        engine.sun_set_position(Vec3::from(state.sun_position));

        engine.skybox_enable(false);
        engine.atmosphere_render();

        engine.set_light(self.sun_light, &state.sun_light)?;
        engine.set_light(self.moon_light, &state.moon_light)?;

        Ok(())
    }

    /// Sky state computed by the most recent [`render`](Self::render).
    #[inline]
    pub fn state(&self) -> &AtmosphereState {
        &self.state
    }

    /// Build a GPU-ready uniform from the current state.
    pub fn uniform(&self) -> AtmosphereUniform {
        AtmosphereUniform::from(&self.state)
    }

    #[inline]
    pub fn config(&self) -> &AtmosphereConfig {
        &self.config
    }

    #[inline]
    pub fn clock(&self) -> &DayClock {
        &self.clock
    }

    /// Jump the clock to a specific time-of-day.
    pub fn set_time_of_day(&mut self, ms: u64) {
        self.clock.set_time_of_day(ms);
    }

    #[inline]
    pub fn sun_orbit_y_offset(&self) -> i32 {
        self.config.orbit.y_offset
    }

    /// Raise or lower the orbit centre. Takes effect on the next
    /// [`render`](Self::render); state already computed is untouched.
    pub fn set_sun_orbit_y_offset(&mut self, offset: i32) {
        log::debug!("sun orbit y offset {} -> {}", self.config.orbit.y_offset, offset);
        self.config.orbit.y_offset = offset;
    }

    #[inline]
    pub fn skybox(&self) -> &SkyboxSet {
        &self.skybox
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    use crate::core::clock::MILLISEC_PER_DAY;
    use crate::engine::headless::{EngineCall, HeadlessEngine};
    use crate::engine::light::LightEngine;

    fn unscaled_config() -> AtmosphereConfig {
        AtmosphereConfig {
            time_scale: 1.0,
            start_time_ms: 0,
            ..Default::default()
        }
    }

    fn new_model(engine: &mut HeadlessEngine) -> AtmosphereModel {
        AtmosphereModel::new(engine, unscaled_config()).unwrap()
    }

    #[test]
    fn test_construction_loads_resources() {
        let mut engine = HeadlessEngine::new();
        let model = new_model(&mut engine);
        let calls = engine.calls();

        let texture_loads = calls
            .iter()
            .filter(|c| matches!(c, EngineCall::LoadTexture { .. }))
            .count();
        assert_eq!(texture_loads, 13);

        let light_labels: Vec<_> = calls
            .iter()
            .filter_map(|c| match c {
                EngineCall::CreateLight { label, .. } => Some(label.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(light_labels, ["sun", "moon"]);

        assert!(calls.contains(&EngineCall::SunSetTexture(model.skybox().sun)));
        assert!(calls.contains(&EngineCall::SunSetBillboardSize(2.0)));
        assert!(calls.contains(&EngineCall::SunEnable(true)));
    }

    #[test]
    fn test_render_sequence_is_night_then_day() {
        let mut engine = HeadlessEngine::new();
        let mut model = new_model(&mut engine);
        engine.take_calls();

        model.update(1000);
        model.render(&mut engine).unwrap();

        let night = model.skybox().night;
        let day = model.skybox().day;
        let state = model.state().clone();
        let expected = vec![
            EngineCall::SkyboxEnable(true),
            EngineCall::SkyboxSetTextures([
                night.front,
                night.back,
                night.left,
                night.right,
                night.up,
                night.down,
            ]),
            EngineCall::SkyboxSetColor(Rgba::WHITE),
            EngineCall::SkyboxRender,
            EngineCall::SkyboxSetTextures([
                day.front, day.back, day.left, day.right, day.up, day.down,
            ]),
            EngineCall::SkyboxSetColor(Rgba::opacity(state.day_alpha)),
            EngineCall::SkyboxRender,
            EngineCall::SunSetPosition(Vec3::from(state.sun_position)),
            EngineCall::SkyboxEnable(false),
            EngineCall::AtmosphereRender,
            EngineCall::SetLight(LightHandle(0)),
            EngineCall::SetLight(LightHandle(1)),
        ];
        assert_eq!(engine.calls(), expected);
    }

    #[test]
    fn test_render_is_idempotent_without_update() {
        let mut engine = HeadlessEngine::new();
        let mut model = new_model(&mut engine);
        model.update(5_000);

        model.render(&mut engine).unwrap();
        let first = model.state().clone();
        let first_sun = engine.light(LightHandle(0)).unwrap();

        model.render(&mut engine).unwrap();
        assert_eq!(*model.state(), first);
        assert_eq!(engine.light(LightHandle(0)).unwrap(), first_sun);
    }

    #[test]
    fn test_update_moves_time_forward() {
        let mut engine = HeadlessEngine::new();
        let mut model = new_model(&mut engine);

        model.update(2_500);
        model.render(&mut engine).unwrap();
        assert_eq!(model.state().time_of_day, 2_500);
    }

    #[test]
    fn test_lights_written_match_state() {
        let mut engine = HeadlessEngine::new();
        let mut model = new_model(&mut engine);

        // Mid-morning: sun well above the horizon
        model.set_time_of_day(MILLISEC_PER_DAY * 3 / 8);
        model.render(&mut engine).unwrap();

        let sun = engine.light(LightHandle(0)).unwrap();
        assert_eq!(sun, model.state().sun_light);
        let moon = engine.light(LightHandle(1)).unwrap();
        assert_eq!(moon, model.state().moon_light);

        // Achromatic invariant on what actually reached the engine
        assert_eq!(sun.diffuse.r, sun.diffuse.g);
        assert_eq!(sun.diffuse.b, sun.diffuse.a);
        assert_eq!(sun.diffuse, sun.specular);
    }

    #[test]
    fn test_zenith_alpha_is_one() {
        let mut engine = HeadlessEngine::new();
        let mut model = new_model(&mut engine);

        model.set_time_of_day(MILLISEC_PER_DAY / 2);
        model.render(&mut engine).unwrap();
        assert_eq!(model.state().day_alpha, 1.0);
        assert!(model.state().brightness > 0.99);
    }

    #[test]
    fn test_y_offset_setter_affects_next_render_only() {
        let mut engine = HeadlessEngine::new();
        let mut model = new_model(&mut engine);

        model.set_time_of_day(MILLISEC_PER_DAY / 8);
        model.render(&mut engine).unwrap();
        let before = model.state().clone();

        model.set_sun_orbit_y_offset(450);
        // Nothing recomputed yet
        assert_eq!(*model.state(), before);

        model.render(&mut engine).unwrap();
        let after = model.state().clone();
        assert_ne!(after.sun_position[1], before.sun_position[1]);
        assert!((after.sun_position[1] - before.sun_position[1] - 250.0).abs() < 1e-3);
    }
}
