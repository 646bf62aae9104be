//! Daybreak - headless day-cycle demo
//!
//! Drives one full in-game day through the atmosphere model and water
//! controller against the headless engine, logging the sky state as it
//! evolves. Drop a `daybreak.json` next to the binary to override the
//! default configuration.

use glam::Vec3;

use daybreak::atmosphere::{AtmosphereConfig, AtmosphereModel};
use daybreak::core::logging;
use daybreak::core::types::Result;
use daybreak::engine::headless::HeadlessEngine;
use daybreak::motion::SpeedTracker;
use daybreak::water::{WaterConfig, WaterSurfaceController};

const CONFIG_PATH: &str = "daybreak.json";
const FRAME_MS: u64 = 16;

fn main() -> Result<()> {
    logging::init();

    let config = match AtmosphereConfig::load(CONFIG_PATH) {
        Ok(config) => {
            log::info!("loaded {CONFIG_PATH}");
            config
        }
        Err(_) => AtmosphereConfig::default(),
    };

    // Real frames needed to sweep one full in-game day
    let real_day_ms = (config.day_length_ms as f64 / config.time_scale) as u64;
    let frames = real_day_ms / FRAME_MS + 1;
    log::info!(
        "simulating one day: {} frames of {}ms at {}x time scale",
        frames,
        FRAME_MS,
        config.time_scale
    );

    let mut engine = HeadlessEngine::new();
    let mut atmosphere = AtmosphereModel::new(&mut engine, config)?;
    let mut water = WaterSurfaceController::new(&mut engine, WaterConfig::default())?;
    let mut tracker = SpeedTracker::new();

    for frame in 0..frames {
        atmosphere.update(FRAME_MS);

        // Capture passes wrap the host's scene re-renders; headless
        // here, so the blocks are empty.
        water.begin_reflect()?;
        water.end_reflect()?;
        water.begin_refract()?;
        water.end_refract()?;

        atmosphere.render(&mut engine)?;
        water.render(&mut engine);

        // A camera drifting east at a steady 4 units/sec
        let t = frame as f32 * FRAME_MS as f32 / 1000.0;
        let camera = Vec3::new(4.0 * t, 90.0, 0.0);
        let speed = tracker.calculate_speed(camera, FRAME_MS as f32);

        if frame % 4500 == 0 {
            let state = atmosphere.state();
            log::info!(
                "{:>5.2}h  sun y {:>7.1}  alpha {:.3}  brightness {:.3}  camera speed {:.1}",
                atmosphere.clock().hour(),
                state.sun_position[1],
                state.day_alpha,
                state.brightness,
                speed
            );
        }

        // The headless engine records every call; drain per frame
        engine.take_calls();
    }

    log::info!(
        "day complete: {} in-game days elapsed",
        atmosphere.clock().day_count()
    );
    Ok(())
}
