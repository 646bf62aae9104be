//! Atmosphere configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::atmosphere::orbit::OrbitConfig;
use crate::atmosphere::skybox::SkyboxPaths;
use crate::core::clock::MILLISEC_PER_DAY;
use crate::core::error::Error;
use crate::core::types::Result;

/// Full atmosphere configuration with tuned defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AtmosphereConfig {
    /// Cycle milliseconds per in-game day.
    pub day_length_ms: u64,
    /// Real-to-cycle time multiplier. 72.0 compresses a full day into
    /// 20 real minutes.
    pub time_scale: f64,
    /// Starting time-of-day in cycle milliseconds.
    pub start_time_ms: u64,
    /// Sun orbit shape.
    pub orbit: OrbitConfig,
    /// Sun billboard size in world units.
    pub sun_billboard_size: f32,
    /// Day skybox face paths.
    pub day_sky: SkyboxPaths,
    /// Night skybox face paths.
    pub night_sky: SkyboxPaths,
    /// Sun billboard texture path.
    pub sun_texture: String,
}

impl Default for AtmosphereConfig {
    fn default() -> Self {
        Self {
            day_length_ms: MILLISEC_PER_DAY,
            time_scale: 72.0,
            start_time_ms: 36_000_000, // 10:00
            orbit: OrbitConfig::default(),
            sun_billboard_size: 2.0,
            day_sky: SkyboxPaths::from_dir("media/sky/lostvalley", "lostvalley", "bmp"),
            night_sky: SkyboxPaths {
                up: "media/sky/clearnight/up.jpg".into(),
                down: "media/sky/clearnight/down.jpg".into(),
                left: "media/sky/clearnight/left.jpg".into(),
                right: "media/sky/clearnight/right.jpg".into(),
                front: "media/sky/clearnight/front.jpg".into(),
                back: "media/sky/clearnight/back.jpg".into(),
            },
            sun_texture: "media/sky/sun.jpg".into(),
        }
    }
}

impl AtmosphereConfig {
    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Save to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_full_day_at_ten() {
        let config = AtmosphereConfig::default();
        assert_eq!(config.day_length_ms, MILLISEC_PER_DAY);
        assert_eq!(config.start_time_ms, 36_000_000);
        assert_eq!(config.orbit.y_offset, 200);
    }

    #[test]
    fn test_json_round_trip() {
        let config = AtmosphereConfig::default();
        let json = config.to_json().unwrap();
        let back = AtmosphereConfig::from_json(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atmosphere.json");

        let mut config = AtmosphereConfig::default();
        config.orbit.y_offset = 350;
        config.save(&path).unwrap();

        let back = AtmosphereConfig::load(&path).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = AtmosphereConfig::from_json("{ nope").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
