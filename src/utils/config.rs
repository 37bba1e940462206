//! Optional settings overlay loaded from `settings.toml` on native builds.

use bevy::prelude::*;
use serde::Deserialize;

use crate::utils::constants::camera_3d_constants::{
    CAMERA_3D_DRAG_SENSITIVITY, CAMERA_3D_MAX_RADIUS, CAMERA_3D_MIN_RADIUS,
    CAMERA_3D_ORBIT_SPEED, CAMERA_3D_ZOOM_SPEED,
};
use crate::utils::constants::game_constants::ROTATION_DURATION_SECS;

#[cfg(not(target_arch = "wasm32"))]
use crate::log;

#[cfg(not(target_arch = "wasm32"))]
const SETTINGS_PATH: &str = "settings.toml";

/// Camera tuning, overridable from the settings file.
#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct CameraConfig {
    pub orbit_speed: f32,
    pub zoom_speed: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub drag_sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            orbit_speed: CAMERA_3D_ORBIT_SPEED,
            zoom_speed: CAMERA_3D_ZOOM_SPEED,
            min_radius: CAMERA_3D_MIN_RADIUS,
            max_radius: CAMERA_3D_MAX_RADIUS,
            drag_sensitivity: CAMERA_3D_DRAG_SENSITIVITY,
        }
    }
}

/// Game settings resource. Compiled-in defaults come from the constants
/// module; on native builds a `settings.toml` next to the binary can
/// override them. Wasm builds always use the defaults.
#[derive(Resource, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct GameConfig {
    pub rotation_duration_secs: f32,
    pub camera: CameraConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rotation_duration_secs: ROTATION_DURATION_SECS,
            camera: CameraConfig::default(),
        }
    }
}

impl GameConfig {
    /// Load settings, falling back to defaults when the file is missing
    /// or malformed.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match std::fs::read_to_string(SETTINGS_PATH) {
            Ok(raw) => match toml::from_str(&raw) {
                Ok(config) => config,
                Err(err) => {
                    log!("settings.toml ignored (parse error: {err})");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = GameConfig::default();
        assert!((config.rotation_duration_secs - ROTATION_DURATION_SECS).abs() < f32::EPSILON);
        assert!((config.camera.max_radius - CAMERA_3D_MAX_RADIUS).abs() < f32::EPSILON);
    }

    #[test]
    fn partial_settings_file_keeps_defaults_elsewhere() {
        let config: GameConfig = toml::from_str("rotation_duration_secs = 0.5").unwrap();
        assert!((config.rotation_duration_secs - 0.5).abs() < f32::EPSILON);
        assert!((config.camera.orbit_speed - CAMERA_3D_ORBIT_SPEED).abs() < f32::EPSILON);
    }

    #[test]
    fn camera_section_overrides() {
        let config: GameConfig = toml::from_str("[camera]\nmax_radius = 30.0").unwrap();
        assert!((config.camera.max_radius - 30.0).abs() < f32::EPSILON);
        assert!((config.rotation_duration_secs - ROTATION_DURATION_SECS).abs() < f32::EPSILON);
    }
}
