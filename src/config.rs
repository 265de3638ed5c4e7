//! Sandbox configuration. Every section uses `#[serde(default)]` so a
//! partial JSON file only overrides what it names.

use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::{Projection, DEFAULT_FAR_PLANE, DEFAULT_NEAR_PLANE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Sandbox".to_string(),
            width: 1366,
            height: 768,
        }
    }
}

/// Initial projection and pose of the sandbox camera
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Orthographic zoom, or vertical field of view in radians.
    /// None keeps the controller's own default.
    pub zoom_or_fov: Option<f32>,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
}

impl CameraConfig {
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            zoom_or_fov: None,
            near: DEFAULT_NEAR_PLANE,
            far: DEFAULT_FAR_PLANE,
            position: [0.0, 0.0, 1.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Frame delta used until the first clock tick
    pub delta: f32,
    pub translation_speed: f32,
    pub rotation_speed: f32,
    /// Perspective only
    pub mouse_sensitivity: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            delta: 1.0,
            translation_speed: 1.5,
            rotation_speed: 5.0,
            mouse_sensitivity: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    pub window: WindowConfig,
    pub projection: Projection,
    pub camera: CameraConfig,
    pub controller: ControllerConfig,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            projection: Projection::Orthographic,
            camera: CameraConfig::default(),
            controller: ControllerConfig::default(),
        }
    }
}

impl SandboxConfig {
    /// Load config from a JSON file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = SandboxConfig::from_json_str("{}").unwrap();
        assert_eq!(config, SandboxConfig::default());
        assert_eq!(config.projection, Projection::Orthographic);
        assert_eq!(config.camera.position(), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let json = r#"{ "projection": "perspective", "controller": { "translation_speed": 3.0 } }"#;
        let config = SandboxConfig::from_json_str(json).unwrap();

        assert_eq!(config.projection, Projection::Perspective);
        assert_eq!(config.controller.translation_speed, 3.0);
        assert_eq!(config.controller.rotation_speed, 5.0);
        assert_eq!(config.window.width, 1366);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(SandboxConfig::from_json_str("{ \"projection\": \"fisheye\" }").is_err());
        assert!(SandboxConfig::from_json_str("not json").is_err());
    }

    #[test]
    fn test_load_missing_file_mentions_path() {
        let path = Path::new("/nonexistent/peridot/sandbox.json");
        let err = SandboxConfig::load(path).unwrap_err();
        assert!(format!("{:#}", err).contains("sandbox.json"));
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("peridot-config-{}.json", std::process::id()));
        let mut config = SandboxConfig::default();
        config.window.title = "Fly".to_string();
        config.camera.position = [1.0, 2.0, 3.0];
        std::fs::write(&path, config.to_json_string().unwrap()).unwrap();

        let loaded = SandboxConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, config);
    }
}
