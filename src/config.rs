//! Scene configuration
//!
//! Optional overrides read from `scene.json` in the platform config directory:
//! - macOS: ~/Library/Application Support/bevysolar/
//! - Linux: ~/.config/bevysolar/
//! - Windows: %APPDATA%\bevysolar\config\
//!
//! Every field has a default, so a partial file only overrides what it names.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "scene.json";

#[derive(Resource, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub camera: CameraConfig,
    pub lighting: LightingConfig,
    pub star: StarConfig,
    pub skybox: SkyboxConfig,
    pub audio: AudioConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    pub initial_position: [f32; 3],
    pub min_distance: f32,
    pub max_distance: f32,
    /// PanOrbit smoothing in `[0, 1)`; higher values glide longer.
    pub smoothness: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_deg: 35.0,
            near: 0.1,
            far: 800_000.0,
            initial_position: [10_000.0, 10_000.0, -50_000.0],
            min_distance: 0.5,
            max_distance: 600_000.0,
            smoothness: 0.8,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    pub ambient_brightness: f32,
    /// Point light at the star, in lumens.
    pub sun_intensity: f32,
    pub sun_range: f32,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient_brightness: 300.0,
            sun_intensity: 5.0e12,
            sun_range: 800_000.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarConfig {
    pub scale: f32,
    /// Radians per frame.
    pub spin_per_frame: f32,
}

impl Default for StarConfig {
    fn default() -> Self {
        Self {
            scale: 1000.0,
            spin_per_frame: 0.001,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkyboxConfig {
    pub enabled: bool,
    /// Six faces stacked vertically in one PNG.
    pub path: String,
    pub brightness: f32,
}

impl Default for SkyboxConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "textures/cube-map/skybox.png".to_string(),
            brightness: 500.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub enabled: bool,
    pub path: String,
    /// Linear volume in `[0, 1]`.
    pub volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "audio/audio.mp3".to_string(),
            volume: 0.5,
        }
    }
}

impl SceneConfig {
    /// Location of `scene.json` for this platform.
    pub fn default_path() -> anyhow::Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("", "", "bevysolar")
            .ok_or_else(|| anyhow::anyhow!("Failed to resolve config directory"))?;
        Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Read a config file. Returns Ok(None) if the file doesn't exist.
    pub fn load_from_path(path: &Path) -> anyhow::Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(Some(config))
    }

    /// Load from the platform config directory, falling back to defaults.
    pub fn load_or_default() -> Self {
        let path = match Self::default_path() {
            Ok(path) => path,
            Err(err) => {
                warn!("Scene config: {err}; using defaults");
                return Self::default();
            }
        };
        match Self::load_from_path(&path) {
            Ok(Some(config)) => {
                info!("Scene config loaded from {}", path.display());
                config
            }
            Ok(None) => {
                info!("No scene config at {}; using defaults", path.display());
                Self::default()
            }
            Err(err) => {
                warn!("Scene config: {err:#}; using defaults");
                Self::default()
            }
        }
    }
}

/// Plugin that loads [`SceneConfig`] unless one was already inserted
pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<SceneConfig>() {
            app.insert_resource(SceneConfig::load_or_default());
        }
    }
}
