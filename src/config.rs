//! JSON frame description for the command-line renderer.
//!
//! Every field has a default, so `{}` is a valid config and renders the demo
//! scene.

use std::path::Path;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::error::{ConfigError, SceneError};
use crate::render::Frame;
use crate::shading::Fog;
use crate::types::{Color, LightingConfig, PrimitiveDescriptor, RayMarchSettings, SceneConfig};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { width: 640, height: 360 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    pub scene: SceneConfig,
    pub lighting: LightingConfig,
    pub settings: RayMarchSettings,
    pub camera: Camera,
    pub output: OutputConfig,
    pub background: Color,
    pub fog: Fog,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            scene: demo_scene(),
            lighting: LightingConfig::default(),
            settings: RayMarchSettings::default(),
            camera: Camera::default(),
            output: OutputConfig::default(),
            background: Vector3::new(0.05, 0.06, 0.08),
            fog: Fog::default(),
        }
    }
}

impl FrameConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: FrameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        self.scene.validate()?;
        self.settings.validate()?;
        self.lighting.validate()?;
        self.camera.validate()?;
        let OutputConfig { width, height } = self.output;
        if width == 0 || height == 0 {
            return Err(SceneError::InvalidOutputSize { width, height });
        }
        Ok(())
    }

    /// Snapshot the scene for rendering.
    pub fn frame(&self) -> Result<Frame, SceneError> {
        Ok(Frame::new(&self.scene, &self.settings, &self.lighting)?
            .with_background(self.background)
            .with_fog(self.fog))
    }
}

/// Sphere, tilted box and torus blended together on a flat pedestal.
pub fn demo_scene() -> SceneConfig {
    SceneConfig::new(
        vec![
            PrimitiveDescriptor::sphere(Vector3::zeros(), 1.0),
            PrimitiveDescriptor::cuboid(Vector3::new(1.6, 0.0, 0.0), Vector3::new(0.6, 0.6, 0.6))
                .rotated(Vector3::new(0.0, 30.0, 15.0)),
            PrimitiveDescriptor::torus(Vector3::new(-1.6, 0.0, 0.0), 0.8, 0.25)
                .rotated(Vector3::new(60.0, 0.0, 0.0)),
            PrimitiveDescriptor::cylinder(Vector3::new(0.0, -1.4, 0.0), 3.0, 0.2),
        ],
        0.3,
    )
}
