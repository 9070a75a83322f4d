//! Per-frame data model.
//!
//! Every value here is a snapshot: the authoring layer rebuilds it each frame
//! and the raymarching core only ever reads it.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::SceneError;

/// Linear or display-space RGB triple, depending on where it sits in the pipeline.
pub type Color = Vector3<f64>;

/// Shape selector for a [`PrimitiveDescriptor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    Sphere,
    Box,
    Cylinder,
    Torus,
}

/// One placed primitive.
///
/// `scale` doubles as the shape parameters:
/// - `Sphere`: `scale.x` is the radius.
/// - `Box`: `scale` holds the half-extents.
/// - `Cylinder`: `scale.x` is the radius, `scale.y` the half-height (axis = local Y).
/// - `Torus`: `scale.x` is the major radius, `scale.y` the minor radius (axis = local Y).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimitiveDescriptor {
    pub kind: PrimitiveKind,
    pub position: Vector3<f64>,
    /// Euler angles in degrees, applied intrinsically X then Y then Z.
    pub rotation_euler: Vector3<f64>,
    pub scale: Vector3<f64>,
    pub enabled: bool,
}

impl Default for PrimitiveDescriptor {
    fn default() -> Self {
        Self {
            kind: PrimitiveKind::Sphere,
            position: Vector3::zeros(),
            rotation_euler: Vector3::zeros(),
            scale: Vector3::new(1.0, 1.0, 1.0),
            enabled: true,
        }
    }
}

impl PrimitiveDescriptor {
    pub fn sphere(position: Vector3<f64>, radius: f64) -> Self {
        Self {
            kind: PrimitiveKind::Sphere,
            position,
            scale: Vector3::new(radius, radius, radius),
            ..Self::default()
        }
    }

    pub fn cuboid(position: Vector3<f64>, half_extents: Vector3<f64>) -> Self {
        Self {
            kind: PrimitiveKind::Box,
            position,
            scale: half_extents,
            ..Self::default()
        }
    }

    pub fn cylinder(position: Vector3<f64>, radius: f64, half_height: f64) -> Self {
        Self {
            kind: PrimitiveKind::Cylinder,
            position,
            scale: Vector3::new(radius, half_height, radius),
            ..Self::default()
        }
    }

    pub fn torus(position: Vector3<f64>, major_radius: f64, minor_radius: f64) -> Self {
        Self {
            kind: PrimitiveKind::Torus,
            position,
            scale: Vector3::new(major_radius, minor_radius, major_radius),
            ..Self::default()
        }
    }

    /// Same primitive with the given Euler rotation (degrees).
    pub fn rotated(mut self, rotation_euler: Vector3<f64>) -> Self {
        self.rotation_euler = rotation_euler;
        self
    }

    /// Same primitive, switched off.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    fn validate(&self, index: usize) -> Result<(), SceneError> {
        let fields = [
            ("position", &self.position),
            ("rotation", &self.rotation_euler),
            ("scale", &self.scale),
        ];
        for (field, v) in fields {
            if !is_finite(v) {
                return Err(SceneError::NonFinitePrimitive { index, field });
            }
        }
        Ok(())
    }
}

/// The full primitive list plus the global blend and rotation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Blend order is index order.
    pub primitives: Vec<PrimitiveDescriptor>,
    /// Smooth-union radius `k`.
    pub global_smooth_factor: f64,
    /// Whole-scene rotation in degrees.
    pub scene_rotation_euler: Vector3<f64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            primitives: Vec::new(),
            global_smooth_factor: 0.5,
            scene_rotation_euler: Vector3::zeros(),
        }
    }
}

impl SceneConfig {
    pub fn new(primitives: Vec<PrimitiveDescriptor>, global_smooth_factor: f64) -> Self {
        Self { primitives, global_smooth_factor, ..Self::default() }
    }

    pub fn with_rotation(mut self, scene_rotation_euler: Vector3<f64>) -> Self {
        self.scene_rotation_euler = scene_rotation_euler;
        self
    }

    /// Number of primitives that take part in the union.
    pub fn enabled_count(&self) -> usize {
        self.primitives.iter().filter(|p| p.enabled).count()
    }

    /// Reject non-finite primitive data, a non-finite rotation, or a
    /// smooth factor that is not strictly positive.
    pub fn validate(&self) -> Result<(), SceneError> {
        for (index, prim) in self.primitives.iter().enumerate() {
            prim.validate(index)?;
        }
        if !is_finite(&self.scene_rotation_euler) {
            return Err(SceneError::NonFiniteSceneRotation);
        }
        let k = self.global_smooth_factor;
        if !(k.is_finite() && k > 0.0) {
            return Err(SceneError::InvalidSmoothFactor(k));
        }
        Ok(())
    }
}

/// Termination controls shared by the raymarch, shadow and AO loops.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RayMarchSettings {
    pub max_steps: u32,
    pub max_distance: f64,
    pub surface_distance_epsilon: f64,
    /// Finite-difference offset for normals. Larger values give smoother
    /// normals across blend seams at the cost of detail; 1e-3..1e-2 is the
    /// useful range.
    pub normal_epsilon: f64,
}

impl Default for RayMarchSettings {
    fn default() -> Self {
        Self {
            max_steps: 100,
            max_distance: 100.0,
            surface_distance_epsilon: 0.01,
            normal_epsilon: 0.01,
        }
    }
}

impl RayMarchSettings {
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.max_steps == 0 {
            return Err(SceneError::InvalidSettings("max_steps must be at least 1"));
        }
        if !(self.max_distance.is_finite() && self.max_distance > 0.0) {
            return Err(SceneError::InvalidSettings("max_distance must be positive"));
        }
        if !(self.surface_distance_epsilon.is_finite() && self.surface_distance_epsilon > 0.0) {
            return Err(SceneError::InvalidSettings("surface_distance_epsilon must be positive"));
        }
        if !(self.normal_epsilon.is_finite() && self.normal_epsilon > 0.0) {
            return Err(SceneError::InvalidSettings("normal_epsilon must be positive"));
        }
        Ok(())
    }
}

/// Light and surface response parameters for the shading model.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    pub light_position: Vector3<f64>,
    pub light_color: Color,
    pub light_intensity: f64,
    pub ambient_color: Color,
    pub specular_power: f64,
    pub specular_intensity: f64,
    /// Depth of full shadow, in [0, 1]. Shadowed areas never drop below `1 - shadow_intensity`.
    pub shadow_intensity: f64,
    /// Penumbra sharpness; higher is harder.
    pub shadow_softness: f64,
    pub fresnel_power: f64,
    pub fresnel_intensity: f64,
    pub ao_steps: u32,
    pub ao_intensity: f64,
    pub ao_radius: f64,
    pub shadows_enabled: bool,
    pub ambient_occlusion_enabled: bool,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            light_position: Vector3::new(4.0, 6.0, 5.0),
            light_color: Vector3::new(1.0, 0.96, 0.9),
            light_intensity: 1.0,
            ambient_color: Vector3::new(0.12, 0.13, 0.16),
            specular_power: 32.0,
            specular_intensity: 0.5,
            shadow_intensity: 0.8,
            shadow_softness: 8.0,
            fresnel_power: 5.0,
            fresnel_intensity: 0.25,
            ao_steps: 5,
            ao_intensity: 1.0,
            ao_radius: 0.3,
            shadows_enabled: true,
            ambient_occlusion_enabled: true,
        }
    }
}

impl LightingConfig {
    pub fn validate(&self) -> Result<(), SceneError> {
        if !is_finite(&self.light_position) {
            return Err(SceneError::InvalidLighting("light_position must be finite"));
        }
        if !(0.0..=1.0).contains(&self.shadow_intensity) {
            return Err(SceneError::InvalidLighting("shadow_intensity must lie in [0, 1]"));
        }
        if !(self.ao_intensity.is_finite() && self.ao_intensity >= 0.0) {
            return Err(SceneError::InvalidLighting("ao_intensity must be non-negative"));
        }
        if !(self.ao_radius.is_finite() && self.ao_radius >= 0.0) {
            return Err(SceneError::InvalidLighting("ao_radius must be non-negative"));
        }
        if !(self.shadow_softness.is_finite() && self.shadow_softness > 0.0) {
            return Err(SceneError::InvalidLighting("shadow_softness must be positive"));
        }
        Ok(())
    }
}

/// Outcome of marching one ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayMarchResult {
    pub hit: bool,
    pub distance_traveled: f64,
    pub hit_point: Vector3<f64>,
}

pub(crate) fn is_finite(v: &Vector3<f64>) -> bool {
    v.iter().all(|c| c.is_finite())
}
