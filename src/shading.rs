//! Shading model: Lambert diffuse, Blinn-Phong specular, ambient with AO,
//! and a Schlick-style Fresnel rim, followed by gamma correction.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::field::SceneField;
use crate::occlusion::{ambient_occlusion, soft_shadow, SHADOW_MIN_STEP};
use crate::types::{Color, LightingConfig, RayMarchSettings};

/// Display gamma exponent (1 / 2.2).
pub const GAMMA: f64 = 1.0 / 2.2;

/// Exponential depth fog toward the background color.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fog {
    pub enabled: bool,
    pub density: f64,
}

impl Default for Fog {
    fn default() -> Self {
        Self { enabled: false, density: 0.05 }
    }
}

impl Fog {
    /// Fraction of the background mixed in after `distance` units of travel.
    pub fn factor(&self, distance: f64) -> f64 {
        if !self.enabled {
            return 0.0;
        }
        (1.0 - (-self.density * distance).exp()).clamp(0.0, 1.0)
    }

    pub fn apply(&self, color: Color, background: Color, distance: f64) -> Color {
        color.lerp(&background, self.factor(distance))
    }
}

/// Shade a hit point. Returns a gamma-corrected color.
///
/// `view_dir` points from the surface toward the eye. The light position is
/// rotated with the scene so lighting stays attached to the geometry.
pub fn shade(
    point: Vector3<f64>,
    view_dir: Vector3<f64>,
    normal: Vector3<f64>,
    field: &SceneField,
    settings: &RayMarchSettings,
    lighting: &LightingConfig,
) -> Color {
    let light_position = field.scene_rotation() * lighting.light_position;
    let to_light = light_position - point;
    let light_distance = to_light.norm();
    let light_dir = to_light.try_normalize(f64::EPSILON).unwrap_or(normal);

    let shadow = if lighting.shadows_enabled {
        // Start just off the surface so the first sample does not self-shadow.
        let origin = point + normal * (settings.surface_distance_epsilon * 2.0);
        soft_shadow(origin, light_dir, SHADOW_MIN_STEP, light_distance, field, settings, lighting)
    } else {
        1.0
    };
    let ao = if lighting.ambient_occlusion_enabled {
        ambient_occlusion(point, normal, field, lighting)
    } else {
        1.0
    };

    let diffuse = normal.dot(&light_dir).max(0.0);
    let half_vector = (light_dir + view_dir).try_normalize(f64::EPSILON).unwrap_or(normal);
    let specular = normal.dot(&half_vector).max(0.0).powf(lighting.specular_power)
        * lighting.specular_intensity;
    let fresnel = (1.0 - normal.dot(&view_dir).max(0.0)).powf(lighting.fresnel_power)
        * lighting.fresnel_intensity;

    let color = lighting.light_color * (lighting.light_intensity * diffuse * shadow)
        + Vector3::repeat(specular * shadow)
        + lighting.ambient_color * ao
        + Vector3::repeat(fresnel);
    gamma_correct(color)
}

/// Apply the display gamma curve. Negative channels clamp to zero.
pub fn gamma_correct(color: Color) -> Color {
    color.map(|c| c.max(0.0).powf(GAMMA))
}
