//! Soft shadows and ambient occlusion.
//!
//! Both are fixed-cost approximations built from extra field samples. They
//! make no convergence promise; the iteration counts bound the cost.

use nalgebra::Vector3;

use crate::shape::Sdf;
use crate::types::{LightingConfig, RayMarchSettings};

/// Iterations of the shadow march, independent of `max_steps`.
pub const SHADOW_STEPS: usize = 16;
/// Lower bound of one shadow step; keeps the march from stalling near surfaces.
pub const SHADOW_MIN_STEP: f64 = 0.02;
/// Upper bound of one shadow step; keeps thin occluders from being skipped.
pub const SHADOW_MAX_STEP: f64 = 0.2;
/// Per-sample decay of the AO weight.
pub const AO_FALLOFF: f64 = 0.95;

/// Soft shadow factor toward a light, in `[1 - shadow_intensity, 1]`.
///
/// Marches from `point` along `light_dir` starting at `min_t`. At each step
/// the penumbra estimate `shadow_softness * h / t` tightens the result; a
/// sample below `surface_distance_epsilon` means full shadow. `max_t` is
/// capped at `max_distance`. The raw penumbra is clamped, not rescaled, so
/// `shadow_intensity` only sets how dark the darkest shadow gets.
pub fn soft_shadow<S: Sdf + ?Sized>(
    point: Vector3<f64>,
    light_dir: Vector3<f64>,
    min_t: f64,
    max_t: f64,
    field: &S,
    settings: &RayMarchSettings,
    lighting: &LightingConfig,
) -> f64 {
    let max_t = max_t.min(settings.max_distance);
    let mut t = min_t.max(f64::EPSILON);
    let mut res = 1.0_f64;
    for _ in 0..SHADOW_STEPS {
        if t >= max_t {
            break;
        }
        let h = field.evaluate(point + light_dir * t);
        if h < settings.surface_distance_epsilon {
            res = 0.0;
            break;
        }
        res = res.min(lighting.shadow_softness * h / t);
        t += h.clamp(SHADOW_MIN_STEP, SHADOW_MAX_STEP);
    }
    res.clamp(1.0 - lighting.shadow_intensity, 1.0)
}

/// Ambient occlusion at a surface point, in `[0, 1]` (1 = unoccluded).
///
/// Takes `ao_steps` samples along `normal`, evenly spaced out to `ao_radius`.
/// Each sample contributes how much closer the field is than the step
/// distance, weighted by a geometric falloff.
pub fn ambient_occlusion<S: Sdf + ?Sized>(
    point: Vector3<f64>,
    normal: Vector3<f64>,
    field: &S,
    lighting: &LightingConfig,
) -> f64 {
    let steps = lighting.ao_steps;
    let mut occlusion = 0.0;
    let mut falloff = 1.0;
    for i in 1..=steps {
        let step = lighting.ao_radius * f64::from(i) / f64::from(steps);
        let h = field.evaluate(point + normal * step);
        occlusion += (step - h) * falloff;
        falloff *= AO_FALLOFF;
    }
    (1.0 - lighting.ao_intensity * occlusion).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::FnSdf;

    #[test]
    fn empty_space_is_fully_lit() {
        let field = FnSdf::new(|_| 50.0);
        let lighting = LightingConfig::default();
        let s = soft_shadow(
            Vector3::zeros(),
            Vector3::new(0.0, 1.0, 0.0),
            0.02,
            10.0,
            &field,
            &RayMarchSettings::default(),
            &lighting,
        );
        assert_eq!(s, 1.0);
    }

    #[test]
    fn zero_ao_steps_is_unoccluded() {
        let field = FnSdf::new(|p: Vector3<f64>| p.y);
        let lighting = LightingConfig { ao_steps: 0, ..LightingConfig::default() };
        let ao = ambient_occlusion(Vector3::zeros(), Vector3::new(0.0, 1.0, 0.0), &field, &lighting);
        assert_eq!(ao, 1.0);
    }
}
