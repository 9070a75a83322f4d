use nalgebra::Vector3;

use crate::shape::Sdf;
use crate::types::RayMarchSettings;

/// Surface normal at `point` using `settings.normal_epsilon` as the offset.
///
/// Only meaningful at points the marcher classified as hits.
pub fn normal<S: Sdf + ?Sized>(point: Vector3<f64>, field: &S, settings: &RayMarchSettings) -> Vector3<f64> {
    normal_with_epsilon(point, field, settings.normal_epsilon)
}

/// Backward-difference gradient of the field, normalized.
///
/// Costs four field samples. Returns the zero vector when the gradient
/// vanishes (far from any surface or on a field saddle).
pub fn normal_with_epsilon<S: Sdf + ?Sized>(point: Vector3<f64>, field: &S, eps: f64) -> Vector3<f64> {
    let d = field.evaluate(point);
    let gradient = Vector3::new(
        d - field.evaluate(point - Vector3::new(eps, 0.0, 0.0)),
        d - field.evaluate(point - Vector3::new(0.0, eps, 0.0)),
        d - field.evaluate(point - Vector3::new(0.0, 0.0, eps)),
    );
    gradient.try_normalize(f64::EPSILON).unwrap_or_else(Vector3::zeros)
}
