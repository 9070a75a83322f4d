//! Sphere tracing.

use nalgebra::Vector3;

use crate::shape::Sdf;
use crate::types::{RayMarchResult, RayMarchSettings};

/// March a ray through `field`.
///
/// Each step samples the field at the current position and advances by the
/// sampled distance. The march reports a hit once a sample falls below
/// `surface_distance_epsilon`, and a miss once the traveled distance exceeds
/// `max_distance` or `max_steps` runs out. `direction` must be unit length.
pub fn march<S: Sdf + ?Sized>(
    origin: Vector3<f64>,
    direction: Vector3<f64>,
    field: &S,
    settings: &RayMarchSettings,
) -> RayMarchResult {
    let mut traveled = 0.0;
    for _ in 0..settings.max_steps {
        let sample = field.evaluate(origin + direction * traveled);
        traveled += sample;
        if traveled > settings.max_distance {
            break;
        }
        if sample.abs() < settings.surface_distance_epsilon {
            return RayMarchResult {
                hit: true,
                distance_traveled: traveled,
                hit_point: origin + direction * traveled,
            };
        }
    }
    RayMarchResult {
        hit: false,
        distance_traveled: traveled,
        hit_point: origin + direction * traveled,
    }
}
