//! Primitive evaluator: signed distance from a world point to one placed primitive.

use nalgebra::{Rotation3, Vector3};

use crate::primitives;
use crate::rotation::inverse_euler_degrees;
use crate::types::{PrimitiveDescriptor, PrimitiveKind, RayMarchSettings};

/// Distance returned for a disabled primitive. Any value at or beyond
/// `max_distance` is ignored by the union fold.
pub fn disabled_distance(settings: &RayMarchSettings) -> f64 {
    settings.max_distance
}

/// Signed distance from `point` to `prim`.
///
/// The point is moved into primitive-local space (translate, then inverse
/// rotation) before the shape formula runs. Disabled primitives answer with
/// [`disabled_distance`].
pub fn distance(point: Vector3<f64>, prim: &PrimitiveDescriptor, settings: &RayMarchSettings) -> f64 {
    if !prim.enabled {
        return disabled_distance(settings);
    }
    let inverse = inverse_euler_degrees(prim.rotation_euler);
    local_distance(prim.kind, prim.scale, inverse * (point - prim.position))
}

/// Shape formula in primitive-local space.
pub fn local_distance(kind: PrimitiveKind, scale: Vector3<f64>, local: Vector3<f64>) -> f64 {
    let origin = Vector3::zeros();
    match kind {
        PrimitiveKind::Sphere => primitives::sdf_sphere(local, origin, scale.x),
        PrimitiveKind::Box => primitives::sdf_box(local, origin, scale),
        PrimitiveKind::Cylinder => primitives::sdf_cylinder(local, origin, scale.x, scale.y),
        PrimitiveKind::Torus => primitives::sdf_torus(local, origin, scale.x, scale.y),
    }
}

/// A primitive with its inverse rotation resolved once per frame.
#[derive(Clone, Debug)]
pub struct PlacedPrimitive {
    pub kind: PrimitiveKind,
    pub position: Vector3<f64>,
    pub scale: Vector3<f64>,
    inverse: Rotation3<f64>,
}

impl PlacedPrimitive {
    pub fn new(prim: &PrimitiveDescriptor) -> Self {
        Self {
            kind: prim.kind,
            position: prim.position,
            scale: prim.scale,
            inverse: inverse_euler_degrees(prim.rotation_euler),
        }
    }

    pub fn evaluate(&self, point: Vector3<f64>) -> f64 {
        local_distance(self.kind, self.scale, self.inverse * (point - self.position))
    }
}
