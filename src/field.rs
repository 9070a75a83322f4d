//! Scene field combiner.
//!
//! Folds every enabled primitive into one signed distance with a smooth
//! union, after carrying the sample point into the scene's rotated frame.
//! Rotating the sample point by the inverse scene rotation is the same as
//! rotating every primitive together.
//!
//! Blend order is list order. Smooth union is not associative in floating
//! point, so the fold always runs left to right.

use nalgebra::{Rotation3, Vector3};
use tracing::debug;

use crate::csg;
use crate::error::SceneError;
use crate::primitive::{self, PlacedPrimitive};
use crate::rotation::{euler_degrees, inverse_euler_degrees};
use crate::shape::Sdf;
use crate::types::{RayMarchSettings, SceneConfig};

/// Fold distances in order. The first value seeds the accumulator; an empty
/// sequence yields `max_distance`.
pub fn combine(distances: impl IntoIterator<Item = f64>, k: f64, max_distance: f64) -> f64 {
    distances
        .into_iter()
        .reduce(|acc, d| csg::blend_step(acc, d, k, max_distance))
        .unwrap_or(max_distance)
}

/// Field value of `scene` at `point`.
///
/// Resolves every rotation on each call. Use [`SceneField`] when sampling
/// the same snapshot many times.
pub fn field_value(point: Vector3<f64>, scene: &SceneConfig, settings: &RayMarchSettings) -> f64 {
    let local = inverse_euler_degrees(scene.scene_rotation_euler) * point;
    combine(
        scene
            .primitives
            .iter()
            .filter(|p| p.enabled)
            .map(|p| primitive::distance(local, p, settings)),
        scene.global_smooth_factor,
        settings.max_distance,
    )
}

/// A frame snapshot of the scene, ready for repeated sampling.
///
/// Disabled primitives are dropped and every rotation is resolved up front.
/// Sampling is read-only, so one `SceneField` can be shared across threads
/// for the whole frame.
#[derive(Clone, Debug)]
pub struct SceneField {
    primitives: Vec<PlacedPrimitive>,
    scene_rotation: Rotation3<f64>,
    inverse_scene_rotation: Rotation3<f64>,
    smooth_factor: f64,
    max_distance: f64,
}

impl SceneField {
    /// Validate the snapshot and prepare it for sampling.
    pub fn new(scene: &SceneConfig, settings: &RayMarchSettings) -> Result<Self, SceneError> {
        scene.validate()?;
        settings.validate()?;
        Ok(Self::new_unchecked(scene, settings))
    }

    /// Prepare without validation. Non-finite input propagates as NaN.
    pub fn new_unchecked(scene: &SceneConfig, settings: &RayMarchSettings) -> Self {
        let primitives: Vec<PlacedPrimitive> = scene
            .primitives
            .iter()
            .filter(|p| p.enabled)
            .map(PlacedPrimitive::new)
            .collect();
        debug!(
            total = scene.primitives.len(),
            enabled = primitives.len(),
            smooth_factor = scene.global_smooth_factor,
            "prepared scene field"
        );
        let scene_rotation = euler_degrees(scene.scene_rotation_euler);
        Self {
            primitives,
            scene_rotation,
            inverse_scene_rotation: scene_rotation.inverse(),
            smooth_factor: scene.global_smooth_factor,
            max_distance: settings.max_distance,
        }
    }

    /// Rotation applied to the whole scene (world from scene frame).
    pub fn scene_rotation(&self) -> &Rotation3<f64> {
        &self.scene_rotation
    }

    /// Number of primitives taking part in the union.
    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
    }

    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }
}

impl Sdf for SceneField {
    fn evaluate(&self, point: Vector3<f64>) -> f64 {
        let local = self.inverse_scene_rotation * point;
        combine(
            self.primitives.iter().map(|p| p.evaluate(local)),
            self.smooth_factor,
            self.max_distance,
        )
    }
}
