use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::SceneError;
use crate::types::is_finite;

/// Pinhole camera looking from `position` at `target`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Camera {
    pub position: Vector3<f64>,
    pub target: Vector3<f64>,
    pub up: Vector3<f64>,
    /// Vertical field of view in degrees.
    pub fov_degrees: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 1.5, 6.0),
            target: Vector3::zeros(),
            up: Vector3::new(0.0, 1.0, 0.0),
            fov_degrees: 45.0,
        }
    }
}

/// Orthonormal camera frame, resolved once per frame.
#[derive(Clone, Copy, Debug)]
pub struct CameraBasis {
    pub origin: Vector3<f64>,
    pub forward: Vector3<f64>,
    pub right: Vector3<f64>,
    pub up: Vector3<f64>,
    tan_half_fov: f64,
}

impl Camera {
    pub fn look_at(position: Vector3<f64>, target: Vector3<f64>, fov_degrees: f64) -> Self {
        Self { position, target, fov_degrees, ..Self::default() }
    }

    /// Reject a field of view outside `(0, 180)` degrees or a non-finite
    /// placement. Coincident or parallel vectors are not errors; `basis`
    /// recovers from them.
    pub fn validate(&self) -> Result<(), SceneError> {
        if !is_finite(&self.position) || !is_finite(&self.target) || !is_finite(&self.up) {
            return Err(SceneError::InvalidCamera("position, target and up must be finite"));
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(SceneError::InvalidCamera("fov_degrees must lie strictly between 0 and 180"));
        }
        Ok(())
    }

    pub fn basis(&self) -> CameraBasis {
        let forward = (self.target - self.position)
            .try_normalize(f64::EPSILON)
            .unwrap_or_else(|| {
                warn!("camera target coincides with its position; looking down -Z");
                -Vector3::z()
            });
        let right = forward
            .cross(&self.up)
            .try_normalize(f64::EPSILON)
            .unwrap_or_else(|| {
                warn!("camera up is parallel to the view direction; picking another up");
                let fallback = if forward.x.abs() < 0.9 { Vector3::x() } else { Vector3::z() };
                forward.cross(&fallback).normalize()
            });
        CameraBasis {
            origin: self.position,
            forward,
            right,
            up: right.cross(&forward),
            tan_half_fov: (self.fov_degrees.to_radians() * 0.5).tan(),
        }
    }
}

impl CameraBasis {
    /// Primary ray through the center of pixel `(x, y)`; `y` grows downward.
    /// Returns `(origin, unit direction)`.
    pub fn ray(&self, x: u32, y: u32, width: u32, height: u32) -> (Vector3<f64>, Vector3<f64>) {
        let aspect = f64::from(width) / f64::from(height);
        let sx = (2.0 * (f64::from(x) + 0.5) / f64::from(width) - 1.0) * aspect * self.tan_half_fov;
        let sy = (1.0 - 2.0 * (f64::from(y) + 0.5) / f64::from(height)) * self.tan_half_fov;
        let dir = (self.forward + self.right * sx + self.up * sy).normalize();
        (self.origin, dir)
    }
}
