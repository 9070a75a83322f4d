//! Per-frame driver: trace rays through a scene snapshot in parallel.
//!
//! Rays are independent. Rendering splits the image into rows and hands them
//! to rayon; every ray writes only its own output cell, so no locking is
//! involved.

use nalgebra::Vector3;
use rayon::prelude::*;
use tracing::debug;

use crate::camera::Camera;
use crate::error::SceneError;
use crate::field::SceneField;
use crate::march::march;
use crate::normal::normal;
use crate::shading::{shade, Fog};
use crate::types::{Color, LightingConfig, RayMarchSettings, SceneConfig};

/// A rendered frame in display space, row-major from the top-left pixel.
#[derive(Clone, Debug)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl Image {
    /// Color at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize).copied()
    }

    /// Quantize to 8-bit RGBA with opaque alpha.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.pixels.len() * 4);
        for c in &self.pixels {
            for channel in c.iter() {
                buf.push((channel.clamp(0.0, 1.0) * 255.0).round() as u8);
            }
            buf.push(255);
        }
        buf
    }
}

/// Everything needed to color one frame: the prepared field plus lighting,
/// march settings, background and fog. Immutable once built.
#[derive(Clone, Debug)]
pub struct Frame {
    field: SceneField,
    settings: RayMarchSettings,
    lighting: LightingConfig,
    background: Color,
    fog: Fog,
}

impl Frame {
    /// Validate the inputs and snapshot them for this frame.
    pub fn new(
        scene: &SceneConfig,
        settings: &RayMarchSettings,
        lighting: &LightingConfig,
    ) -> Result<Self, SceneError> {
        lighting.validate()?;
        Ok(Self {
            field: SceneField::new(scene, settings)?,
            settings: *settings,
            lighting: *lighting,
            background: Vector3::new(0.05, 0.06, 0.08),
            fog: Fog::default(),
        })
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_fog(mut self, fog: Fog) -> Self {
        self.fog = fog;
        self
    }

    pub fn field(&self) -> &SceneField {
        &self.field
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Color seen along one ray. Misses return the background.
    pub fn trace(&self, origin: Vector3<f64>, direction: Vector3<f64>) -> Color {
        let result = march(origin, direction, &self.field, &self.settings);
        if !result.hit {
            return self.background;
        }
        let n = normal(result.hit_point, &self.field, &self.settings);
        let color = shade(result.hit_point, -direction, n, &self.field, &self.settings, &self.lighting);
        self.fog.apply(color, self.background, result.distance_traveled)
    }

    /// Trace caller-supplied rays into a caller-owned buffer, one cell per ray.
    pub fn render_rays(
        &self,
        rays: &[(Vector3<f64>, Vector3<f64>)],
        out: &mut [Color],
    ) -> Result<(), SceneError> {
        if rays.len() != out.len() {
            return Err(SceneError::BufferSizeMismatch { expected: rays.len(), actual: out.len() });
        }
        out.par_iter_mut()
            .zip(rays.par_iter())
            .for_each(|(cell, &(origin, direction))| *cell = self.trace(origin, direction));
        Ok(())
    }

    /// Render a `width` x `height` image through `camera`.
    pub fn render(&self, camera: &Camera, width: u32, height: u32) -> Result<Image, SceneError> {
        if width == 0 || height == 0 {
            return Err(SceneError::InvalidOutputSize { width, height });
        }
        let basis = camera.basis();
        let mut pixels = vec![self.background; width as usize * height as usize];
        pixels
            .par_chunks_mut(width as usize)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, cell) in row.iter_mut().enumerate() {
                    let (origin, direction) = basis.ray(x as u32, y as u32, width, height);
                    *cell = self.trace(origin, direction);
                }
            });
        debug!(width, height, primitives = self.field.primitive_count(), "rendered frame");
        Ok(Image { width, height, pixels })
    }
}
