//! Raymarching of smooth-union signed distance fields on the CPU.
//!
//! A scene is an ordered list of primitives (sphere, box, cylinder, torus),
//! each with its own position, Euler rotation and scale. The primitives are
//! folded into one field with a polynomial smooth minimum, rays are
//! sphere-traced through that field, and hits are shaded with
//! finite-difference normals, soft shadows, ambient occlusion and a Fresnel
//! rim.
//!
//! ```rust,no_run
//! use nalgebra::Vector3;
//! use smoothmarch::{Camera, Frame, LightingConfig, PrimitiveDescriptor, RayMarchSettings, SceneConfig};
//!
//! let scene = SceneConfig::new(
//!     vec![
//!         PrimitiveDescriptor::sphere(Vector3::zeros(), 1.0),
//!         PrimitiveDescriptor::cuboid(Vector3::new(1.5, 0.0, 0.0), Vector3::new(0.5, 0.5, 0.5)),
//!     ],
//!     0.4,
//! );
//! let frame = Frame::new(&scene, &RayMarchSettings::default(), &LightingConfig::default()).unwrap();
//! let image = frame.render(&Camera::default(), 320, 180).unwrap();
//! assert_eq!(image.pixels.len(), 320 * 180);
//! ```

pub mod camera;
pub mod config;
pub mod csg;
pub mod error;
pub mod field;
pub mod march;
pub mod normal;
pub mod occlusion;
pub mod primitive;
pub mod primitives;
pub mod render;
pub mod rotation;
pub mod shading;
pub mod shape;
pub mod types;

pub use camera::Camera;
pub use config::FrameConfig;
pub use error::{ConfigError, SceneError};
pub use field::{field_value, SceneField};
pub use march::march;
pub use normal::normal;
pub use occlusion::{ambient_occlusion, soft_shadow};
pub use primitive::distance;
pub use render::{Frame, Image};
pub use shading::{shade, Fog};
pub use shape::Sdf;
pub use types::{
    Color, LightingConfig, PrimitiveDescriptor, PrimitiveKind, RayMarchResult, RayMarchSettings,
    SceneConfig,
};
