use std::path::PathBuf;

use thiserror::Error;

/// Rejected frame input. Only raised at snapshot boundaries; the per-sample
/// hot path never checks and lets NaN propagate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    #[error("primitive {index} has a non-finite {field}")]
    NonFinitePrimitive { index: usize, field: &'static str },
    #[error("scene rotation is not finite")]
    NonFiniteSceneRotation,
    #[error("smooth factor must be positive and finite, got {0}")]
    InvalidSmoothFactor(f64),
    #[error("invalid ray march settings: {0}")]
    InvalidSettings(&'static str),
    #[error("invalid lighting: {0}")]
    InvalidLighting(&'static str),
    #[error("invalid camera: {0}")]
    InvalidCamera(&'static str),
    #[error("invalid output size {width}x{height}")]
    InvalidOutputSize { width: u32, height: u32 },
    #[error("output buffer holds {actual} cells but {expected} rays were given")]
    BufferSizeMismatch { expected: usize, actual: usize },
}

/// Failure to load a [`FrameConfig`](crate::config::FrameConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed frame config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] SceneError),
}
