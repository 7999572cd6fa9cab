//! Error type shared by every stage of the rendering pipeline.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LogoError>;

/// Errors produced while building, rendering or exporting a logo.
#[derive(Debug, Error)]
pub enum LogoError {
    /// A shape description cannot be rendered (zero radius, empty sweep, ...).
    #[error("invalid {shape} geometry: {reason}")]
    InvalidGeometry { shape: &'static str, reason: String },

    /// A pixel buffer of the requested size could not be allocated.
    #[error("failed to allocate a {width}x{height} pixel buffer")]
    Allocation { width: u32, height: u32 },

    /// Two buffers that must share dimensions do not.
    #[error("buffer size mismatch: expected {expected}x{expected}, found {found_width}x{found_height}")]
    SizeMismatch {
        expected: u32,
        found_width: u32,
        found_height: u32,
    },

    /// Encoding or writing an output image failed.
    #[error("image output failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The JSON profile could not be read or written.
    #[error("invalid profile: {0}")]
    Profile(#[from] serde_json::Error),
}

impl LogoError {
    pub(crate) fn geometry(shape: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            shape,
            reason: reason.into(),
        }
    }
}

/// Fails with [`LogoError::InvalidGeometry`] unless `value` is finite and positive.
pub(crate) fn ensure_positive(shape: &'static str, name: &str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(LogoError::geometry(
            shape,
            format!("{name} must be a positive number, got {value}"),
        ))
    }
}
