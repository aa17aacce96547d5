use std::path::PathBuf;
use thiserror::Error;

/// Error type for raster operations.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("Cannot open image {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot decode image {path}: {message}")]
    Decode { path: PathBuf, message: String },
    #[error("Image must be {expected_width}x{expected_height}, got {width}x{height}")]
    DimensionMismatch {
        expected_width: u32,
        expected_height: u32,
        width: u32,
        height: u32,
    },
    #[error("Invalid canvas {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },
    #[error("Invalid disc diameter: {0}")]
    InvalidDiameter(u32),
    #[error("Buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },
    #[error("Failed to save snapshot {path}: {message}")]
    Save { path: PathBuf, message: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RasterError {
    /// True for errors caused by the input image rather than by rendering or saving.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Open { .. } | Self::Decode { .. } | Self::DimensionMismatch { .. }
        )
    }
}
