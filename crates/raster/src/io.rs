//! Reading target images and writing snapshots.

use crate::buffer::{Canvas, RasterBuffer};
use crate::color::Color;
use crate::error::RasterError;
use std::path::{Path, PathBuf};

/// Load an image from disk as an RGB raster of exactly `expected` size.
///
/// Any format the `image` crate can decode is accepted; alpha is dropped.
pub fn load_target(path: impl AsRef<Path>, expected: Canvas) -> Result<RasterBuffer, RasterError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| RasterError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let decoded = image::load_from_memory(&bytes).map_err(|e| RasterError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    if width != expected.width || height != expected.height {
        return Err(RasterError::DimensionMismatch {
            expected_width: expected.width,
            expected_height: expected.height,
            width,
            height,
        });
    }

    RasterBuffer::from_rgb(expected, rgb.into_raw())
}

/// Load an image from disk without a size requirement.
pub fn load_any(path: impl AsRef<Path>) -> Result<RasterBuffer, RasterError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| RasterError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let rgb = image::load_from_memory(&bytes)
        .map_err(|e| RasterError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .to_rgb8();
    let canvas = Canvas::new(rgb.width(), rgb.height());
    RasterBuffer::from_rgb(canvas, rgb.into_raw())
}

/// Write a raster as PNG.
pub fn save_png(buffer: &RasterBuffer, path: impl AsRef<Path>) -> Result<(), RasterError> {
    let path = path.as_ref();
    let save_err = |message: String| RasterError::Save {
        path: path.to_path_buf(),
        message,
    };
    let image = image::RgbImage::from_raw(buffer.width(), buffer.height(), buffer.as_bytes().to_vec())
        .ok_or_else(|| save_err("buffer does not match its canvas".into()))?;
    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| save_err(e.to_string()))
}

/// Writes numbered PNG snapshots of the evolving image.
///
/// File names encode the generation and score, e.g. `pyx_125gen_12.3456score.png`.
#[derive(Debug, Clone)]
pub struct SnapshotWriter {
    dir: PathBuf,
    prefix: String,
    border: Option<Color>,
}

impl SnapshotWriter {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
            border: None,
        }
    }

    /// Frame every snapshot with a one-pixel border of `color`.
    pub fn with_border(mut self, color: Color) -> Self {
        self.border = Some(color);
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a snapshot for `generation` with `score` would be written to.
    pub fn path_for(&self, generation: usize, score: f64) -> PathBuf {
        self.dir
            .join(format!("{}_{generation}gen_{score:.4}score.png", self.prefix))
    }

    /// Save `buffer`, creating the output directory if needed.
    pub fn save(&self, buffer: &RasterBuffer, generation: usize, score: f64) -> Result<PathBuf, RasterError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(generation, score);

        match self.border {
            Some(color) => {
                let mut framed = buffer.clone();
                framed.draw_border(color);
                save_png(&framed, &path)?;
            }
            None => save_png(buffer, &path)?,
        }

        log::debug!("snapshot written to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_encodes_generation_and_score() {
        let writer = SnapshotWriter::new("out", "pyx");
        let path = writer.path_for(25, 12.345678);
        assert_eq!(path, PathBuf::from("out").join("pyx_25gen_12.3457score.png"));
    }

    #[test]
    fn test_missing_file_is_open_error() {
        let err = load_target("/definitely/not/here.png", Canvas::new(4, 4)).unwrap_err();
        assert!(matches!(err, RasterError::Open { .. }));
        assert!(err.is_input_error());
    }
}
