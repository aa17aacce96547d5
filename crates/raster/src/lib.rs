//! Raster primitives for pyxelator.
//!
//! Provides RGB pixel buffers, disc renderers and the image I/O used to load
//! target images and write snapshots.

mod buffer;
mod color;
mod error;
pub mod io;
mod strategies;
mod traits;

pub use buffer::{Canvas, RasterBuffer, CHANNELS};
pub use color::Color;
pub use error::RasterError;
pub use io::{load_target, SnapshotWriter};
pub use strategies::{Scanline, Skia};
pub use traits::{Disc, Renderer};

use serde::{Deserialize, Serialize};

/// Strategies for rendering discs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderStrategy {
    /// tiny-skia circle fills without anti-aliasing.
    #[default]
    Skia,
    /// Integer scanline disc fill.
    Scanline,
}

impl RenderStrategy {
    /// Render using the selected strategy.
    pub fn render(
        &self,
        discs: &[Disc],
        diameter: u32,
        background: Color,
        canvas: Canvas,
    ) -> Result<RasterBuffer, RasterError> {
        match self {
            RenderStrategy::Skia => Skia.render(discs, diameter, background, canvas),
            RenderStrategy::Scanline => Scanline.render(discs, diameter, background, canvas),
        }
    }
}

impl std::fmt::Display for RenderStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Skia => write!(f, "skia"),
            Self::Scanline => write!(f, "scanline"),
        }
    }
}

impl std::str::FromStr for RenderStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "skia" => Ok(Self::Skia),
            "scanline" => Ok(Self::Scanline),
            _ => Err(format!(
                "Unknown render strategy: {s}. Available: skia, scanline"
            )),
        }
    }
}

impl Renderer for RenderStrategy {
    fn render(
        &self,
        discs: &[Disc],
        diameter: u32,
        background: Color,
        canvas: Canvas,
    ) -> Result<RasterBuffer, RasterError> {
        RenderStrategy::render(self, discs, diameter, background, canvas)
    }
}
