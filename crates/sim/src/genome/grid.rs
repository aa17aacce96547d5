use std::sync::Arc;

use pyxelator_raster::Canvas;

use crate::errors::ConfigError;

/// Fixed dot positions shared by every replica of a run.
///
/// Positions are laid out in raster-scan order (rows top to bottom, left to
/// right within a row), starting `inset` pixels from the top-left edge and
/// spaced `dot_size` apart. A position `p` is used while
/// `p + dot_size <= extent - inset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    canvas: Canvas,
    dot_size: u32,
    inset: u32,
    columns: usize,
    rows: usize,
    positions: Arc<[(u32, u32)]>,
}

impl Grid {
    pub fn new(canvas: Canvas, dot_size: u32, inset: u32) -> Result<Self, ConfigError> {
        if canvas.is_empty() {
            return Err(ConfigError::EmptyCanvas {
                width: canvas.width,
                height: canvas.height,
            });
        }
        if dot_size == 0 {
            return Err(ConfigError::ZeroDotSize);
        }

        let xs = Self::axis(canvas.width, dot_size, inset);
        let ys = Self::axis(canvas.height, dot_size, inset);
        if xs.is_empty() || ys.is_empty() {
            return Err(ConfigError::GridTooSmall {
                width: canvas.width,
                height: canvas.height,
                dot_size,
                inset,
            });
        }

        let positions: Arc<[(u32, u32)]> = ys
            .iter()
            .flat_map(|&y| xs.iter().map(move |&x| (x, y)))
            .collect();

        Ok(Self {
            canvas,
            dot_size,
            inset,
            columns: xs.len(),
            rows: ys.len(),
            positions,
        })
    }

    fn axis(extent: u32, dot_size: u32, inset: u32) -> Vec<u32> {
        let limit = extent.saturating_sub(inset);
        let mut coords = Vec::new();
        let mut p = inset;
        while p.saturating_add(dot_size) <= limit {
            coords.push(p);
            p += dot_size;
        }
        coords
    }

    #[inline]
    pub fn positions(&self) -> &[(u32, u32)] {
        &self.positions
    }

    /// Number of dots in every replica.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false for a constructed grid.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn dot_size(&self) -> u32 {
        self.dot_size
    }

    pub fn inset(&self) -> u32 {
        self.inset
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }
}
