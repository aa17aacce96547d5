use crate::color::Color;
use crate::error::RasterError;
use serde::{Deserialize, Serialize};

/// Bytes per pixel of a [`RasterBuffer`] (packed RGB).
pub const CHANNELS: usize = 3;

/// Pixel dimensions of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of pixels on the canvas.
    #[inline]
    pub fn pixels(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Number of bytes of a packed RGB buffer covering the canvas.
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.pixels() * CHANNELS
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub(crate) fn check(&self) -> Result<(), RasterError> {
        if self.is_empty() {
            return Err(RasterError::InvalidCanvas {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A packed RGB8 pixel buffer in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    canvas: Canvas,
    data: Vec<u8>,
}

impl RasterBuffer {
    /// Create a buffer filled with a solid color.
    pub fn new(canvas: Canvas, fill: Color) -> Result<Self, RasterError> {
        canvas.check()?;
        let data = fill.to_array().repeat(canvas.pixels());
        Ok(Self { canvas, data })
    }

    /// Wrap existing packed RGB bytes.
    pub fn from_rgb(canvas: Canvas, data: Vec<u8>) -> Result<Self, RasterError> {
        canvas.check()?;
        if data.len() != canvas.byte_len() {
            return Err(RasterError::BufferSize {
                expected: canvas.byte_len(),
                actual: data.len(),
            });
        }
        Ok(Self { canvas, data })
    }

    #[inline]
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.canvas.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.canvas.height
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.canvas.width as usize + x as usize) * CHANNELS
    }

    /// Color at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.canvas.width || y >= self.canvas.height {
            return None;
        }
        let i = self.offset(x, y);
        Some(Color::new(self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    /// Set the color at `(x, y)`. Writes outside the canvas are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.canvas.width || y >= self.canvas.height {
            return;
        }
        let i = self.offset(x, y);
        self.data[i..i + CHANNELS].copy_from_slice(&color.to_array());
    }

    /// Fill the horizontal span `[x0, x1)` of row `y`, clipped to the canvas.
    pub fn fill_span(&mut self, y: u32, x0: u32, x1: u32, color: Color) {
        if y >= self.canvas.height {
            return;
        }
        let x1 = x1.min(self.canvas.width);
        if x0 >= x1 {
            return;
        }
        let start = self.offset(x0, y);
        let end = self.offset(x1, y);
        let rgb = color.to_array();
        for px in self.data[start..end].chunks_exact_mut(CHANNELS) {
            px.copy_from_slice(&rgb);
        }
    }

    /// Draw a one-pixel frame along the canvas edges.
    pub fn draw_border(&mut self, color: Color) {
        let (w, h) = (self.canvas.width, self.canvas.height);
        self.fill_span(0, 0, w, color);
        self.fill_span(h - 1, 0, w, color);
        for y in 0..h {
            self.set_pixel(0, y, color);
            self.set_pixel(w - 1, y, color);
        }
    }
}
