use crate::buffer::{Canvas, RasterBuffer};
use crate::color::Color;
use crate::error::RasterError;

/// A filled circle to be drawn.
///
/// `(x, y)` is the top-left corner of the disc's bounding square, so a disc of
/// diameter `d` covers `[x, x + d) × [y, y + d)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disc {
    pub x: u32,
    pub y: u32,
    pub color: Color,
}

/// Core trait for disc renderers.
///
/// Every strategy must draw deterministically: the same discs, diameter and
/// background always produce a byte-identical buffer. Discs are painted in
/// order, so later discs cover earlier ones where they overlap.
pub trait Renderer {
    fn render(
        &self,
        discs: &[Disc],
        diameter: u32,
        background: Color,
        canvas: Canvas,
    ) -> Result<RasterBuffer, RasterError>;
}

pub(crate) fn check_diameter(diameter: u32) -> Result<(), RasterError> {
    if diameter == 0 {
        return Err(RasterError::InvalidDiameter(diameter));
    }
    Ok(())
}
