use crate::buffer::{Canvas, RasterBuffer, CHANNELS};
use crate::color::Color;
use crate::error::RasterError;
use crate::traits::{check_diameter, Disc, Renderer};
use tiny_skia as sk;

/// Strategy: tiny-skia filled circles.
///
/// # How it works
///
/// Every disc becomes a circle path filled with a solid, fully opaque paint on
/// a `Pixmap` that was first cleared to the background. Anti-aliasing is off,
/// so each pixel ends up either background or exactly one disc color, the way
/// a plain ellipse primitive paints.
///
/// The circle path only depends on the diameter, so it is built once per call
/// and translated to each disc.
pub struct Skia;

impl Renderer for Skia {
    fn render(
        &self,
        discs: &[Disc],
        diameter: u32,
        background: Color,
        canvas: Canvas,
    ) -> Result<RasterBuffer, RasterError> {
        check_diameter(diameter)?;
        let invalid = || RasterError::InvalidCanvas {
            width: canvas.width,
            height: canvas.height,
        };
        let mut pix = sk::Pixmap::new(canvas.width, canvas.height).ok_or_else(invalid)?;
        pix.fill(sk::Color::from_rgba8(background.r, background.g, background.b, 255));

        let radius = diameter as f32 / 2.0;
        let circle = sk::PathBuilder::from_circle(radius, radius, radius)
            .ok_or(RasterError::InvalidDiameter(diameter))?;

        let mut paint = sk::Paint::default();
        paint.anti_alias = false;

        for disc in discs {
            paint.set_color_rgba8(disc.color.r, disc.color.g, disc.color.b, 255);
            let transform = sk::Transform::from_translate(disc.x as f32, disc.y as f32);
            pix.fill_path(&circle, &paint, sk::FillRule::Winding, transform, None);
        }

        // Every pixel is opaque, so the premultiplied RGBA bytes are plain RGB.
        let mut rgb = Vec::with_capacity(canvas.byte_len());
        for px in pix.data().chunks_exact(4) {
            rgb.extend_from_slice(&px[..CHANNELS]);
        }
        RasterBuffer::from_rgb(canvas, rgb)
    }
}
