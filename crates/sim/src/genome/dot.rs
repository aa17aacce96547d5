use pyxelator_raster::{Color, Disc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::base::Palette;

/// A single colored dot at a fixed grid position.
///
/// The position is the top-left corner of the dot's bounding square and never
/// changes during a run; only the color evolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dot {
    position: (u32, u32),
    color: Color,
}

impl Dot {
    pub fn new(position: (u32, u32), color: Color) -> Self {
        Self { position, color }
    }

    #[inline]
    pub fn position(&self) -> (u32, u32) {
        self.position
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Replace the color with a uniform draw from `palette`.
    ///
    /// The draw may return the current color again.
    pub fn mutate<R: Rng + ?Sized>(&mut self, palette: &Palette, rng: &mut R) {
        self.color = palette.choose(rng);
    }

    /// The disc this dot paints.
    #[inline]
    pub fn disc(&self) -> Disc {
        Disc {
            x: self.position.0,
            y: self.position.1,
            color: self.color,
        }
    }
}
