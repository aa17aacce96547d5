//! Color palette and background decision derived from the target image.

use std::collections::HashMap;
use std::fmt;

use pyxelator_raster::{Color, RasterBuffer, CHANNELS};
use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::PaletteError;

/// Colors with `value()` above this count as light.
const LIGHT_THRESHOLD: f64 = 0.5;

/// Background the replicas are painted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    /// White background, snapshots get a black border.
    Light,
    /// Black background.
    Dark,
}

impl Background {
    /// Fill color for this background.
    pub fn color(self) -> Color {
        match self {
            Self::Light => Color::WHITE,
            Self::Dark => Color::BLACK,
        }
    }

    pub fn is_light(self) -> bool {
        matches!(self, Self::Light)
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// A distinct color and how many pixels of the target use it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub color: Color,
    pub count: u64,
}

/// The distinct colors of a target image.
///
/// Entries are ordered by count (descending) and then by color, so two
/// palettes built from the same pixels are always identical. A palette is
/// never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Count the distinct colors of `raster`.
    pub fn from_raster(raster: &RasterBuffer) -> Result<Self, PaletteError> {
        let row_bytes = (raster.width() as usize * CHANNELS).max(CHANNELS);
        let counts = raster
            .as_bytes()
            .par_chunks(row_bytes)
            .fold(HashMap::new, |mut acc: HashMap<Color, u64>, row| {
                for px in row.chunks_exact(CHANNELS) {
                    *acc.entry(Color::new(px[0], px[1], px[2])).or_default() += 1;
                }
                acc
            })
            .reduce(HashMap::new, |mut a, b| {
                for (color, count) in b {
                    *a.entry(color).or_default() += count;
                }
                a
            });

        Self::from_counts(counts)
    }

    /// Build a palette from `(color, count)` pairs.
    ///
    /// Repeated colors are merged and zero counts dropped.
    pub fn from_counts<I>(counts: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = (Color, u64)>,
    {
        let mut merged: HashMap<Color, u64> = HashMap::new();
        for (color, count) in counts {
            if count > 0 {
                *merged.entry(color).or_default() += count;
            }
        }
        if merged.is_empty() {
            return Err(PaletteError::Empty);
        }

        let mut entries: Vec<PaletteEntry> = merged
            .into_iter()
            .map(|(color, count)| PaletteEntry { color, count })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count).then(a.color.cmp(&b.color)));

        Ok(Self { entries })
    }

    /// Majority vote of pixel counts between light and dark colors.
    ///
    /// Ties resolve to [`Background::Dark`].
    pub fn background(&self) -> Background {
        let (light, dark) = self.entries.iter().fold((0u64, 0u64), |(l, d), e| {
            if e.color.value() > LIGHT_THRESHOLD {
                (l + e.count, d)
            } else {
                (l, d + e.count)
            }
        });

        if light > dark {
            Background::Light
        } else {
            Background::Dark
        }
    }

    /// Draw a color uniformly among the distinct colors.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        self.entries[rng.random_range(0..self.entries.len())].color
    }

    /// Number of distinct colors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.entries.iter().map(|e| e.color)
    }

    pub fn contains(&self, color: Color) -> bool {
        self.entries.iter().any(|e| e.color == color)
    }

    /// Total number of pixels the palette was built from.
    pub fn total_count(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }
}
