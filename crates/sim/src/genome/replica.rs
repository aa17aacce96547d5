use pyxelator_raster::{Disc, RasterBuffer, Renderer};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::base::{Background, Palette};
use crate::errors::SimulationError;
use crate::evolution::{MutationModel, UniformCrossover};
use crate::genome::{Dot, Grid};

/// A candidate image: one dot per grid position, in raster-scan order.
///
/// All replicas of a run share the same length and the same position at
/// every index; evolution only changes colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replica {
    dots: Vec<Dot>,
}

impl Replica {
    /// Create a replica from dots already in grid order.
    pub fn from_dots(dots: Vec<Dot>) -> Self {
        Self { dots }
    }

    /// One independently drawn palette color per grid position.
    pub fn generate_random<R: Rng + ?Sized>(grid: &Grid, palette: &Palette, rng: &mut R) -> Self {
        let dots = grid
            .positions()
            .iter()
            .map(|&position| Dot::new(position, palette.choose(rng)))
            .collect();
        Self { dots }
    }

    /// Uniform crossover of `a` and `b`, see [`UniformCrossover`].
    pub fn crossover<R: Rng + ?Sized>(a: &Replica, b: &Replica, rng: &mut R) -> Replica {
        UniformCrossover.crossover(a, b, rng)
    }

    /// Mutate dots in place and return how many were redrawn.
    pub fn mutate<R: Rng + ?Sized>(
        &mut self,
        model: &MutationModel,
        palette: &Palette,
        rng: &mut R,
    ) -> usize {
        model.mutate_replica(self, palette, rng)
    }

    /// Paint the replica over a solid background.
    pub fn render<T: Renderer + ?Sized>(
        &self,
        renderer: &T,
        diameter: u32,
        background: Background,
        canvas: pyxelator_raster::Canvas,
    ) -> Result<RasterBuffer, SimulationError> {
        let discs: Vec<Disc> = self.dots.iter().map(Dot::disc).collect();
        Ok(renderer.render(&discs, diameter, background.color(), canvas)?)
    }

    #[inline]
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    #[inline]
    pub(crate) fn dots_mut(&mut self) -> &mut [Dot] {
        &mut self.dots
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.dots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }
}
