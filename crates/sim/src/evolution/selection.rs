//! Truncation selection keeping the better half.

use rand::Rng;

/// Elitist selection: the best `half` individuals survive unchanged and each
/// of them is paired with a uniformly drawn survivor to produce one
/// offspring.
///
/// `half` is `ceil(population_size / 2)` of the configured size, computed
/// once. After the first generation the population therefore holds
/// `2 * half` individuals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElitistSelection {
    half: usize,
}

impl ElitistSelection {
    pub fn new(population_size: usize) -> Self {
        Self {
            half: population_size.div_ceil(2),
        }
    }

    /// Number of survivors, equal to the number of offspring per generation.
    #[inline]
    pub fn half(&self) -> usize {
        self.half
    }

    /// The survivors of a population sorted best first.
    pub fn survivors<'a, T>(&self, sorted: &'a [T]) -> &'a [T] {
        &sorted[..self.half.min(sorted.len())]
    }

    /// Mate for survivor `i`: a uniform index in `0..half`, which may be `i`.
    pub fn pair<R: Rng + ?Sized>(&self, i: usize, rng: &mut R) -> (usize, usize) {
        (i, rng.random_range(0..self.half))
    }

    /// Parent pairs for one generation, drawn in survivor order.
    pub fn pairs<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<(usize, usize)> {
        (0..self.half).map(|i| self.pair(i, rng)).collect()
    }
}
