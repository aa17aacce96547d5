//! Recombination of two parent replicas.

use crate::genome::Replica;
use rand::Rng;

/// Uniform crossover: every dot is taken from either parent with a fair coin.
///
/// Positions are identical at every index across a run, so the child keeps
/// the shared layout and only colors are mixed. Crossing a replica with
/// itself returns a copy.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformCrossover;

impl UniformCrossover {
    pub fn crossover<R: Rng + ?Sized>(&self, a: &Replica, b: &Replica, rng: &mut R) -> Replica {
        debug_assert_eq!(a.len(), b.len(), "crossover of replicas with different grids");

        let dots = a
            .dots()
            .iter()
            .zip(b.dots())
            .map(|(da, db)| {
                debug_assert_eq!(da.position(), db.position());
                // random::<f64>() is cheaper than random_bool
                if rng.random::<f64>() < 0.5 {
                    *da
                } else {
                    *db
                }
            })
            .collect();

        Replica::from_dots(dots)
    }
}
