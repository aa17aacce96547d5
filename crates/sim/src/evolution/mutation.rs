//! Per-dot color mutation.
//!
//! Every dot of an offspring is redrawn from the palette with probability
//! `1 / factor`, independently of every other dot. Two samplers produce that
//! distribution:
//!
//! - [`MutationSampling::PerDot`] flips one Bernoulli coin per dot.
//! - [`MutationSampling::Sparse`] draws geometric gaps between mutated dots,
//!   which visits only the dots that actually change. For small
//!   probabilities this is much cheaper and the set of mutated dots has the
//!   same distribution.

use std::fmt;

pub use crate::errors::MutationError;
use crate::base::Palette;
use crate::genome::Replica;
use rand::Rng;
use rand::distr::Bernoulli;
use rand_distr::{Distribution, Geometric};
use serde::{Deserialize, Serialize};

/// How mutated dots are sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationSampling {
    /// One Bernoulli trial per dot.
    #[default]
    PerDot,
    /// Geometric skips between mutated dots.
    Sparse,
}

impl fmt::Display for MutationSampling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PerDot => write!(f, "perdot"),
            Self::Sparse => write!(f, "sparse"),
        }
    }
}

impl std::str::FromStr for MutationSampling {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "perdot" => Ok(Self::PerDot),
            "sparse" => Ok(Self::Sparse),
            _ => Err(format!("Unknown mutation sampling: {s}. Available: perdot, sparse")),
        }
    }
}

/// Per-dot mutation with probability `1 / factor`.
#[derive(Debug, Clone)]
pub struct MutationModel {
    factor: u32,
    sampling: MutationSampling,
    trial: Bernoulli,
    gap: Geometric,
}

impl MutationModel {
    /// Create a model mutating each dot with probability `1 / factor`.
    ///
    /// # Errors
    /// Returns [`MutationError::InvalidFactor`] when `factor` is 0.
    pub fn new(factor: u32) -> Result<Self, MutationError> {
        Self::with_sampling(factor, MutationSampling::default())
    }

    pub fn with_sampling(factor: u32, sampling: MutationSampling) -> Result<Self, MutationError> {
        if factor == 0 {
            return Err(MutationError::InvalidFactor(factor));
        }
        let p = 1.0 / factor as f64;
        let trial = Bernoulli::new(p).map_err(|_| MutationError::InvalidFactor(factor))?;
        let gap = Geometric::new(p).map_err(|_| MutationError::InvalidFactor(factor))?;

        Ok(Self {
            factor,
            sampling,
            trial,
            gap,
        })
    }

    pub fn factor(&self) -> u32 {
        self.factor
    }

    pub fn sampling(&self) -> MutationSampling {
        self.sampling
    }

    /// Per-dot mutation probability.
    pub fn probability(&self) -> f64 {
        1.0 / self.factor as f64
    }

    /// Mutate `replica` in place using the configured sampler.
    ///
    /// Returns the number of dots that were redrawn. A redrawn dot may land on
    /// its previous color.
    pub fn mutate_replica<R: Rng + ?Sized>(
        &self,
        replica: &mut Replica,
        palette: &Palette,
        rng: &mut R,
    ) -> usize {
        match self.sampling {
            MutationSampling::PerDot => self.mutate_per_dot(replica, palette, rng),
            MutationSampling::Sparse => self.mutate_sparse(replica, palette, rng),
        }
    }

    /// One Bernoulli trial per dot.
    pub fn mutate_per_dot<R: Rng + ?Sized>(
        &self,
        replica: &mut Replica,
        palette: &Palette,
        rng: &mut R,
    ) -> usize {
        let mut count = 0;
        for dot in replica.dots_mut() {
            if self.trial.sample(rng) {
                dot.mutate(palette, rng);
                count += 1;
            }
        }
        count
    }

    /// Jump straight to the next mutated dot with a geometric skip.
    pub fn mutate_sparse<R: Rng + ?Sized>(
        &self,
        replica: &mut Replica,
        palette: &Palette,
        rng: &mut R,
    ) -> usize {
        let dots = replica.dots_mut();
        let len = dots.len();
        let mut count = 0;
        let mut pos = 0usize;

        loop {
            let skip = self.gap.sample(rng);
            pos = match usize::try_from(skip).ok().and_then(|s| pos.checked_add(s)) {
                Some(p) if p < len => p,
                _ => break,
            };
            dots[pos].mutate(palette, rng);
            count += 1;
            pos += 1;
        }
        count
    }
}
