use crate::base::FitnessValue;
use crate::genome::Replica;

/// A replica together with its score against the target.
///
/// The fitness is computed once when the individual is created and never
/// recomputed; survivors carry their score into the next generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    replica: Replica,
    fitness: FitnessValue,
}

impl Individual {
    pub fn new(replica: Replica, fitness: FitnessValue) -> Self {
        Self { replica, fitness }
    }

    #[inline]
    pub fn replica(&self) -> &Replica {
        &self.replica
    }

    #[inline]
    pub fn fitness(&self) -> FitnessValue {
        self.fitness
    }

    pub fn into_replica(self) -> Replica {
        self.replica
    }
}
