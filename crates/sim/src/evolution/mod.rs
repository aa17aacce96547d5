//! Evolutionary operators and scoring.
//!
//! - **Mutation**: per-dot palette redraws with probability `1 / factor`
//! - **Recombination**: uniform crossover of two parents
//! - **Selection**: elitist truncation keeping the better half
//! - **Fitness**: rendering a replica and measuring its pixel difference

pub mod fitness;
pub mod mutation;
pub mod recombination;
pub mod selection;

pub use fitness::{difference, FitnessEvaluator};
pub use mutation::{MutationModel, MutationSampling};
pub use recombination::UniformCrossover;
pub use selection::ElitistSelection;
