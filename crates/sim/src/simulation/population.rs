//! Population management.
//!
//! The population is kept sorted best first (ascending fitness) at all
//! times, so the best individual is always at index 0.

use crate::base::FitnessValue;
use crate::errors::SimulationError;
use crate::genome::Individual;

/// A ranked population of scored replicas.
#[derive(Debug, Clone)]
pub struct Population {
    /// The individuals, sorted ascending by fitness
    individuals: Vec<Individual>,
    /// Generation counter
    generation: usize,
}

impl Population {
    /// Create a population from individuals and rank them.
    ///
    /// # Errors
    /// Returns [`SimulationError::EmptyPopulation`] for an empty vector.
    pub fn new(individuals: Vec<Individual>) -> Result<Self, SimulationError> {
        if individuals.is_empty() {
            return Err(SimulationError::EmptyPopulation);
        }
        let mut population = Self {
            individuals,
            generation: 0,
        };
        population.sort();
        Ok(population)
    }

    /// Stable ascending sort by fitness.
    ///
    /// Equal scores keep their relative order, which keeps seeded runs
    /// reproducible.
    pub fn sort(&mut self) {
        self.individuals
            .sort_by(|a, b| a.fitness().total_cmp(&b.fitness()));
    }

    pub fn is_sorted(&self) -> bool {
        self.individuals
            .windows(2)
            .all(|w| w[0].fitness().total_cmp(&w[1].fitness()).is_le())
    }

    /// Get the current generation number.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Increment the generation counter.
    pub fn increment_generation(&mut self) {
        self.generation += 1;
    }

    /// Get the number of individuals in the population.
    pub fn size(&self) -> usize {
        self.individuals.len()
    }

    /// Always false; construction rejects empty populations.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Get all individuals, best first.
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    /// The best individual.
    pub fn best(&self) -> &Individual {
        &self.individuals[0]
    }

    pub fn best_score(&self) -> FitnessValue {
        self.best().fitness()
    }

    /// Mean score over the population.
    pub fn mean_score(&self) -> f64 {
        let total: f64 = self.individuals.iter().map(|i| i.fitness().get()).sum();
        total / self.individuals.len() as f64
    }

    /// Keep the first `survivors` individuals, append `offspring` and re-rank.
    ///
    /// Survivors are moved, never rescored.
    pub fn replace(&mut self, survivors: usize, offspring: Vec<Individual>) {
        self.individuals.truncate(survivors);
        self.individuals.extend(offspring);
        self.sort();
    }
}
