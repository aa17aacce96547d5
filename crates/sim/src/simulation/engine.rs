//! Generation engine.
//!
//! This module owns the run loop: initial random population, then repeated
//! elitist selection, uniform crossover, per-dot mutation and re-ranking.
//!
//! All randomness of a generation is drawn sequentially from the master RNG
//! before the parallel section: the mate index and a sub-seed per offspring.
//! Each offspring is then bred and scored on the rayon pool with its own
//! `Xoshiro256PlusPlus`, so a seeded run is bit-identical for any thread
//! count.

use std::sync::Arc;

use pyxelator_raster::RasterBuffer;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;

use crate::base::{Background, FitnessValue, Palette};
use crate::errors::SimulationError;
use crate::evolution::{ElitistSelection, FitnessEvaluator, MutationModel};
use crate::genome::{Grid, Individual, Replica};
use crate::simulation::{CancelToken, Configuration, Population};

/// Lifecycle of a [`Simulation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationState {
    /// Initial population scored, no generation run yet.
    Initialized,
    /// At least one generation run, more to go.
    Evolving,
    /// Generations `0..=total_generations` have all been run.
    Terminal,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed { generation: usize },
    Cancelled { generation: usize },
}

impl RunOutcome {
    pub fn generation(&self) -> usize {
        match self {
            Self::Completed { generation } | Self::Cancelled { generation } => *generation,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

/// Main simulation engine.
#[derive(Debug)]
pub struct Simulation {
    /// Current population, best first
    population: Population,
    /// Distinct colors of the target
    palette: Arc<Palette>,
    /// Dot positions shared by all replicas
    grid: Grid,
    mutation: MutationModel,
    selection: ElitistSelection,
    evaluator: FitnessEvaluator,
    config: Configuration,
    /// Seed the master RNG was created from
    seed: u64,
    /// Master RNG (Xoshiro256++)
    rng: Xoshiro256PlusPlus,
}

impl Simulation {
    /// Create a simulation approximating `target` and score its initial
    /// population.
    ///
    /// # Errors
    /// Fails on an invalid configuration, a target whose size differs from
    /// the configured canvas, or a renderer failure.
    pub fn new(config: Configuration, target: RasterBuffer) -> Result<Self, SimulationError> {
        config.validate()?;

        let expected = config.canvas.canvas();
        if target.canvas() != expected {
            return Err(SimulationError::TargetMismatch {
                expected,
                actual: target.canvas(),
            });
        }

        let palette = Arc::new(Palette::from_raster(&target)?);
        let background = palette.background();
        let grid = config.canvas.grid()?;
        let mutation =
            MutationModel::with_sampling(config.evolution.mutation_factor, config.evolution.sampling)?;
        let selection = ElitistSelection::new(config.execution.population_size);
        let evaluator = FitnessEvaluator::new(
            Arc::new(target),
            config.execution.renderer,
            config.canvas.dot_size,
            background,
        );

        let seed = config.execution.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

        log::info!(
            "{} colors, {} background, {} dots per replica, seed {seed}",
            palette.len(),
            background,
            grid.len()
        );

        // Generate seeds for each individual
        let seeds: Vec<u64> = (0..config.execution.population_size)
            .map(|_| rng.random())
            .collect();

        let individuals = seeds
            .par_iter()
            .map(|&seed| {
                let mut local_rng = Xoshiro256PlusPlus::seed_from_u64(seed);
                let replica = Replica::generate_random(&grid, &palette, &mut local_rng);
                let fitness = evaluator.score(&replica)?;
                Ok(Individual::new(replica, fitness))
            })
            .collect::<Result<Vec<_>, SimulationError>>()?;

        let population = Population::new(individuals)?;
        log::info!(
            "initial population of {} scored, best {}",
            population.size(),
            population.best_score()
        );

        Ok(Self {
            population,
            palette,
            grid,
            mutation,
            selection,
            evaluator,
            config,
            seed,
            rng,
        })
    }

    /// Advance one generation.
    ///
    /// The best `half` individuals survive unchanged; each survivor `i` is
    /// crossed with a uniformly drawn survivor and the mutated child joins
    /// the population, which is then re-ranked.
    ///
    /// # Errors
    /// Returns [`SimulationError::Finished`] once the run is terminal, or a
    /// render failure. The population is
    /// unchanged on error.
    pub fn step(&mut self) -> Result<(), SimulationError> {
        if self.state() == SimulationState::Terminal {
            return Err(SimulationError::Finished {
                generation: self.generation(),
            });
        }

        let half = self.selection.half();
        let pairs = self.selection.pairs(&mut self.rng);
        let seeds: Vec<u64> = (0..half).map(|_| self.rng.random()).collect();

        let survivors = self.selection.survivors(self.population.individuals());
        let palette = &*self.palette;
        let mutation = &self.mutation;
        let evaluator = &self.evaluator;

        let bred = pairs
            .par_iter()
            .zip(seeds.par_iter())
            .map(|(&(a, b), &seed)| {
                let mut local_rng = Xoshiro256PlusPlus::seed_from_u64(seed);
                let mut child =
                    Replica::crossover(survivors[a].replica(), survivors[b].replica(), &mut local_rng);
                let mutated = child.mutate(mutation, palette, &mut local_rng);
                let fitness = evaluator.score(&child)?;
                Ok((Individual::new(child, fitness), mutated))
            })
            .collect::<Result<Vec<_>, SimulationError>>()?;

        let mutated: usize = bred.iter().map(|(_, m)| m).sum();
        let offspring = bred.into_iter().map(|(ind, _)| ind).collect();

        self.population.replace(half, offspring);
        self.population.increment_generation();

        log::debug!(
            "generation {}: best {}, mean {:.4}, {} dots mutated",
            self.generation(),
            self.best_score(),
            self.population.mean_score(),
            mutated
        );
        Ok(())
    }

    /// Run generations `0..=total_generations`, i.e. `total_generations + 1`
    /// transitions.
    pub fn run(&mut self) -> Result<RunOutcome, SimulationError> {
        self.run_with(&CancelToken::new(), |_| Ok(()))
    }

    /// Run to completion or until `cancel` is set.
    ///
    /// The token is checked before every generation and `observer` is called
    /// after every completed one.
    pub fn run_with<F>(&mut self, cancel: &CancelToken, mut observer: F) -> Result<RunOutcome, SimulationError>
    where
        F: FnMut(&Simulation) -> Result<(), SimulationError>,
    {
        let total = self.total_generations();
        while self.generation() <= total {
            if cancel.is_cancelled() {
                log::info!("run cancelled at generation {}", self.generation());
                return Ok(RunOutcome::Cancelled {
                    generation: self.generation(),
                });
            }
            self.step()?;
            observer(self)?;
        }

        log::info!(
            "run completed after {} generations, best {}",
            self.generation(),
            self.best_score()
        );
        Ok(RunOutcome::Completed {
            generation: self.generation(),
        })
    }

    pub fn state(&self) -> SimulationState {
        let generation = self.generation();
        if generation > self.total_generations() {
            SimulationState::Terminal
        } else if generation == 0 {
            SimulationState::Initialized
        } else {
            SimulationState::Evolving
        }
    }

    /// Render the current best replica over the run's background.
    pub fn render_best(&self) -> Result<RasterBuffer, SimulationError> {
        self.evaluator.render(self.best().replica())
    }

    /// Get the best individual.
    pub fn best(&self) -> &Individual {
        self.population.best()
    }

    pub fn best_score(&self) -> FitnessValue {
        self.population.best_score()
    }

    /// Get the current population.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Get the number of completed generations.
    pub fn generation(&self) -> usize {
        self.population.generation()
    }

    /// Zero-based number of the most recently evolved generation, `None`
    /// before the first transition.
    pub fn latest_generation(&self) -> Option<usize> {
        self.generation().checked_sub(1)
    }

    pub fn total_generations(&self) -> usize {
        self.config.execution.total_generations
    }

    /// Get reference to the run configuration.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn background(&self) -> Background {
        self.evaluator.background()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Seed of the master RNG, drawn at random when none was configured.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
