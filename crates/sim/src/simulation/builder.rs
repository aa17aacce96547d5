//! Builder pattern for creating simulations.
//!
//! Provides a fluent API over [`Configuration`] with the original program's
//! defaults and validation at `build` time.

pub use crate::errors::BuilderError;
use crate::evolution::MutationSampling;
use crate::simulation::{Configuration, Simulation};
use pyxelator_raster::{RasterBuffer, RenderStrategy};

/// Builder for constructing Simulation instances with a fluent API.
///
/// # Examples
///
/// ```
/// use pyxelator_raster::{Canvas, Color, RasterBuffer};
/// use pyxelator_sim::simulation::SimulationBuilder;
///
/// let target = RasterBuffer::new(Canvas::new(32, 32), Color::new(90, 20, 200)).unwrap();
/// let mut sim = SimulationBuilder::new()
///     .population_size(6)
///     .generations(3)
///     .canvas(32, 32)
///     .dot_size(5)
///     .seed(42)
///     .target(target)
///     .build()
///     .unwrap();
///
/// // generations 0 to 3
/// sim.run().unwrap();
/// assert_eq!(sim.generation(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimulationBuilder {
    config: Configuration,
    target: Option<RasterBuffer>,
}

impl SimulationBuilder {
    /// Create a new simulation builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn configuration(mut self, config: Configuration) -> Self {
        self.config = config;
        self
    }

    /// Set the initial population size.
    pub fn population_size(mut self, size: usize) -> Self {
        self.config.execution.population_size = size;
        self
    }

    /// Set the number of generations to run.
    pub fn generations(mut self, generations: usize) -> Self {
        self.config.execution.total_generations = generations;
        self
    }

    /// Set the RNG seed for reproducibility.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.execution.seed = Some(seed);
        self
    }

    /// Set the snapshot interval in generations.
    pub fn persist_every(mut self, generations: usize) -> Self {
        self.config.execution.persist_every = generations;
        self
    }

    pub fn renderer(mut self, renderer: RenderStrategy) -> Self {
        self.config.execution.renderer = renderer;
        self
    }

    /// Mutate each dot with probability `1 / factor`.
    pub fn mutation_factor(mut self, factor: u32) -> Self {
        self.config.evolution.mutation_factor = factor;
        self
    }

    pub fn sampling(mut self, sampling: MutationSampling) -> Self {
        self.config.evolution.sampling = sampling;
        self
    }

    /// Set the canvas size; it must match the target image.
    pub fn canvas(mut self, width: u32, height: u32) -> Self {
        self.config.canvas.width = width;
        self.config.canvas.height = height;
        self
    }

    /// Set the dot diameter, which is also the grid spacing.
    pub fn dot_size(mut self, dot_size: u32) -> Self {
        self.config.canvas.dot_size = dot_size;
        self
    }

    pub fn inset(mut self, inset: u32) -> Self {
        self.config.canvas.inset = inset;
        self
    }

    /// Set the image to approximate (required).
    pub fn target(mut self, target: RasterBuffer) -> Self {
        self.target = Some(target);
        self
    }

    /// Validate the parameters and create the simulation.
    pub fn build(self) -> Result<Simulation, BuilderError> {
        let target = self.target.ok_or(BuilderError::MissingRequired("target"))?;
        self.config.validate()?;
        Ok(Simulation::new(self.config, target)?)
    }

    /// The configuration collected so far.
    pub fn config(&self) -> &Configuration {
        &self.config
    }
}
