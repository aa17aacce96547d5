//! Run configuration.
//!
//! A [`Configuration`] is resolved once per run and handed to the engine
//! explicitly. It round-trips through JSON so a run can be reproduced from a
//! file.

use std::fs;
use std::path::Path;

use pyxelator_raster::{Canvas, RenderStrategy};
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::evolution::MutationSampling;
use crate::genome::Grid;

/// The master configuration struct.
/// Can be deserialized from a file to fully reproduce a run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Configuration {
    pub execution: ExecutionConfig,
    pub evolution: EvolutionConfig,
    pub canvas: CanvasConfig,
}

/// High-level run parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Number of replicas in the initial population
    pub population_size: usize,
    /// Number of the last generation; generations `0..=total_generations` run
    pub total_generations: usize,
    /// Optional RNG seed for reproducibility
    pub seed: Option<u64>,
    /// Write a snapshot every this many generations
    pub persist_every: usize,
    /// Disc rasterizer
    #[serde(default)]
    pub renderer: RenderStrategy,
}

/// Evolutionary parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionConfig {
    /// Inverse per-dot mutation probability
    pub mutation_factor: u32,
    /// How mutated dots are sampled
    #[serde(default)]
    pub sampling: MutationSampling,
}

/// Canvas and dot grid layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// Dot diameter and grid spacing in pixels
    pub dot_size: u32,
    /// Offset of the grid from the canvas edge
    #[serde(default = "default_inset")]
    pub inset: u32,
}

fn default_inset() -> u32 {
    CanvasConfig::DEFAULT_INSET
}

impl ExecutionConfig {
    pub const DEFAULT_POPULATION_SIZE: usize = 100;
    pub const DEFAULT_GENERATIONS: usize = 4000;
    pub const DEFAULT_PERSIST_EVERY: usize = 25;
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            population_size: Self::DEFAULT_POPULATION_SIZE,
            total_generations: Self::DEFAULT_GENERATIONS,
            seed: None,
            persist_every: Self::DEFAULT_PERSIST_EVERY,
            renderer: RenderStrategy::default(),
        }
    }
}

impl EvolutionConfig {
    pub const DEFAULT_MUTATION_FACTOR: u32 = 600;
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            mutation_factor: Self::DEFAULT_MUTATION_FACTOR,
            sampling: MutationSampling::default(),
        }
    }
}

impl CanvasConfig {
    pub const DEFAULT_SIZE: u32 = 512;
    pub const DEFAULT_DOT_SIZE: u32 = 11;
    pub const DEFAULT_INSET: u32 = 3;

    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height)
    }

    /// Dot positions for this layout.
    pub fn grid(&self) -> Result<Grid, ConfigError> {
        Grid::new(self.canvas(), self.dot_size, self.inset)
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_SIZE,
            height: Self::DEFAULT_SIZE,
            dot_size: Self::DEFAULT_DOT_SIZE,
            inset: Self::DEFAULT_INSET,
        }
    }
}

impl Configuration {
    /// Check every parameter the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.execution.population_size == 0 {
            return Err(ConfigError::ZeroPopulationSize);
        }
        if self.execution.persist_every == 0 {
            return Err(ConfigError::ZeroPersistInterval);
        }
        if self.evolution.mutation_factor == 0 {
            return Err(ConfigError::ZeroMutationFactor);
        }
        self.canvas.grid().map(|_| ())
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Write the configuration as pretty-printed JSON.
    pub fn to_json_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        fs::write(path, self.to_json_string()?).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
