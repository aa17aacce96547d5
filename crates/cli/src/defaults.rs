//! Shared default values for run configuration.
//! These values are used by the `init` and `run` commands (via clap).

use pyxelator_sim::simulation::{CanvasConfig, EvolutionConfig, ExecutionConfig};

pub const CONFIG_FILE: &str = "pyxelator.json";
pub const OUTPUT_DIR: &str = "pyxelated";
pub const SNAPSHOT_PREFIX: &str = "pyx";

pub const POPULATION_SIZE: usize = ExecutionConfig::DEFAULT_POPULATION_SIZE;
pub const GENERATIONS: usize = ExecutionConfig::DEFAULT_GENERATIONS;
pub const PERSIST_EVERY: usize = ExecutionConfig::DEFAULT_PERSIST_EVERY;

// Evolution
pub const MUTATION_FACTOR: u32 = EvolutionConfig::DEFAULT_MUTATION_FACTOR;

// Canvas
pub const CANVAS_SIZE: u32 = CanvasConfig::DEFAULT_SIZE;
pub const DOT_SIZE: u32 = CanvasConfig::DEFAULT_DOT_SIZE;
pub const INSET: u32 = CanvasConfig::DEFAULT_INSET;

/// Colors listed by `inspect`.
pub const TOP_COLORS: usize = 10;
