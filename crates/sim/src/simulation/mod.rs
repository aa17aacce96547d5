//! Simulation engine and population management.
//!
//! The most commonly used types are re-exported here:
//!
//! - `Simulation`: the engine that runs generations.
//! - `Population`: the ranked individuals of the current generation.
//! - `SimulationBuilder`: fluent builder over `Configuration`.

pub mod builder;
mod cancel;
pub mod configs;
pub mod engine;
pub mod population;

pub use builder::SimulationBuilder;
pub use cancel::CancelToken;
pub use configs::{CanvasConfig, Configuration, EvolutionConfig, ExecutionConfig};
pub use engine::{RunOutcome, Simulation, SimulationState};
pub use population::Population;
