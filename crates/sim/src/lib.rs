//! # Simulation Crate
//!
//! The `sim` crate provides the genetic algorithm that evolves a grid of
//! colored dots towards a target image. It includes the palette and
//! background extracted from the target, the dot genome, the evolutionary
//! operators (mutation, crossover, elitist selection), fitness scoring and
//! the generation engine.

pub mod base;
pub mod errors;
pub mod evolution;
pub mod genome;
pub mod prelude;
pub mod simulation;
pub mod storage;

pub use base::{Background, FitnessValue, Palette};
pub use simulation::{Configuration, Simulation, SimulationBuilder};
