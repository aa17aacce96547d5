//! Base types shared by the genome and the engine.
//!
//! This module provides the fitness value newtype and the palette extracted
//! from the target image.

pub mod fitness;
mod palette;

pub use fitness::FitnessValue;
pub use palette::{Background, Palette, PaletteEntry};
