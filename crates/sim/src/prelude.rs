//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use pyxelator_sim::prelude::*;
//!
//! let palette = Palette::from_counts([(Color::WHITE, 3), (Color::BLACK, 1)]).unwrap();
//! assert_eq!(palette.background(), Background::Light);
//! ```

pub use crate::base::{Background, FitnessValue, Palette};
pub use crate::errors::{BuilderError, ConfigError, SimulationError};
pub use crate::evolution::{FitnessEvaluator, MutationModel, MutationSampling};
pub use crate::genome::{Dot, Grid, Individual, Replica};
pub use crate::simulation::{
    CancelToken, Configuration, Population, RunOutcome, Simulation, SimulationBuilder,
    SimulationState,
};
pub use crate::storage::{RecordingStrategy, SnapshotRecorder};
pub use pyxelator_raster::{Canvas, Color, RasterBuffer, RenderStrategy};
