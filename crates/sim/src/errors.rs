use pyxelator_raster::{Canvas, RasterError};
use std::error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised while validating, loading or saving a [`Configuration`].
///
/// [`Configuration`]: crate::simulation::Configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Population size must be at least 1.
    ZeroPopulationSize,
    /// The mutation factor is the inverse of a probability and cannot be 0.
    ZeroMutationFactor,
    /// Dots need a diameter of at least one pixel.
    ZeroDotSize,
    /// Snapshot interval must be at least 1.
    ZeroPersistInterval,
    /// The canvas has no pixels.
    EmptyCanvas { width: u32, height: u32 },
    /// Not a single dot fits inside the canvas once the inset is removed.
    GridTooSmall {
        width: u32,
        height: u32,
        dot_size: u32,
        inset: u32,
    },
    /// Reading or writing a configuration file failed.
    Io { path: PathBuf, source: io::Error },
    /// A configuration file did not contain valid JSON.
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroPopulationSize => write!(f, "Population size must be at least 1"),
            Self::ZeroMutationFactor => write!(f, "Mutation factor must be at least 1"),
            Self::ZeroDotSize => write!(f, "Dot size must be at least 1 pixel"),
            Self::ZeroPersistInterval => write!(f, "Snapshot interval must be at least 1"),
            Self::EmptyCanvas { width, height } => {
                write!(f, "Canvas {width}x{height} has no pixels")
            }
            Self::GridTooSmall {
                width,
                height,
                dot_size,
                inset,
            } => write!(
                f,
                "No dot of size {dot_size} fits a {width}x{height} canvas with inset {inset}"
            ),
            Self::Io { path, source } => {
                write!(f, "Configuration file {}: {source}", path.display())
            }
            Self::Parse(msg) => write!(f, "Invalid configuration: {msg}"),
        }
    }
}

impl error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

/// Error returned when a palette would contain no colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteError {
    Empty,
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Palette must contain at least one color"),
        }
    }
}

impl error::Error for PaletteError {}

/// Errors that can occur when building a mutation model.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationError {
    /// The factor does not describe a probability in (0, 1].
    InvalidFactor(u32),
}

impl fmt::Display for MutationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFactor(factor) => {
                write!(f, "Invalid mutation factor: {factor} (must be at least 1)")
            }
        }
    }
}

impl error::Error for MutationError {}

/// Errors raised while creating or advancing a [`Simulation`].
///
/// [`Simulation`]: crate::simulation::Simulation
#[derive(Debug)]
pub enum SimulationError {
    Config(ConfigError),
    Palette(PaletteError),
    Mutation(MutationError),
    /// The target raster does not have the configured canvas size.
    TargetMismatch { expected: Canvas, actual: Canvas },
    /// The population cannot be empty.
    EmptyPopulation,
    /// `step` was called after the configured number of generations.
    Finished { generation: usize },
    /// Rendering or writing a replica failed.
    Raster(RasterError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Palette(e) => write!(f, "Palette error: {e}"),
            Self::Mutation(e) => write!(f, "Mutation error: {e}"),
            Self::TargetMismatch { expected, actual } => {
                write!(f, "Target image is {actual}, expected {expected}")
            }
            Self::EmptyPopulation => write!(f, "Population must contain at least one individual"),
            Self::Finished { generation } => {
                write!(f, "Simulation already finished at generation {generation}")
            }
            Self::Raster(e) => write!(f, "Raster error: {e}"),
        }
    }
}

impl error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Palette(e) => Some(e),
            Self::Mutation(e) => Some(e),
            Self::Raster(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for SimulationError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<PaletteError> for SimulationError {
    fn from(e: PaletteError) -> Self {
        Self::Palette(e)
    }
}

impl From<MutationError> for SimulationError {
    fn from(e: MutationError) -> Self {
        Self::Mutation(e)
    }
}

impl From<RasterError> for SimulationError {
    fn from(e: RasterError) -> Self {
        Self::Raster(e)
    }
}

/// Errors that can occur during simulation building.
#[derive(Debug)]
pub enum BuilderError {
    /// A required parameter is missing
    MissingRequired(&'static str),
    /// An invalid parameter value was provided
    InvalidParameter(String),
    /// The simulation could not be created from the collected parameters
    Simulation(SimulationError),
}

impl fmt::Display for BuilderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequired(name) => write!(f, "Missing required parameter: {name}"),
            Self::InvalidParameter(msg) => write!(f, "Invalid parameter: {msg}"),
            Self::Simulation(e) => write!(f, "Failed to create simulation: {e}"),
        }
    }
}

impl error::Error for BuilderError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Simulation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for BuilderError {
    fn from(e: ConfigError) -> Self {
        Self::InvalidParameter(e.to_string())
    }
}

impl From<SimulationError> for BuilderError {
    fn from(e: SimulationError) -> Self {
        Self::Simulation(e)
    }
}
