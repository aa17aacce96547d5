//! Scoring replicas against the target image.

use std::sync::Arc;

use pyxelator_raster::{RasterBuffer, RenderStrategy};
use rayon::prelude::*;

use crate::base::{Background, FitnessValue};
use crate::errors::SimulationError;
use crate::genome::Replica;

/// Bytes summed per rayon task.
const CHUNK_BYTES: usize = 64 * 1024;

/// Percentage difference between two rasters of the same canvas.
///
/// The absolute per-channel differences are summed as integers, so the result
/// does not depend on how the work is split across threads:
/// `sum / 255 * 100 / (pixels * channels)`.
///
/// # Errors
/// Returns [`SimulationError::TargetMismatch`] when the canvases differ.
pub fn difference(a: &RasterBuffer, b: &RasterBuffer) -> Result<f64, SimulationError> {
    if a.canvas() != b.canvas() {
        return Err(SimulationError::TargetMismatch {
            expected: b.canvas(),
            actual: a.canvas(),
        });
    }

    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.is_empty() {
        return Ok(0.0);
    }

    let sum: u64 = a
        .par_chunks(CHUNK_BYTES)
        .zip(b.par_chunks(CHUNK_BYTES))
        .map(|(ca, cb)| {
            ca.iter()
                .zip(cb)
                .map(|(&x, &y)| x.abs_diff(y) as u64)
                .sum::<u64>()
        })
        .sum();

    Ok(sum as f64 / 255.0 * 100.0 / a.len() as f64)
}

/// Renders replicas and scores them against a fixed target.
#[derive(Debug, Clone)]
pub struct FitnessEvaluator {
    target: Arc<RasterBuffer>,
    renderer: RenderStrategy,
    diameter: u32,
    background: Background,
}

impl FitnessEvaluator {
    pub fn new(
        target: Arc<RasterBuffer>,
        renderer: RenderStrategy,
        diameter: u32,
        background: Background,
    ) -> Self {
        Self {
            target,
            renderer,
            diameter,
            background,
        }
    }

    /// Paint `replica` on the target's canvas.
    pub fn render(&self, replica: &Replica) -> Result<RasterBuffer, SimulationError> {
        replica.render(&self.renderer, self.diameter, self.background, self.target.canvas())
    }

    /// Score `replica`; lower is better.
    pub fn score(&self, replica: &Replica) -> Result<FitnessValue, SimulationError> {
        let rendered = self.render(replica)?;
        Ok(FitnessValue::new(difference(&rendered, &self.target)?))
    }

    pub fn target(&self) -> &RasterBuffer {
        &self.target
    }

    pub fn background(&self) -> Background {
        self.background
    }

    pub fn renderer(&self) -> RenderStrategy {
        self.renderer
    }

    pub fn diameter(&self) -> u32 {
        self.diameter
    }
}
