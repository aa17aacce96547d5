//! Writing snapshots of the best replica while a run progresses.

use std::path::{Path, PathBuf};

use pyxelator_raster::{Color, SnapshotWriter};

use crate::errors::SimulationError;
use crate::simulation::Simulation;
use crate::storage::RecordingStrategy;

/// Renders the best replica and saves it as a PNG on schedule.
///
/// Snapshots are labelled with the zero-based generation they show, so the
/// first evolved generation is `0` and a run of `total_generations` ends with
/// label `total_generations`. Light-background runs get a black border so
/// the edge of the canvas stays visible.
#[derive(Debug, Clone)]
pub struct SnapshotRecorder {
    writer: SnapshotWriter,
    strategy: RecordingStrategy,
    written: usize,
    last: Option<(usize, PathBuf)>,
}

impl SnapshotRecorder {
    pub fn new(writer: SnapshotWriter, strategy: RecordingStrategy) -> Self {
        Self {
            writer,
            strategy,
            written: 0,
            last: None,
        }
    }

    /// Recorder for `sim`, writing every `persist_every` generations.
    pub fn for_simulation(sim: &Simulation, dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        let mut writer = SnapshotWriter::new(dir, prefix);
        if sim.background().is_light() {
            writer = writer.with_border(Color::BLACK);
        }
        let strategy = RecordingStrategy::EveryN(sim.config().execution.persist_every);
        Self::new(writer, strategy)
    }

    /// Save a snapshot if the schedule asks for the latest generation.
    pub fn observe(&mut self, sim: &Simulation) -> Result<Option<PathBuf>, SimulationError> {
        let Some(latest) = sim.latest_generation() else {
            return Ok(None);
        };
        if !self.strategy.should_record(latest, sim.total_generations()) {
            return Ok(None);
        }
        self.snapshot(sim).map(Some)
    }

    /// Save a snapshot of the current best replica unconditionally.
    pub fn snapshot(&mut self, sim: &Simulation) -> Result<PathBuf, SimulationError> {
        let raster = sim.render_best()?;
        let score = sim.best_score();
        let label = sim.latest_generation().unwrap_or(0);
        let path = self.writer.save(&raster, label, score.get())?;

        log::info!("generation {label}: best {score}, saved {}", path.display());
        self.written += 1;
        self.last = Some((sim.generation(), path.clone()));
        Ok(path)
    }

    /// Make sure the current generation has a snapshot on disk.
    ///
    /// Used when a run ends early or without any scheduled snapshot; returns
    /// the existing path when the generation was already recorded.
    pub fn finish(&mut self, sim: &Simulation) -> Result<PathBuf, SimulationError> {
        if let Some((generation, path)) = &self.last {
            if *generation == sim.generation() {
                return Ok(path.clone());
            }
        }
        self.snapshot(sim)
    }

    pub fn dir(&self) -> &Path {
        self.writer.dir()
    }

    /// Number of snapshots written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn last_path(&self) -> Option<&Path> {
        self.last.as_ref().map(|(_, path)| path.as_path())
    }

    pub fn strategy(&self) -> RecordingStrategy {
        self.strategy
    }
}
