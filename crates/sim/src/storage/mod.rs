//! Persistence of run progress.
//!
//! Snapshots of the best replica are written as PNG files on a schedule
//! controlled by [`RecordingStrategy`].

mod recorder;
mod strategy;

pub use recorder::SnapshotRecorder;
pub use strategy::RecordingStrategy;
