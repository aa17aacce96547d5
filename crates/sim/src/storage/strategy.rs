use serde::{Deserialize, Serialize};

/// When snapshots are written during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordingStrategy {
    /// Record generation 0, every Nth after it, and the final one.
    EveryN(usize),

    /// Record the final generation only.
    Final,

    /// No recording.
    None,
}

impl RecordingStrategy {
    /// Check if zero-based `generation` should be recorded in a run whose
    /// last generation is `total`.
    pub fn should_record(&self, generation: usize, total: usize) -> bool {
        match self {
            Self::EveryN(n) => {
                generation == total || (*n > 0 && generation.is_multiple_of(*n))
            }
            Self::Final => generation == total,
            Self::None => false,
        }
    }
}
