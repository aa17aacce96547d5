//! Genome structures: dots, the shared dot grid, replicas and scored individuals.

mod dot;
mod grid;
mod individual;
mod replica;

pub use dot::Dot;
pub use grid::Grid;
pub use individual::Individual;
pub use replica::Replica;
