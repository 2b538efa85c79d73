//! Graph engine for topological sorting and cycle detection.

pub mod cycle;
pub mod relation;
pub mod topology;

pub use cycle::{check_acyclic, find_cycle};
pub use relation::RelationGraph;
pub use topology::resolve;
