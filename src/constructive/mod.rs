//! Constructive heuristics for ordering delivery stops.
//!
//! - [`nearest_neighbor`] — Greedy nearest-neighbor sequencing, O(n²)

mod nearest_neighbor;

pub use nearest_neighbor::{nearest_neighbor, RouteSequencer};
