//! Constructive heuristics for building dispatch routes.
//!
//! - [`nearest_neighbor`] — Quota-split greedy nearest-neighbor, O(v·n²)

mod nearest_neighbor;

pub use nearest_neighbor::{nearest_neighbor, RouteBuilder};
