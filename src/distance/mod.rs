//! Cost matrix and shortest-path distances.
//!
//! Provides the dense cost matrix every strategy plans over, and the
//! Dijkstra oracle used to bound the informed search.

mod dijkstra;
mod matrix;

pub use dijkstra::{shortest_distances, Distances};
pub use matrix::CostMatrix;
