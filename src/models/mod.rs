//! Domain model types for tour planning.
//!
//! A tour is the only output of a planning call: the depot, every other
//! node once, and the depot again.

mod tour;

pub use tour::{Tour, DEPOT};
