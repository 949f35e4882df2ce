//! Tour cost evaluation.

mod evaluator;

pub use evaluator::{tour_cost, TourEvaluator};
