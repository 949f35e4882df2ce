//! Tour planning strategies.
//!
//! - [`ExhaustiveSearch`] — every ordering, optimal, O(n!)
//! - [`GreedySearch`] — nearest neighbor, O(n²), no quality guarantee
//! - [`BranchAndBoundSearch`] — best-first on path cost, optimal
//! - [`InformedSearch`] — A* with a shortest-path lower bound, optimal
//! - [`RandomSearch`] — seeded shuffle, baseline only
//!
//! The two best-first strategies share [`PriorityFrontier`]. Every strategy
//! charges its work to a [`SearchBudget`], which is where expansion limits
//! and cancellation take effect.

mod branch_and_bound;
mod budget;
mod exhaustive;
mod frontier;
mod greedy;
mod informed;
mod random;
mod strategy;

pub use branch_and_bound::BranchAndBoundSearch;
pub use budget::SearchBudget;
pub use exhaustive::ExhaustiveSearch;
pub use frontier::{Candidate, PriorityFrontier};
pub use greedy::GreedySearch;
pub use informed::InformedSearch;
pub use random::RandomSearch;
pub use strategy::{StrategyKind, TourPlanner};
