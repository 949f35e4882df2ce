//! Nearest-neighbor tour construction.
//!
//! Starting from the depot, always move to the cheapest unvisited node with a
//! direct edge (smallest index on ties), then return to the depot.
//!
//! # Complexity
//!
//! O(n²).
//!
//! # Quality
//!
//! A heuristic: no optimality guarantee and no approximation bound. It can
//! also walk into a node from which no unvisited node (or the depot) is
//! reachable even when a tour exists.

use log::debug;

use crate::distance::CostMatrix;
use crate::error::{PlanningError, Result};
use crate::evaluation::TourEvaluator;
use crate::models::{Tour, DEPOT};

use super::{SearchBudget, TourPlanner};

/// Nearest-neighbor planner. Fast, not optimal.
///
/// # Examples
///
/// ```
/// use u_tourplan::distance::CostMatrix;
/// use u_tourplan::search::{GreedySearch, TourPlanner};
///
/// let cm = CostMatrix::from_points(&[(0.0, 0.0), (10.0, 0.0), (1.0, 0.0)]);
/// let tour = GreedySearch.plan(&cm).unwrap();
/// assert_eq!(tour.nodes(), &[0, 2, 1, 0]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySearch;

impl TourPlanner for GreedySearch {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn plan_with_budget(
        &self,
        matrix: &CostMatrix,
        budget: &mut SearchBudget<'_>,
    ) -> Result<Tour> {
        let n = matrix.size();
        if n == 1 {
            return Ok(Tour::new(vec![DEPOT, DEPOT], 0.0));
        }

        let evaluator = TourEvaluator::new(matrix);
        let mut remaining: Vec<usize> = (1..n).collect();
        let mut path = Vec::with_capacity(n + 1);
        path.push(DEPOT);
        let mut current = DEPOT;
        let mut cost = 0.0;

        while !remaining.is_empty() {
            budget.tick()?;
            let next = matrix
                .nearest_neighbor(current, &remaining)
                .ok_or(PlanningError::NoFeasibleSuccessor { from: current })?;
            cost += evaluator.step(current, next)?;
            remaining.retain(|&c| c != next);
            path.push(next);
            current = next;
        }

        cost += evaluator
            .step(current, DEPOT)
            .map_err(|_| PlanningError::NoFeasibleSuccessor { from: current })?;
        path.push(DEPOT);

        debug!("greedy: n={n} cost={cost}");
        Ok(Tour::new(path, cost))
    }
}
