//! Best-first branch-and-bound over partial tours.
//!
//! # Algorithm
//!
//! 1. Seed the frontier with the depot alone.
//! 2. Pop the lowest-priority candidate. If it has returned to the depot it
//!    is a complete tour and, since every cheaper candidate was expanded
//!    first, an optimal one.
//! 3. Otherwise extend it by every unvisited node reachable over a direct
//!    edge (the depot only once every node is on the path) and push the
//!    extensions back.
//!
//! Running out of candidates means no tour exists.
//!
//! [`InformedSearch`](super::InformedSearch) runs the same loop with a
//! lower bound added to each priority.

use log::{debug, trace};

use crate::distance::CostMatrix;
use crate::error::{PlanningError, Result};
use crate::evaluation::TourEvaluator;
use crate::models::{Tour, DEPOT};

use super::{Candidate, PriorityFrontier, SearchBudget, TourPlanner};

/// Best-first planner ordered by accumulated path cost. Always optimal.
///
/// # Examples
///
/// ```
/// use u_tourplan::distance::CostMatrix;
/// use u_tourplan::search::{BranchAndBoundSearch, TourPlanner};
///
/// let cm = CostMatrix::from_rows(vec![
///     vec![0.0, 1.0, 0.0, 1.0],
///     vec![1.0, 0.0, 1.0, 0.0],
///     vec![0.0, 1.0, 0.0, 1.0],
///     vec![1.0, 0.0, 1.0, 0.0],
/// ])
/// .unwrap();
/// let tour = BranchAndBoundSearch.plan(&cm).unwrap();
/// assert_eq!(tour.cost(), 4.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BranchAndBoundSearch;

impl TourPlanner for BranchAndBoundSearch {
    fn name(&self) -> &'static str {
        "branch_and_bound"
    }

    fn plan_with_budget(
        &self,
        matrix: &CostMatrix,
        budget: &mut SearchBudget<'_>,
    ) -> Result<Tour> {
        best_first(self.name(), matrix, budget, |_| 0.0)
    }
}

/// Shared best-first loop.
///
/// `bound` maps a prefix to a lower bound on the cost still needed to finish
/// the tour from it; a candidate's priority is its cost plus that bound.
pub(crate) fn best_first<F>(
    name: &str,
    matrix: &CostMatrix,
    budget: &mut SearchBudget<'_>,
    bound: F,
) -> Result<Tour>
where
    F: Fn(&[usize]) -> f64,
{
    let n = matrix.size();
    if n == 1 {
        return Ok(Tour::new(vec![DEPOT, DEPOT], 0.0));
    }

    let evaluator = TourEvaluator::new(matrix);
    let mut frontier = PriorityFrontier::new();
    frontier.push(Candidate::root(bound(&[DEPOT])));

    while let Some(current) = frontier.pop() {
        budget.tick()?;
        trace!(
            "{name}: pop {:?} cost={} priority={} frontier={}",
            current.path(),
            current.cost(),
            current.priority(),
            frontier.len()
        );

        if current.is_closed() {
            debug!(
                "{name}: n={n} cost={} expansions={} inserted={}",
                current.cost(),
                budget.expansions(),
                frontier.inserted()
            );
            let cost = current.cost();
            return Ok(Tour::new(current.into_path(), cost));
        }

        let last = current.last();
        let complete = current.len() == n;
        for next in 0..n {
            let allowed = if next == DEPOT {
                complete
            } else {
                !current.path().contains(&next)
            };
            if !allowed {
                continue;
            }
            let Ok(step) = evaluator.step(last, next) else {
                continue;
            };
            let mut path = Vec::with_capacity(current.len() + 1);
            path.extend_from_slice(current.path());
            path.push(next);
            let cost = current.cost() + step;
            let priority = cost + bound(&path);
            frontier.push(Candidate::new(path, cost, priority));
        }
    }

    debug!(
        "{name}: n={n} frontier exhausted after {} expansions",
        budget.expansions()
    );
    Err(PlanningError::NoFeasibleTour)
}
