//! Exhaustive enumeration of every tour.
//!
//! # Algorithm
//!
//! Walks the orderings of the non-depot nodes in lexicographic order,
//! evaluates `depot → ordering → depot` for each, and keeps the first
//! ordering with the strictly lowest cost. Orderings that cross an absent
//! edge are skipped.
//!
//! # Complexity
//!
//! O(n · (n-1)!). Only practical for small n; used as ground truth for the
//! other strategies.

use log::debug;

use crate::distance::CostMatrix;
use crate::error::{PlanningError, Result};
use crate::evaluation::TourEvaluator;
use crate::models::{Tour, DEPOT};

use super::{SearchBudget, TourPlanner};

/// Brute-force planner. Always optimal.
///
/// # Examples
///
/// ```
/// use u_tourplan::distance::CostMatrix;
/// use u_tourplan::search::{ExhaustiveSearch, TourPlanner};
///
/// let cm = CostMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
/// let tour = ExhaustiveSearch.plan(&cm).unwrap();
/// assert!((tour.cost() - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveSearch;

impl TourPlanner for ExhaustiveSearch {
    fn name(&self) -> &'static str {
        "exhaustive"
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
        let mut sequence: Vec<usize> = (0..n).chain(std::iter::once(DEPOT)).collect();
        let mut best: Option<(Vec<usize>, f64)> = None;
        let mut feasible = 0usize;

        loop {
            budget.tick()?;
            if let Ok(cost) = evaluator.cost(&sequence) {
                feasible += 1;
                if best.as_ref().is_none_or(|(_, b)| cost < *b) {
                    best = Some((sequence.clone(), cost));
                }
            }
            if !next_permutation(&mut sequence[1..n]) {
                break;
            }
        }

        debug!(
            "exhaustive: n={n} orderings={} feasible={feasible}",
            budget.expansions()
        );
        best.map(|(nodes, cost)| Tour::new(nodes, cost))
            .ok_or(PlanningError::NoFeasibleTour)
    }
}

/// Rearranges `items` into the next lexicographic permutation.
///
/// Returns `false` (leaving `items` untouched) if it is already the last one.
fn next_permutation(items: &mut [usize]) -> bool {
    if items.len() < 2 {
        return false;
    }
    let Some(pivot) = (0..items.len() - 1).rev().find(|&i| items[i] < items[i + 1]) else {
        return false;
    };
    let successor = (pivot + 1..items.len())
        .rev()
        .find(|&j| items[j] > items[pivot])
        .unwrap_or(pivot + 1);
    items.swap(pivot, successor);
    items[pivot + 1..].reverse();
    true
}
