//! A* search over partial tours.
//!
//! Same loop as [`BranchAndBoundSearch`](super::BranchAndBoundSearch), with
//! each priority raised by a lower bound on the cost still needed.
//!
//! # Bound
//!
//! Let `back(u)` be the shortest-path distance from `u` to the depot. Every
//! completion of a prefix must still reach each unvisited node `u` and then
//! walk from it to the depot, so
//!
//! ```text
//! h(prefix) = max(back(u) for u unvisited)      if any node is unvisited
//!           = back(last)                        otherwise
//! ```
//!
//! never exceeds the true remaining cost. Summing distances over the
//! unvisited nodes instead would overshoot as soon as two of them lie on the
//! same route from the depot, and the search would lose optimality.
//!
//! `back` comes from Dijkstra on the transposed matrix, rooted at the depot;
//! on symmetric matrices it equals the depot-rooted distances.

use crate::distance::{shortest_distances, CostMatrix, Distances};
use crate::error::{PlanningError, Result};
use crate::models::{Tour, DEPOT};

use super::branch_and_bound::best_first;
use super::{SearchBudget, TourPlanner};

/// A* planner with a shortest-path lower bound. Always optimal.
///
/// Fails fast with [`PlanningError::NoFeasibleTour`] when some node cannot be
/// reached from the depot, or cannot reach it.
///
/// # Examples
///
/// ```
/// use u_tourplan::distance::CostMatrix;
/// use u_tourplan::search::{InformedSearch, TourPlanner};
///
/// let cm = CostMatrix::from_points(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0)]);
/// let tour = InformedSearch.plan(&cm).unwrap();
/// assert!((tour.cost() - 12.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct InformedSearch;

impl TourPlanner for InformedSearch {
    fn name(&self) -> &'static str {
        "informed"
    }

    fn plan_with_budget(
        &self,
        matrix: &CostMatrix,
        budget: &mut SearchBudget<'_>,
    ) -> Result<Tour> {
        if matrix.size() == 1 {
            return Ok(Tour::new(vec![DEPOT, DEPOT], 0.0));
        }
        let bound = ReturnBound::new(matrix)?;
        best_first(self.name(), matrix, budget, |path| bound.estimate(path))
    }
}

/// Lower bound on the cost of finishing a tour from a prefix.
pub(crate) struct ReturnBound {
    back: Distances,
}

impl ReturnBound {
    /// Runs the oracle in both directions from the depot.
    ///
    /// Fails if the depot and some node are not mutually reachable.
    pub(crate) fn new(matrix: &CostMatrix) -> Result<Self> {
        let out = shortest_distances(matrix, DEPOT);
        let back = shortest_distances(&matrix.transposed(), DEPOT);
        if !out.all_reachable() || !back.all_reachable() {
            return Err(PlanningError::NoFeasibleTour);
        }
        Ok(Self { back })
    }

    /// Bound for the given prefix.
    pub(crate) fn estimate(&self, path: &[usize]) -> f64 {
        let mut visited = vec![false; self.back.len()];
        for &node in path {
            visited[node] = true;
        }
        let unvisited = visited
            .iter()
            .enumerate()
            .filter(|&(_, &seen)| !seen)
            .filter_map(|(u, _)| self.back.get(u));
        match unvisited.reduce(f64::max) {
            Some(h) => h,
            None => path
                .last()
                .and_then(|&last| self.back.get(last))
                .unwrap_or(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::tour_cost;
    use crate::search::{BranchAndBoundSearch, ExhaustiveSearch};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Cheapest cost of finishing `prefix` into a full tour, by brute force.
    fn true_remaining(matrix: &CostMatrix, prefix: &[usize]) -> Option<f64> {
        let n = matrix.size();
        let last = *prefix.last()?;
        if prefix.len() > 1 && last == DEPOT {
            return Some(0.0);
        }
        let rest: Vec<usize> = (0..n).filter(|u| !prefix.contains(u)).collect();
        if rest.is_empty() {
            return tour_cost(&[last, DEPOT], matrix).ok();
        }
        rest.iter()
            .filter_map(|&next| {
                let step = tour_cost(&[last, next], matrix).ok()?;
                let mut extended = prefix.to_vec();
                extended.push(next);
                Some(step + true_remaining(matrix, &extended)?)
            })
            .reduce(f64::min)
    }

    fn all_prefixes(n: usize, prefix: Vec<usize>, out: &mut Vec<Vec<usize>>) {
        out.push(prefix.clone());
        for next in 1..n {
            if !prefix.contains(&next) {
                let mut p = prefix.clone();
                p.push(next);
                all_prefixes(n, p, out);
            }
        }
    }

    #[test]
    fn test_bound_is_admissible() {
        // Four nodes strung out far from the depot: summing their depot
        // distances would overshoot the real remaining cost.
        let cm = CostMatrix::from_points(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (11.0, 0.0),
            (12.0, 0.0),
            (13.0, 0.0),
        ]);
        let bound = ReturnBound::new(&cm).expect("connected");
        let mut prefixes = Vec::new();
        all_prefixes(cm.size(), vec![DEPOT], &mut prefixes);
        for prefix in prefixes {
            let truth = true_remaining(&cm, &prefix).expect("complete graph");
            let h = bound.estimate(&prefix);
            assert!(h <= truth + 1e-9, "prefix {prefix:?}: h={h} truth={truth}");
        }
    }

    #[test]
    fn test_bound_is_admissible_on_random_asymmetric() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut cm = CostMatrix::random_symmetric(5, 30, &mut rng);
        let upper = CostMatrix::random_symmetric(5, 30, &mut rng);
        for i in 0..5 {
            for j in (i + 1)..5 {
                cm.set(i, j, upper.get(i, j));
            }
        }
        let bound = ReturnBound::new(&cm).expect("complete graph");
        let mut prefixes = Vec::new();
        all_prefixes(5, vec![DEPOT], &mut prefixes);
        for prefix in prefixes {
            let truth = true_remaining(&cm, &prefix).expect("complete graph");
            assert!(bound.estimate(&prefix) <= truth + 1e-9, "prefix {prefix:?}");
        }
    }

    #[test]
    fn test_bound_values() {
        let cm = CostMatrix::from_points(&[(0.0, 0.0), (3.0, 0.0), (5.0, 0.0)]);
        let bound = ReturnBound::new(&cm).expect("connected");
        assert_eq!(bound.estimate(&[0]), 5.0);
        assert_eq!(bound.estimate(&[0, 2]), 3.0);
        assert_eq!(bound.estimate(&[0, 2, 1]), 3.0);
        assert_eq!(bound.estimate(&[0, 2, 1, 0]), 0.0);
    }

    #[test]
    fn test_matches_branch_and_bound() {
        let mut rng = StdRng::seed_from_u64(17);
        for size in 2..=7 {
            let cm = CostMatrix::random_symmetric(size, 25, &mut rng);
            let bnb = BranchAndBoundSearch.plan(&cm).expect("complete graph");
            let astar = InformedSearch.plan(&cm).expect("complete graph");
            let exact = ExhaustiveSearch.plan(&cm).expect("complete graph");
            assert_eq!(astar.cost(), bnb.cost(), "size {size}");
            assert_eq!(astar.cost(), exact.cost(), "size {size}");
            assert!(astar.is_valid_for(size));
        }
    }

    #[test]
    fn test_expands_no_more_than_branch_and_bound() {
        let mut rng = StdRng::seed_from_u64(23);
        let cm = CostMatrix::random_symmetric(7, 40, &mut rng);
        let mut plain = SearchBudget::unlimited();
        let mut informed = SearchBudget::unlimited();
        BranchAndBoundSearch
            .plan_with_budget(&cm, &mut plain)
            .expect("complete graph");
        InformedSearch
            .plan_with_budget(&cm, &mut informed)
            .expect("complete graph");
        assert!(informed.expansions() <= plain.expansions());
    }

    #[test]
    fn test_unreachable_fails_fast() {
        let cm = CostMatrix::from_rows(vec![
            vec![0.0, 1.0, 0.0],
            vec![1.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0],
        ])
        .expect("valid");
        let mut budget = SearchBudget::unlimited();
        assert!(matches!(
            InformedSearch.plan_with_budget(&cm, &mut budget),
            Err(PlanningError::NoFeasibleTour)
        ));
        assert_eq!(budget.expansions(), 0);
    }

    #[test]
    fn test_one_way_reachability_fails() {
        let mut cm = CostMatrix::new(3);
        cm.set(0, 1, 1.0);
        cm.set(1, 0, 1.0);
        cm.set(0, 2, 1.0);
        assert!(matches!(
            InformedSearch.plan(&cm),
            Err(PlanningError::NoFeasibleTour)
        ));
    }

    #[test]
    fn test_single_node() {
        let tour = InformedSearch.plan(&CostMatrix::new(1)).expect("trivial");
        assert_eq!(tour.nodes(), &[0, 0]);
    }
}
