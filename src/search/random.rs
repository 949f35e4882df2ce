//! Seeded random tour, kept as a quality baseline.

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::distance::CostMatrix;
use crate::error::Result;
use crate::models::{Tour, DEPOT};

use super::{SearchBudget, TourPlanner};

/// Visits the non-depot nodes in a shuffled order.
///
/// The same seed always gives the same tour. The shuffle ignores edge
/// weights, so on a sparse matrix it fails with
/// [`InvalidSequence`](crate::PlanningError::InvalidSequence) when it steps
/// over an absent edge.
///
/// # Examples
///
/// ```
/// use u_tourplan::distance::CostMatrix;
/// use u_tourplan::search::{RandomSearch, TourPlanner};
///
/// let cm = CostMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
/// let tour = RandomSearch::new(42).plan(&cm).unwrap();
/// assert!(tour.is_valid_for(4));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RandomSearch {
    seed: u64,
}

impl RandomSearch {
    /// Creates a random planner with the given seed.
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// The shuffle seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl TourPlanner for RandomSearch {
    fn name(&self) -> &'static str {
        "random"
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
        budget.tick()?;
        let mut stops: Vec<usize> = (1..n).collect();
        let mut rng = StdRng::seed_from_u64(self.seed);
        stops.shuffle(&mut rng);

        let mut nodes = Vec::with_capacity(n + 1);
        nodes.push(DEPOT);
        nodes.extend(stops);
        nodes.push(DEPOT);
        let tour = Tour::from_nodes(nodes, matrix)?;
        debug!("random: n={n} seed={} cost={}", self.seed, tour.cost());
        Ok(tour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlanningError;

    #[test]
    fn test_same_seed_same_tour() {
        let mut rng = StdRng::seed_from_u64(1);
        let cm = CostMatrix::random_symmetric(8, 10, &mut rng);
        let a = RandomSearch::new(9).plan(&cm).expect("complete graph");
        let b = RandomSearch::new(9).plan(&cm).expect("complete graph");
        assert_eq!(a, b);
        assert!(a.is_valid_for(8));
    }

    #[test]
    fn test_single_node() {
        let tour = RandomSearch::new(0).plan(&CostMatrix::new(1)).expect("trivial");
        assert_eq!(tour.nodes(), &[0, 0]);
    }

    #[test]
    fn test_single_node_ignores_exhausted_budget() {
        let mut budget = SearchBudget::new(Some(0), None);
        let tour = RandomSearch::new(0)
            .plan_with_budget(&CostMatrix::new(1), &mut budget)
            .expect("trivial");
        assert_eq!(tour.nodes(), &[0, 0]);
        assert_eq!(tour.cost(), 0.0);
        assert_eq!(budget.expansions(), 0);
    }

    #[test]
    fn test_absent_edge() {
        let cm = CostMatrix::new(3);
        assert!(matches!(
            RandomSearch::new(0).plan(&cm),
            Err(PlanningError::InvalidSequence { from: 0, .. })
        ));
    }
}
