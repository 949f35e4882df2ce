//! Closed tour type.

use serde::{Deserialize, Serialize};

use crate::distance::CostMatrix;
use crate::error::Result;
use crate::evaluation::tour_cost;

/// The depot node every tour starts and ends at.
pub const DEPOT: usize = 0;

/// A closed tour: the depot, every other node exactly once, then the depot.
///
/// For `n` nodes the tour holds `n + 1` indices. A single-node problem
/// yields `[0, 0]`.
///
/// # Examples
///
/// ```
/// use u_tourplan::distance::CostMatrix;
/// use u_tourplan::models::Tour;
///
/// let cm = CostMatrix::from_points(&[(0.0, 0.0), (3.0, 4.0), (6.0, 0.0)]);
/// let tour = Tour::from_nodes(vec![0, 1, 2, 0], &cm).unwrap();
/// assert_eq!(tour.stops(), &[1, 2]);
/// assert!((tour.cost() - 16.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    nodes: Vec<usize>,
    cost: f64,
}

impl Tour {
    /// Creates a tour from a node sequence, computing its cost.
    ///
    /// Fails with [`InvalidSequence`](crate::PlanningError::InvalidSequence)
    /// if the sequence steps over an absent edge.
    pub fn from_nodes(nodes: Vec<usize>, matrix: &CostMatrix) -> Result<Self> {
        let cost = tour_cost(&nodes, matrix)?;
        Ok(Self { nodes, cost })
    }

    pub(crate) fn new(nodes: Vec<usize>, cost: f64) -> Self {
        Self { nodes, cost }
    }

    /// The full node sequence, depot at both ends.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Consumes the tour, returning its node sequence.
    pub fn into_nodes(self) -> Vec<usize> {
        self.nodes
    }

    /// Total weight of the tour.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of indices in the tour (node count + 1).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tour holds no indices.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The non-depot nodes in visit order.
    pub fn stops(&self) -> &[usize] {
        if self.nodes.len() < 2 {
            return &[];
        }
        &self.nodes[1..self.nodes.len() - 1]
    }

    /// Consecutive `(from, to)` steps of the tour.
    pub fn legs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.nodes.windows(2).map(|w| (w[0], w[1]))
    }

    /// Returns `true` if this is a closed tour over exactly `n` nodes.
    pub fn is_valid_for(&self, n: usize) -> bool {
        if n == 0 || self.nodes.len() != n + 1 {
            return false;
        }
        if self.nodes[0] != DEPOT || self.nodes[n] != DEPOT {
            return false;
        }
        let mut seen = vec![false; n];
        seen[DEPOT] = true;
        for &node in self.stops() {
            if node >= n || seen[node] {
                return false;
            }
            seen[node] = true;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_node_tour() {
        let tour = Tour::from_nodes(vec![0, 0], &CostMatrix::new(1)).expect("valid");
        assert_eq!(tour.cost(), 0.0);
        assert!(tour.stops().is_empty());
        assert!(tour.is_valid_for(1));
    }

    #[test]
    fn test_valid_for() {
        let tour = Tour::new(vec![0, 2, 1, 3, 0], 4.0);
        assert!(tour.is_valid_for(4));
        assert!(!tour.is_valid_for(3));
        assert!(!Tour::new(vec![0, 1, 1, 3, 0], 4.0).is_valid_for(4));
        assert!(!Tour::new(vec![1, 0, 2, 3, 1], 4.0).is_valid_for(4));
        assert!(!Tour::new(vec![0, 1, 2, 4, 0], 4.0).is_valid_for(4));
    }

    #[test]
    fn test_legs() {
        let tour = Tour::new(vec![0, 2, 1, 0], 3.0);
        let legs: Vec<_> = tour.legs().collect();
        assert_eq!(legs, vec![(0, 2), (2, 1), (1, 0)]);
        assert_eq!(tour.len(), 4);
        assert_eq!(tour.into_nodes(), vec![0, 2, 1, 0]);
    }

    #[test]
    fn test_from_nodes_missing_edge() {
        let cm = CostMatrix::from_rows(vec![
            vec![0.0, 1.0, 1.0],
            vec![1.0, 0.0, 0.0],
            vec![1.0, 0.0, 0.0],
        ])
        .expect("valid");
        assert!(Tour::from_nodes(vec![0, 1, 2, 0], &cm).is_err());
    }
}
