//! Tour cost evaluator.

use crate::distance::CostMatrix;
use crate::error::{PlanningError, Result};

/// Computes the total weight of node sequences under a [`CostMatrix`].
///
/// Stepping between two distinct nodes with no direct edge is an error,
/// never a free move. Staying on a node (only the `[0, 0]` tour does this)
/// costs nothing.
///
/// # Examples
///
/// ```
/// use u_tourplan::distance::CostMatrix;
/// use u_tourplan::evaluation::TourEvaluator;
///
/// let cm = CostMatrix::from_points(&[(0.0, 0.0), (3.0, 4.0), (0.0, 8.0)]);
/// let evaluator = TourEvaluator::new(&cm);
/// let cost = evaluator.cost(&[0, 1, 2, 0]).unwrap();
/// assert!((cost - 18.0).abs() < 1e-10);
/// ```
pub struct TourEvaluator<'a> {
    matrix: &'a CostMatrix,
}

impl<'a> TourEvaluator<'a> {
    /// Creates an evaluator over the given matrix.
    pub fn new(matrix: &'a CostMatrix) -> Self {
        Self { matrix }
    }

    /// Weight of the single step `from -> to`.
    ///
    /// A node outside the matrix is an
    /// [`InvalidSequence`](PlanningError::InvalidSequence), like an absent edge.
    pub fn step(&self, from: usize, to: usize) -> Result<f64> {
        let n = self.matrix.size();
        if from >= n || to >= n {
            return Err(PlanningError::InvalidSequence { from, to });
        }
        if from == to {
            return Ok(0.0);
        }
        if !self.matrix.has_edge(from, to) {
            return Err(PlanningError::InvalidSequence { from, to });
        }
        Ok(self.matrix.get(from, to))
    }

    /// Sum of the step weights over consecutive pairs of `sequence`.
    ///
    /// Sequences shorter than two nodes cost nothing.
    pub fn cost(&self, sequence: &[usize]) -> Result<f64> {
        sequence
            .windows(2)
            .try_fold(0.0, |acc, w| -> Result<f64> { Ok(acc + self.step(w[0], w[1])?) })
    }
}

/// Shorthand for `TourEvaluator::new(matrix).cost(sequence)`.
pub fn tour_cost(sequence: &[usize], matrix: &CostMatrix) -> Result<f64> {
    TourEvaluator::new(matrix).cost(sequence)
}
