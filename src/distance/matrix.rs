//! Dense cost matrix.

use rand::Rng;

use crate::error::{PlanningError, Result};

/// A dense n×n matrix of non-negative edge weights stored in row-major order.
///
/// `get(i, j)` is the cost of going directly from node `i` to node `j`.
/// An off-diagonal weight of `0` means there is no direct edge. The
/// diagonal is ignored. Node 0 is the depot.
///
/// # Examples
///
/// ```
/// use u_tourplan::distance::CostMatrix;
///
/// let cm = CostMatrix::from_rows(vec![
///     vec![0.0, 5.0, 8.0],
///     vec![5.0, 0.0, 0.0],
///     vec![8.0, 0.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(cm.size(), 3);
/// assert!(cm.has_edge(0, 1));
/// assert!(!cm.has_edge(1, 2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    data: Vec<f64>,
    size: usize,
}

impl CostMatrix {
    /// Creates a matrix of the given size with no edges.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Builds a matrix from explicit rows, validating shape and weights.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(PlanningError::invalid_input(format!(
                    "row {i} has {} entries, expected {size}",
                    row.len()
                )));
            }
            data.extend(row);
        }
        let matrix = Self { data, size };
        matrix.validate()?;
        Ok(matrix)
    }

    /// Builds a matrix from a flat row-major buffer of `size * size` weights.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != size * size {
            return Err(PlanningError::invalid_input(format!(
                "expected {} weights for a {size}x{size} matrix, got {}",
                size * size,
                data.len()
            )));
        }
        let matrix = Self { data, size };
        matrix.validate()?;
        Ok(matrix)
    }

    /// Computes a complete Euclidean matrix from `(x, y)` positions.
    ///
    /// Two nodes sharing a position end up with no edge between them.
    pub fn from_points(points: &[(f64, f64)]) -> Self {
        let n = points.len();
        let mut cm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let (dx, dy) = (points[i].0 - points[j].0, points[i].1 - points[j].1);
                let d = (dx * dx + dy * dy).sqrt();
                cm.set(i, j, d);
                cm.set(j, i, d);
            }
        }
        cm
    }

    /// Generates a complete symmetric matrix with integer weights in
    /// `1..=max_weight`.
    pub fn random_symmetric<R: Rng>(size: usize, max_weight: u32, rng: &mut R) -> Self {
        let max_weight = max_weight.max(1);
        let mut cm = Self::new(size);
        for i in 0..size {
            for j in (i + 1)..size {
                let w = f64::from(rng.random_range(1..=max_weight));
                cm.set(i, j, w);
                cm.set(j, i, w);
            }
        }
        cm
    }

    /// Returns the weight from node `from` to node `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the weight from node `from` to node `to`.
    pub fn set(&mut self, from: usize, to: usize, weight: f64) {
        self.data[from * self.size + to] = weight;
    }

    /// Number of nodes in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if a direct edge leads from `from` to `to`.
    ///
    /// The diagonal never counts as an edge, and neither does a pair with a
    /// node outside the matrix.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        from != to && from < self.size && to < self.size && self.get(from, to) > 0.0
    }

    /// Checks the planning invariants: at least one node, and every weight
    /// finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(PlanningError::invalid_input("cost matrix has no nodes"));
        }
        if let Some(pos) = self.data.iter().position(|w| !w.is_finite() || *w < 0.0) {
            return Err(PlanningError::invalid_input(format!(
                "weight from {} to {} is {}",
                pos / self.size,
                pos % self.size,
                self.data[pos]
            )));
        }
        Ok(())
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the matrix with every edge reversed.
    pub fn transposed(&self) -> Self {
        let mut t = Self::new(self.size);
        for i in 0..self.size {
            for j in 0..self.size {
                t.set(j, i, self.get(i, j));
            }
        }
        t
    }

    /// Returns the cheapest candidate reachable from `from` by a direct edge.
    ///
    /// Ties go to the smallest index. Candidates outside the matrix are
    /// skipped. Returns `None` if no candidate has an edge from `from`.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for &c in candidates {
            if !self.has_edge(from, c) {
                continue;
            }
            let w = self.get(from, c);
            match best {
                Some((b, bw)) if w > bw || (w == bw && c > b) => {}
                _ => best = Some((c, w)),
            }
        }
        best.map(|(c, _)| c)
    }
}
