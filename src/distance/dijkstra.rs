//! Single-source shortest paths over a [`CostMatrix`].

use super::CostMatrix;

/// Shortest-path distances from one source node to every node.
///
/// Unreachable nodes report `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Distances {
    source: usize,
    dist: Vec<f64>,
}

impl Distances {
    /// The node these distances are measured from.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Shortest distance from the source to `node`, or `None` if unreachable.
    pub fn get(&self, node: usize) -> Option<f64> {
        self.dist.get(node).copied().filter(|d| d.is_finite())
    }

    /// Returns `true` if `node` can be reached from the source.
    pub fn is_reachable(&self, node: usize) -> bool {
        self.get(node).is_some()
    }

    /// Returns `true` if every node can be reached from the source.
    pub fn all_reachable(&self) -> bool {
        self.dist.iter().all(|d| d.is_finite())
    }

    /// Number of nodes covered.
    pub fn len(&self) -> usize {
        self.dist.len()
    }

    /// Returns `true` if no nodes are covered.
    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }
}

/// Computes shortest distances from `source` with Dijkstra's algorithm.
///
/// Only present edges (positive weights) are followed. Each round selects the
/// unvisited node with the smallest tentative distance by a linear scan,
/// which is O(n²) overall and fine for the small matrices planned here.
///
/// # Examples
///
/// ```
/// use u_tourplan::distance::{shortest_distances, CostMatrix};
///
/// let cm = CostMatrix::from_rows(vec![
///     vec![0.0, 1.0, 5.0],
///     vec![1.0, 0.0, 1.0],
///     vec![5.0, 1.0, 0.0],
/// ])
/// .unwrap();
/// let d = shortest_distances(&cm, 0);
/// assert_eq!(d.get(2), Some(2.0));
/// ```
pub fn shortest_distances(matrix: &CostMatrix, source: usize) -> Distances {
    let n = matrix.size();
    let mut dist = vec![f64::INFINITY; n];
    let mut visited = vec![false; n];
    if source < n {
        dist[source] = 0.0;
    }

    loop {
        let mut current = None;
        let mut shortest = f64::INFINITY;
        for i in 0..n {
            if !visited[i] && dist[i] < shortest {
                shortest = dist[i];
                current = Some(i);
            }
        }
        let Some(u) = current else {
            break;
        };
        visited[u] = true;

        for v in 0..n {
            if visited[v] || !matrix.has_edge(u, v) {
                continue;
            }
            let tentative = dist[u] + matrix.get(u, v);
            if tentative < dist[v] {
                dist[v] = tentative;
            }
        }
    }

    Distances { source, dist }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_indirect_path() {
        let cm = CostMatrix::from_rows(vec![
            vec![0.0, 1.0, 10.0, 0.0],
            vec![1.0, 0.0, 2.0, 0.0],
            vec![10.0, 2.0, 0.0, 4.0],
            vec![0.0, 0.0, 4.0, 0.0],
        ])
        .expect("valid");
        let d = shortest_distances(&cm, 0);
        assert_eq!(d.source(), 0);
        assert_eq!(d.get(0), Some(0.0));
        assert_eq!(d.get(1), Some(1.0));
        assert_eq!(d.get(2), Some(3.0));
        assert_eq!(d.get(3), Some(7.0));
        assert!(d.all_reachable());
    }

    #[test]
    fn test_unreachable_node() {
        let cm = CostMatrix::from_rows(vec![
            vec![0.0, 2.0, 0.0],
            vec![2.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0],
        ])
        .expect("valid");
        let d = shortest_distances(&cm, 0);
        assert_eq!(d.get(1), Some(2.0));
        assert_eq!(d.get(2), None);
        assert!(!d.is_reachable(2));
        assert!(!d.all_reachable());
    }

    #[test]
    fn test_directed_edges() {
        let mut cm = CostMatrix::new(3);
        cm.set(0, 1, 1.0);
        cm.set(1, 2, 1.0);
        cm.set(2, 0, 1.0);
        let from_depot = shortest_distances(&cm, 0);
        assert_eq!(from_depot.get(2), Some(2.0));
        let to_depot = shortest_distances(&cm.transposed(), 0);
        assert_eq!(to_depot.get(1), Some(2.0));
        assert_eq!(to_depot.get(2), Some(1.0));
    }

    #[test]
    fn test_single_node() {
        let d = shortest_distances(&CostMatrix::new(1), 0);
        assert_eq!(d.len(), 1);
        assert_eq!(d.get(0), Some(0.0));
    }
}
