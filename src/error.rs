//! Error types for tour planning.

use thiserror::Error as ThisError;

/// Failure of a planning call.
///
/// Every way a strategy can fail is surfaced here; no strategy panics or
/// loops on bad input.
#[derive(Debug, ThisError)]
pub enum PlanningError {
    /// The cost matrix is not square, is empty, or holds a negative or
    /// non-finite weight.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A node sequence steps between two distinct nodes with no direct edge.
    #[error("no edge from node {from} to node {to}")]
    InvalidSequence {
        /// Node the step leaves.
        from: usize,
        /// Node the step enters.
        to: usize,
    },

    /// The greedy heuristic reached a node with no edge to any unvisited
    /// node (or, after visiting every node, no edge back to the depot).
    #[error("no feasible successor from node {from}")]
    NoFeasibleSuccessor {
        /// Node the heuristic was stuck at.
        from: usize,
    },

    /// An exact search exhausted every candidate without closing a tour.
    #[error("no feasible tour visits every node and returns to the depot")]
    NoFeasibleTour,

    /// The cancel flag was raised between two search iterations.
    #[error("planning cancelled")]
    Cancelled,

    /// The search exceeded its configured number of expansions.
    #[error("search exceeded {limit} expansions")]
    ExpansionLimit {
        /// The configured limit.
        limit: usize,
    },

    /// Malformed JSON at the C/JSON boundary.
    #[cfg(feature = "ffi")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PlanningError>;

impl PlanningError {
    /// Creates a [`PlanningError::InvalidInput`] with the given message.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            PlanningError::invalid_input("matrix is empty").to_string(),
            "invalid input: matrix is empty"
        );
        assert_eq!(
            PlanningError::InvalidSequence { from: 2, to: 3 }.to_string(),
            "no edge from node 2 to node 3"
        );
        assert_eq!(
            PlanningError::ExpansionLimit { limit: 10 }.to_string(),
            "search exceeded 10 expansions"
        );
    }
}
