//! The tour-planning capability and the closed set of strategies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::distance::CostMatrix;
use crate::error::{PlanningError, Result};
use crate::models::Tour;

use super::SearchBudget;

/// Produces a closed tour from the depot over every node of a matrix.
pub trait TourPlanner {
    /// Short strategy name, used in log output.
    fn name(&self) -> &'static str;

    /// Plans a tour, charging work against `budget`.
    ///
    /// The matrix must already satisfy [`CostMatrix::validate`].
    fn plan_with_budget(&self, matrix: &CostMatrix, budget: &mut SearchBudget<'_>)
        -> Result<Tour>;

    /// Validates the matrix and plans a tour with no work limit.
    fn plan(&self, matrix: &CostMatrix) -> Result<Tour> {
        matrix.validate()?;
        self.plan_with_budget(matrix, &mut SearchBudget::unlimited())
    }
}

/// Which strategy a planning call uses.
///
/// | Strategy         | Optimal | Cost                      |
/// |------------------|---------|---------------------------|
/// | `Exhaustive`     | yes     | (n-1)! tours              |
/// | `Greedy`         | no      | O(n²)                     |
/// | `BranchAndBound` | yes     | best-first on path cost   |
/// | `Informed`       | yes     | best-first with a bound   |
/// | `Random`         | no      | O(n), baseline only       |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Try every ordering of the non-depot nodes.
    Exhaustive,
    /// Nearest-neighbor heuristic.
    Greedy,
    /// Best-first search ordered by accumulated cost.
    #[default]
    BranchAndBound,
    /// A* search with a shortest-path lower bound.
    Informed,
    /// Seeded random ordering.
    Random,
}

impl StrategyKind {
    /// Every strategy, in declaration order.
    pub const ALL: [StrategyKind; 5] = [
        Self::Exhaustive,
        Self::Greedy,
        Self::BranchAndBound,
        Self::Informed,
        Self::Random,
    ];

    /// The snake_case name used in config files and on the JSON boundary.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exhaustive => "exhaustive",
            Self::Greedy => "greedy",
            Self::BranchAndBound => "branch_and_bound",
            Self::Informed => "informed",
            Self::Random => "random",
        }
    }

    /// Returns `true` if the strategy always returns a minimum-cost tour.
    pub fn is_exact(&self) -> bool {
        matches!(
            self,
            Self::Exhaustive | Self::BranchAndBound | Self::Informed
        )
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = PlanningError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| PlanningError::invalid_input(format!("unknown strategy '{s}'")))
    }
}
