//! Planner configuration.

use serde::{Deserialize, Serialize};

use crate::search::StrategyKind;

/// Settings for a [`Planner`](crate::planner::Planner).
///
/// Missing fields take their defaults when deserialized, so `{}` is a valid
/// config.
///
/// # Examples
///
/// ```
/// use u_tourplan::config::PlannerConfig;
/// use u_tourplan::search::StrategyKind;
///
/// let config = PlannerConfig::default()
///     .with_strategy(StrategyKind::Informed)
///     .with_max_expansions(10_000);
/// assert_eq!(config.strategy, StrategyKind::Informed);
/// assert_eq!(config.max_expansions, Some(10_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Strategy used by [`Planner::plan`](crate::planner::Planner::plan).
    pub strategy: StrategyKind,
    /// Upper bound on search expansions; `None` means unlimited.
    pub max_expansions: Option<usize>,
    /// Seed for [`StrategyKind::Random`].
    pub seed: u64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            max_expansions: None,
            seed: 42,
        }
    }
}

impl PlannerConfig {
    /// Sets the strategy.
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Caps the number of search expansions.
    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    /// Sets the seed for the random strategy.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
