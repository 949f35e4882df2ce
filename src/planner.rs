//! Planning entry points.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use log::{debug, warn};

use crate::config::PlannerConfig;
use crate::distance::CostMatrix;
use crate::error::{PlanningError, Result};
use crate::models::Tour;
use crate::search::{
    BranchAndBoundSearch, ExhaustiveSearch, GreedySearch, InformedSearch, RandomSearch,
    SearchBudget, StrategyKind, TourPlanner,
};

/// Runs one configured strategy over cost matrices.
///
/// A planner holds no state between calls, so it can be shared across
/// threads and reused for any number of matrices. Planning is synchronous;
/// callers that must stay responsive run it on a worker thread and raise the
/// cancel flag to stop it.
///
/// # Examples
///
/// ```
/// use u_tourplan::config::PlannerConfig;
/// use u_tourplan::distance::CostMatrix;
/// use u_tourplan::planner::Planner;
/// use u_tourplan::search::StrategyKind;
///
/// let cm = CostMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
/// let planner = Planner::new(PlannerConfig::default().with_strategy(StrategyKind::Informed));
/// let tour = planner.plan(&cm).unwrap();
/// assert_eq!(tour.len(), 5);
/// assert!((tour.cost() - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Planner {
    config: PlannerConfig,
    cancel: Option<Arc<AtomicBool>>,
}

impl Planner {
    /// Creates a planner from a config.
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            config,
            cancel: None,
        }
    }

    /// Attaches a cancel flag, checked between search iterations.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// The planner's config.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Validates `matrix` and plans a tour with the configured strategy.
    pub fn plan(&self, matrix: &CostMatrix) -> Result<Tour> {
        matrix.validate()?;
        let strategy = self.config.strategy;
        let mut budget = SearchBudget::new(self.config.max_expansions, self.cancel.as_deref());
        debug!("plan: strategy={strategy} n={}", matrix.size());

        let result = match strategy {
            StrategyKind::Exhaustive => ExhaustiveSearch.plan_with_budget(matrix, &mut budget),
            StrategyKind::Greedy => GreedySearch.plan_with_budget(matrix, &mut budget),
            StrategyKind::BranchAndBound => {
                BranchAndBoundSearch.plan_with_budget(matrix, &mut budget)
            }
            StrategyKind::Informed => InformedSearch.plan_with_budget(matrix, &mut budget),
            StrategyKind::Random => {
                RandomSearch::new(self.config.seed).plan_with_budget(matrix, &mut budget)
            }
        };

        match &result {
            Ok(tour) => debug!(
                "plan: strategy={strategy} cost={} expansions={}",
                tour.cost(),
                budget.expansions()
            ),
            Err(e @ (PlanningError::Cancelled | PlanningError::ExpansionLimit { .. })) => warn!(
                "plan: strategy={strategy} stopped after {} expansions: {e}",
                budget.expansions()
            ),
            Err(e) => debug!("plan: strategy={strategy} failed: {e}"),
        }
        result
    }
}

/// Plans a tour over `matrix` with `strategy` and default settings.
///
/// # Examples
///
/// ```
/// use u_tourplan::{plan, CostMatrix, StrategyKind};
///
/// let cm = CostMatrix::new(1);
/// let tour = plan(&cm, StrategyKind::Greedy).unwrap();
/// assert_eq!(tour.nodes(), &[0, 0]);
/// ```
pub fn plan(matrix: &CostMatrix, strategy: StrategyKind) -> Result<Tour> {
    Planner::new(PlannerConfig::default().with_strategy(strategy)).plan(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;

    fn square() -> CostMatrix {
        CostMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
    }

    #[test]
    fn test_every_strategy_returns_valid_tour() {
        let cm = square();
        for strategy in StrategyKind::ALL {
            let tour = plan(&cm, strategy).expect("complete graph");
            assert!(tour.is_valid_for(4), "{strategy}");
        }
    }

    #[test]
    fn test_invalid_matrix() {
        let mut cm = square();
        cm.set(1, 2, -1.0);
        assert!(matches!(
            plan(&cm, StrategyKind::Greedy),
            Err(PlanningError::InvalidInput(_))
        ));
        assert!(matches!(
            plan(&CostMatrix::new(0), StrategyKind::Informed),
            Err(PlanningError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_cancel_before_start() {
        let flag = Arc::new(AtomicBool::new(true));
        let planner = Planner::new(PlannerConfig::default()).with_cancel_flag(flag.clone());
        assert!(matches!(planner.plan(&square()), Err(PlanningError::Cancelled)));

        flag.store(false, Ordering::Relaxed);
        assert!(planner.plan(&square()).is_ok());
    }

    #[test]
    fn test_expansion_limit_from_config() {
        let planner = Planner::new(
            PlannerConfig::default()
                .with_strategy(StrategyKind::Exhaustive)
                .with_max_expansions(2),
        );
        assert!(matches!(
            planner.plan(&square()),
            Err(PlanningError::ExpansionLimit { limit: 2 })
        ));
    }

    #[test]
    fn test_single_node_with_zero_expansions() {
        for strategy in StrategyKind::ALL {
            let planner = Planner::new(
                PlannerConfig::default()
                    .with_strategy(strategy)
                    .with_max_expansions(0),
            );
            let tour = planner.plan(&CostMatrix::new(1)).expect("trivial");
            assert_eq!(tour.nodes(), &[0, 0], "{strategy}");
        }
    }
}
