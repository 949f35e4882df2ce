//! Expansion limits and cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{PlanningError, Result};

/// Tracks how much work a search has done and whether it should stop.
///
/// Strategies call [`tick`](Self::tick) once per frontier extraction (or per
/// permutation, or per greedy step). That is the only point where a search
/// stops early, so an aborted search leaves nothing behind.
pub struct SearchBudget<'a> {
    limit: Option<usize>,
    cancel: Option<&'a AtomicBool>,
    expansions: usize,
}

impl<'a> SearchBudget<'a> {
    /// A budget with no limit and no cancel flag.
    pub fn unlimited() -> Self {
        Self::new(None, None)
    }

    /// A budget with an optional expansion limit and cancel flag.
    pub fn new(limit: Option<usize>, cancel: Option<&'a AtomicBool>) -> Self {
        Self {
            limit,
            cancel,
            expansions: 0,
        }
    }

    /// Records one expansion.
    ///
    /// Fails with [`PlanningError::Cancelled`] once the cancel flag is raised,
    /// or [`PlanningError::ExpansionLimit`] once the limit is used up.
    pub fn tick(&mut self) -> Result<()> {
        if self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            return Err(PlanningError::Cancelled);
        }
        if let Some(limit) = self.limit {
            if self.expansions >= limit {
                return Err(PlanningError::ExpansionLimit { limit });
            }
        }
        self.expansions += 1;
        Ok(())
    }

    /// Expansions recorded so far.
    pub fn expansions(&self) -> usize {
        self.expansions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlimited() {
        let mut b = SearchBudget::unlimited();
        for _ in 0..1000 {
            b.tick().expect("unlimited");
        }
        assert_eq!(b.expansions(), 1000);
    }

    #[test]
    fn test_limit() {
        let mut b = SearchBudget::new(Some(2), None);
        assert!(b.tick().is_ok());
        assert!(b.tick().is_ok());
        assert!(matches!(
            b.tick(),
            Err(PlanningError::ExpansionLimit { limit: 2 })
        ));
    }

    #[test]
    fn test_cancel() {
        let flag = AtomicBool::new(false);
        let mut b = SearchBudget::new(None, Some(&flag));
        assert!(b.tick().is_ok());
        flag.store(true, Ordering::Relaxed);
        assert!(matches!(b.tick(), Err(PlanningError::Cancelled)));
        assert_eq!(b.expansions(), 1);
    }
}
