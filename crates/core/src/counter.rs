// crates/core/src/counter.rs
use grid_paths_shared_kernel::{ErrorContext, GridDims, PathCount, Result};
use serde::{Deserialize, Serialize};

use crate::config::CounterConfig;
use crate::memo::MemoStats;
use crate::options::Strategy;
use crate::strategies::{self, MemoizedCounter};

/// Outcome of one top-level evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountReport {
    pub dims: GridDims,
    pub count: PathCount,
    pub strategy: Strategy,
    /// Present only for the memoized strategy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<MemoStats>,
}

/// Entry point for counting monotone paths across a grid.
///
/// Holds configuration only. Each call builds its own memo, so repeated or
/// interleaved calls never observe each other's state.
#[derive(Debug, Clone, Default)]
pub struct PathCounter {
    config: CounterConfig,
}

impl PathCounter {
    pub fn new(config: CounterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    /// Number of paths from the top-left to the bottom-right of a
    /// `rows x cols` grid moving only down or right.
    ///
    /// # Errors
    ///
    /// Fails when the count overflows 128 bits, or when a recursive strategy
    /// would exceed `max_recursion_depth`.
    pub fn count(&self, rows: u32, cols: u32) -> Result<PathCount> {
        self.count_dims(GridDims::from((rows, cols)))
    }

    pub fn count_dims(&self, dims: GridDims) -> Result<PathCount> {
        let strategy = self.config.strategy;
        let count = strategies::for_strategy(strategy, self.config.max_recursion_depth)
            .count(dims)
            .with_context(|| format!("counting paths for {dims} with {strategy}"))?;
        log::debug!("{strategy}: {dims} -> {count}");
        Ok(count)
    }

    /// Like [`Self::count`], but also reports the strategy and memo activity.
    pub fn count_with_report(&self, rows: u32, cols: u32) -> Result<CountReport> {
        let dims = GridDims::from((rows, cols));
        let strategy = self.config.strategy;
        if strategy != Strategy::Memoized {
            let count = self.count_dims(dims)?;
            return Ok(CountReport { dims, count, strategy, memo: None });
        }

        let (count, stats) = MemoizedCounter::new(self.config.max_recursion_depth)
            .count_with_stats(dims)
            .with_context(|| format!("counting paths for {dims} with {strategy}"))?;
        log::debug!(
            "{strategy}: {dims} -> {count} ({} memo entries, {} hits)",
            stats.entries,
            stats.hits
        );
        Ok(CountReport { dims, count, strategy, memo: Some(stats) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_paths_shared_kernel::{ComputationError, GridPathsError};

    #[test]
    fn default_counter_is_memoized() {
        let counter = PathCounter::default();
        assert_eq!(counter.config().strategy, Strategy::Memoized);
        assert_eq!(counter.count(2, 3).unwrap(), PathCount::from(3u64));
    }

    #[test]
    fn every_strategy_agrees_on_worked_examples() {
        for strategy in Strategy::ALL {
            let counter = PathCounter::new(CounterConfig::with_strategy(strategy));
            assert_eq!(counter.count(1, 1).unwrap().value(), 1, "{strategy}");
            assert_eq!(counter.count(0, 5).unwrap().value(), 0, "{strategy}");
            assert_eq!(counter.count(2, 3).unwrap().value(), 3, "{strategy}");
            assert_eq!(counter.count(3, 3).unwrap().value(), 6, "{strategy}");
        }
    }

    #[test]
    fn errors_carry_context() {
        let counter = PathCounter::new(CounterConfig::builder().max_recursion_depth(10usize).build().unwrap());
        let err = counter.count(6, 6).unwrap_err();
        assert!(err.to_string().contains("counting paths for 6x6 with memoized"));
        assert!(matches!(
            err.root(),
            GridPathsError::Computation(ComputationError::RecursionLimit { depth: 12, limit: 10 })
        ));
    }

    #[test]
    fn report_includes_memo_stats_only_when_memoized() {
        let report = PathCounter::default().count_with_report(3, 3).unwrap();
        assert_eq!(report.count.value(), 6);
        assert_eq!(report.memo.map(|m| m.entries), Some(8));

        let tabulated = PathCounter::new(CounterConfig::with_strategy(Strategy::Tabulated));
        let report = tabulated.count_with_report(3, 3).unwrap();
        assert_eq!(report.count.value(), 6);
        assert_eq!(report.memo, None);
    }
}
