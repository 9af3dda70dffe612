// crates/core/src/strategies/memoized.rs
use grid_paths_shared_kernel::{ComputationResult, GridDims, PathCount};

use super::{PathCountStrategy, check_depth, check_fits, overflow};
use crate::memo::{Memo, MemoStats};
use crate::options::Strategy;

/// Top-down recursion that resolves each subgrid at most once.
///
/// `O(m * n)` time, `O(m + n)` stack and `O(m * n)` memo entries. The memo
/// is created for each top-level call and dropped when it returns.
#[derive(Debug, Clone, Copy)]
pub struct MemoizedCounter {
    max_depth: usize,
}

impl MemoizedCounter {
    pub const fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Count paths and report what the memo did along the way.
    pub fn count_with_stats(&self, dims: GridDims) -> ComputationResult<(PathCount, MemoStats)> {
        if dims.is_empty() {
            return Ok((PathCount::ZERO, MemoStats::default()));
        }
        check_fits(dims)?;
        check_depth(dims, self.max_depth)?;

        let mut memo = Memo::for_grid(dims);
        let count = resolve(dims, &mut memo).ok_or_else(|| overflow(dims))?;
        Ok((count, memo.stats()))
    }
}

impl PathCountStrategy for MemoizedCounter {
    fn strategy(&self) -> Strategy {
        Strategy::Memoized
    }

    fn count(&self, dims: GridDims) -> ComputationResult<PathCount> {
        self.count_with_stats(dims).map(|(count, _)| count)
    }
}

/// `None` signals that a sum overflowed somewhere below `dims`.
fn resolve(dims: GridDims, memo: &mut Memo) -> Option<PathCount> {
    if let Some(count) = memo.get(dims) {
        return Some(count);
    }
    if dims.is_goal() {
        return Some(PathCount::ONE);
    }
    if dims.is_empty() {
        return Some(PathCount::ZERO);
    }

    let down = resolve(dims.step_down(), memo)?;
    let right = resolve(dims.step_right(), memo)?;
    let total = down.checked_add(right)?;
    memo.insert(dims, total);
    Some(total)
}
