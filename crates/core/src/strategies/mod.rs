// crates/core/src/strategies/mod.rs
use grid_paths_shared_kernel::{ComputationError, ComputationResult, GridDims, PathCount};

use crate::options::Strategy;

pub mod brute_force;
pub mod closed_form;
pub mod memoized;
pub mod tabulated;

pub use brute_force::BruteForceCounter;
pub use closed_form::ClosedFormCounter;
pub use memoized::MemoizedCounter;
pub use tabulated::TabulatedCounter;

/// One way of evaluating the number of monotone paths across a grid.
///
/// Every implementation returns the same value wherever it succeeds.
pub trait PathCountStrategy {
    fn strategy(&self) -> Strategy;

    /// # Errors
    ///
    /// Returns [`ComputationError::Overflow`] if the count does not fit in
    /// 128 bits and, for recursive strategies, [`ComputationError::RecursionLimit`]
    /// if the grid is deeper than the configured limit.
    fn count(&self, dims: GridDims) -> ComputationResult<PathCount>;
}

/// Build the strategy named by `strategy`.
pub fn for_strategy(strategy: Strategy, max_recursion_depth: usize) -> Box<dyn PathCountStrategy> {
    match strategy {
        Strategy::Memoized => Box::new(MemoizedCounter::new(max_recursion_depth)),
        Strategy::BruteForce => Box::new(BruteForceCounter::new(max_recursion_depth)),
        Strategy::Tabulated => Box::new(TabulatedCounter),
        Strategy::ClosedForm => Box::new(ClosedFormCounter),
    }
}

/// Largest shorter side whose count fits in 128 bits. With a shorter side
/// of 67 or more the count is at least `C(132, 66) > u128::MAX`.
pub const MAX_FITTING_SIDE: u32 = 66;

/// Reject grids whose count cannot fit before doing any work on them.
pub(crate) fn check_fits(dims: GridDims) -> ComputationResult<()> {
    if dims.rows().min(dims.cols()) > MAX_FITTING_SIDE {
        return Err(overflow(dims));
    }
    Ok(())
}

pub(crate) fn check_depth(dims: GridDims, limit: usize) -> ComputationResult<()> {
    let depth = dims.depth();
    if depth > limit as u64 {
        log::warn!("refusing to recurse {depth} levels for {dims} (limit {limit})");
        return Err(ComputationError::RecursionLimit { depth, limit });
    }
    Ok(())
}

pub(crate) fn overflow(dims: GridDims) -> ComputationError {
    log::warn!("path count for {dims} overflows u128");
    ComputationError::Overflow { rows: dims.rows(), cols: dims.cols() }
}
