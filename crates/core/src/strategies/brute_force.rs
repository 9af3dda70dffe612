// crates/core/src/strategies/brute_force.rs
use grid_paths_shared_kernel::{ComputationResult, GridDims, PathCount};

use super::{PathCountStrategy, check_depth, check_fits, overflow};
use crate::options::Strategy;

/// Plain recursion over the two possible moves.
///
/// Every shared subgrid is recomputed, so time grows as `O(2^(m + n))`.
/// Only useful as a reference for small grids.
#[derive(Debug, Clone, Copy)]
pub struct BruteForceCounter {
    max_depth: usize,
}

impl BruteForceCounter {
    pub const fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl PathCountStrategy for BruteForceCounter {
    fn strategy(&self) -> Strategy {
        Strategy::BruteForce
    }

    fn count(&self, dims: GridDims) -> ComputationResult<PathCount> {
        if dims.is_empty() {
            return Ok(PathCount::ZERO);
        }
        check_fits(dims)?;
        check_depth(dims, self.max_depth)?;
        walk(dims).ok_or_else(|| overflow(dims))
    }
}

fn walk(dims: GridDims) -> Option<PathCount> {
    if dims.is_goal() {
        return Some(PathCount::ONE);
    }
    if dims.is_empty() {
        return Some(PathCount::ZERO);
    }
    walk(dims.step_down())?.checked_add(walk(dims.step_right())?)
}
