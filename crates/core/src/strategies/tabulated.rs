// crates/core/src/strategies/tabulated.rs
use grid_paths_shared_kernel::{ComputationResult, GridDims, PathCount};

use super::{PathCountStrategy, check_fits, overflow};
use crate::options::Strategy;

/// Bottom-up evaluation of the recurrence, one table row at a time.
///
/// Cells are filled in increasing order of `rows + cols`, so no recursion is
/// involved and any grid whose count fits in 128 bits can be evaluated.
/// The table is laid out along the shorter side: `O(min(m, n))` space,
/// `O(m * n)` time.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabulatedCounter;

impl PathCountStrategy for TabulatedCounter {
    fn strategy(&self) -> Strategy {
        Strategy::Tabulated
    }

    fn count(&self, dims: GridDims) -> ComputationResult<PathCount> {
        if dims.is_empty() {
            return Ok(PathCount::ZERO);
        }
        // Same count either way round; keep the table along the shorter side.
        let oriented = if dims.rows() >= dims.cols() { dims } else { dims.transpose() };
        let (long, short) = (oriented.rows(), oriented.cols());
        if short == 1 {
            return Ok(PathCount::ONE);
        }
        check_fits(dims)?;

        // row[c] holds count(r, c) for the row being filled. Column 0 is the
        // empty grid. Seeding row[1] with one stands in for the (1, 1) base
        // case: the first pass computes count(1, 1) = 1 + count(1, 0).
        let width = short as usize;
        let mut row = vec![PathCount::ZERO; width + 1];
        row[1] = PathCount::ONE;
        for _ in 0..long {
            for c in 1..=width {
                row[c] = row[c].checked_add(row[c - 1]).ok_or_else(|| overflow(dims))?;
            }
        }
        Ok(row[width])
    }
}
