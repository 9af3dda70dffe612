// crates/core/src/strategies/closed_form.rs
use grid_paths_shared_kernel::{ComputationResult, GridDims, PathCount};

use super::{PathCountStrategy, check_fits, overflow};
use crate::options::Strategy;

/// `count(m, n) = C(m + n - 2, m - 1)`: a path is a choice of which of the
/// `m + n - 2` moves go down.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosedFormCounter;

impl PathCountStrategy for ClosedFormCounter {
    fn strategy(&self) -> Strategy {
        Strategy::ClosedForm
    }

    fn count(&self, dims: GridDims) -> ComputationResult<PathCount> {
        if dims.is_empty() {
            return Ok(PathCount::ZERO);
        }
        check_fits(dims)?;
        let moves = u128::from(dims.rows()) + u128::from(dims.cols()) - 2;
        let downs = u128::from(dims.rows().min(dims.cols())) - 1;
        binomial(moves, downs).map(PathCount::new).ok_or_else(|| overflow(dims))
    }
}

/// Multiplicative binomial coefficient.
///
/// After step `i` the accumulator equals `C(n - k + i, i)`, which never
/// exceeds the final value, so `None` means the result itself overflows.
pub fn binomial(n: u128, k: u128) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 1..=k {
        let factor = n - k + i;
        // acc * factor is divisible by i; cancel the common part first so the
        // product stays as small as the next accumulator.
        let g = gcd(acc, i);
        let divisor = i / g;
        acc = (acc / g).checked_mul(factor / divisor)?;
    }
    Some(acc)
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
