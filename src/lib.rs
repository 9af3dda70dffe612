//! Count the monotone lattice paths across an `m x n` grid.
//!
//! ```
//! assert_eq!(grid_paths::count(2, 3).unwrap().value(), 3);
//! assert_eq!(grid_paths::count(3, 3).unwrap().value(), 6);
//! assert_eq!(grid_paths::count(0, 4).unwrap().value(), 0);
//! ```
#![allow(clippy::multiple_crate_versions)]

pub use grid_paths_core::{
    CountReport, CounterConfig, CounterConfigBuilder, DEFAULT_MAX_RECURSION_DEPTH, Memo, MemoStats, PathCountStrategy,
    PathCounter, Strategy, strategies,
};
pub use grid_paths_shared_kernel::{
    Axis, ComputationError, DomainError, ErrorContext, GridDims, GridPathsError, PathCount, Result,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Count paths with the default memoized counter.
///
/// # Errors
///
/// See [`PathCounter::count`].
pub fn count(rows: u32, cols: u32) -> Result<PathCount> {
    PathCounter::default().count(rows, cols)
}

/// Count paths for signed dimensions, rejecting negative values.
///
/// # Errors
///
/// Returns [`DomainError::NegativeDimension`] for a negative side, plus
/// everything [`count`] can return.
pub fn count_signed(rows: i64, cols: i64) -> Result<PathCount> {
    let dims = GridDims::try_from((rows, cols))?;
    PathCounter::default().count_dims(dims)
}
