// crates/core/src/lib.rs
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

//! Counting monotone lattice paths.
//!
//! A traveler starts in the top-left cell of an `m x n` grid and may only
//! move down or right. Every move shrinks the remaining grid by one row or
//! one column, so the number of ways to reach the bottom-right cell obeys
//!
//! ```text
//! count(1, 1) = 1
//! count(m, n) = 0                              if m == 0 or n == 0
//! count(m, n) = count(m - 1, n) + count(m, n - 1)
//! ```
//!
//! The recurrence revisits the same subgrids over and over, which makes the
//! plain recursion exponential in `m + n`. [`strategies::MemoizedCounter`]
//! caches each `(m, n)` subproblem for the duration of one call and brings
//! the cost down to `O(m * n)`. The other strategies exist as a baseline
//! ([`strategies::BruteForceCounter`]), as a stack-free alternative for large
//! grids ([`strategies::TabulatedCounter`]) and as an independent oracle
//! ([`strategies::ClosedFormCounter`], `C(m + n - 2, m - 1)`).

pub mod config;
pub mod counter;
pub mod memo;
pub mod options;
pub mod strategies;

pub use config::{CounterConfig, CounterConfigBuilder, CounterConfigBuilderError, DEFAULT_MAX_RECURSION_DEPTH};
pub use counter::{CountReport, PathCounter};
pub use memo::{Memo, MemoStats};
pub use options::Strategy;
pub use strategies::PathCountStrategy;
