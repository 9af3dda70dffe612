// tests/common/mod.rs
//! Shared test utilities

pub mod fixtures;

#[allow(unused_imports)]
pub use fixtures::*;

use grid_paths::{CounterConfig, PathCounter, Strategy};

/// Route `log` output through the test harness. Safe to call repeatedly.
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub fn counter(strategy: Strategy) -> PathCounter {
    PathCounter::new(CounterConfig::with_strategy(strategy))
}
