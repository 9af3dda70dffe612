// crates/core/src/config.rs
use derive_builder::Builder;
use grid_paths_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

use crate::options::Strategy;

/// Recursion depth allowed by default for the recursive strategies.
///
/// A grid of `m x n` needs up to `m + n` nested calls.
pub const DEFAULT_MAX_RECURSION_DEPTH: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
#[serde(default)]
pub struct CounterConfig {
    #[builder(default)]
    pub strategy: Strategy,
    #[builder(default = "DEFAULT_MAX_RECURSION_DEPTH")]
    pub max_recursion_depth: usize,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            max_recursion_depth: DEFAULT_MAX_RECURSION_DEPTH,
        }
    }
}

impl CounterConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.max_recursion_depth {
            Some(depth) => validate_depth(depth),
            None => Ok(()),
        }
    }
}

fn validate_depth(depth: usize) -> Result<(), String> {
    if depth == 0 {
        return Err("max_recursion_depth must be greater than zero".to_string());
    }
    Ok(())
}

impl CounterConfig {
    pub fn builder() -> CounterConfigBuilder {
        CounterConfigBuilder::default()
    }

    pub fn with_strategy(strategy: Strategy) -> Self {
        Self { strategy, ..Self::default() }
    }

    /// Load a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> DomainResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        validate_depth(config.max_recursion_depth)
            .map_err(|reason| DomainError::InvalidConfiguration { reason })?;
        Ok(config)
    }
}

impl From<CounterConfigBuilderError> for DomainError {
    fn from(err: CounterConfigBuilderError) -> Self {
        Self::InvalidConfiguration { reason: err.to_string() }
    }
}
