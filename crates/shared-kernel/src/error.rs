// crates/shared-kernel/src/error.rs
use thiserror::Error;

use crate::value_objects::Axis;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum GridPathsError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<GridPathsError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Computation error: {0}")]
    Computation(#[from] ComputationError),
}

pub type Result<T> = std::result::Result<T, GridPathsError>;

/// Errors raised while validating inputs and configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid argument: {axis} must be non-negative, got {value}")]
    NegativeDimension { axis: Axis, value: i64 },

    #[error("Invalid argument: {axis} = {value} does not fit in a grid dimension")]
    DimensionTooLarge { axis: Axis, value: i64 },

    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("Unknown strategy: {name}")]
    UnknownStrategy { name: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Errors raised while evaluating a path count.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComputationError {
    #[error("Path count for a {rows}x{cols} grid overflows 128 bits")]
    Overflow { rows: u32, cols: u32 },

    #[error("Recursion depth {depth} exceeds the configured limit of {limit}; use the tabulated strategy")]
    RecursionLimit { depth: u64, limit: usize },
}

pub type ComputationResult<T> = std::result::Result<T, ComputationError>;

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfiguration {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for GridPathsError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<GridPathsError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| GridPathsError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| GridPathsError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}

impl GridPathsError {
    /// Walks through any `Context` layers and returns the innermost error.
    pub fn root(&self) -> &GridPathsError {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }
}
