// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ComputationError, ComputationResult, DomainError, DomainResult, ErrorContext, GridPathsError, Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{Axis, GridDims, PathCount};
