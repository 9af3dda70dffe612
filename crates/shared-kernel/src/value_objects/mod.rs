// crates/shared-kernel/src/value_objects/mod.rs
pub mod dims;
pub mod path_count;

pub use dims::{Axis, GridDims};
pub use path_count::PathCount;
