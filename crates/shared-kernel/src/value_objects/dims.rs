// crates/shared-kernel/src/value_objects/dims.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Names one side of the grid, used in validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Rows,
    Cols,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rows => f.write_str("rows"),
            Self::Cols => f.write_str("cols"),
        }
    }
}

/// Rows and columns left to traverse before reaching the goal cell.
///
/// The pair is ordered: `(2, 3)` and `(3, 2)` are different subproblems and
/// hash to different memo entries even though their counts agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridDims {
    rows: u32,
    cols: u32,
}

impl GridDims {
    #[inline]
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    #[inline]
    pub const fn rows(self) -> u32 {
        self.rows
    }

    #[inline]
    pub const fn cols(self) -> u32 {
        self.cols
    }

    /// A grid with no rows or no columns has nothing to traverse.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// The single-cell grid: the traveler already stands on the goal.
    #[inline]
    pub const fn is_goal(self) -> bool {
        self.rows == 1 && self.cols == 1
    }

    /// Subgrid left after moving one row down.
    ///
    /// Callers must check `is_empty` first.
    #[inline]
    pub const fn step_down(self) -> Self {
        Self::new(self.rows - 1, self.cols)
    }

    /// Subgrid left after moving one column right.
    ///
    /// Callers must check `is_empty` first.
    #[inline]
    pub const fn step_right(self) -> Self {
        Self::new(self.rows, self.cols - 1)
    }

    #[inline]
    pub const fn transpose(self) -> Self {
        Self::new(self.cols, self.rows)
    }

    /// Longest chain of recursive calls needed to resolve this grid.
    #[inline]
    pub const fn depth(self) -> u64 {
        self.rows as u64 + self.cols as u64
    }
}

impl From<(u32, u32)> for GridDims {
    fn from((rows, cols): (u32, u32)) -> Self {
        Self::new(rows, cols)
    }
}

impl TryFrom<(i64, i64)> for GridDims {
    type Error = DomainError;

    fn try_from((rows, cols): (i64, i64)) -> Result<Self, Self::Error> {
        Ok(Self::new(checked_dim(Axis::Rows, rows)?, checked_dim(Axis::Cols, cols)?))
    }
}

fn checked_dim(axis: Axis, value: i64) -> Result<u32, DomainError> {
    if value < 0 {
        return Err(DomainError::NegativeDimension { axis, value });
    }
    u32::try_from(value).map_err(|_| DomainError::DimensionTooLarge { axis, value })
}

impl fmt::Display for GridDims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
