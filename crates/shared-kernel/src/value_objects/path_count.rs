// crates/shared-kernel/src/value_objects/path_count.rs
use serde::{Deserialize, Serialize};

/// Number of monotone paths across a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathCount(u128);

impl PathCount {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1);

    #[inline]
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    pub const fn value(self) -> u128 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.0.checked_add(rhs.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl Default for PathCount {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<u128> for PathCount {
    fn from(value: u128) -> Self {
        Self::new(value)
    }
}

impl From<u64> for PathCount {
    fn from(value: u64) -> Self {
        Self::new(u128::from(value))
    }
}

impl From<PathCount> for u128 {
    fn from(count: PathCount) -> Self {
        count.value()
    }
}

mod display {
    use std::fmt;

    use super::PathCount;

    impl fmt::Display for PathCount {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }
}
