// crates/core/src/options.rs
use std::fmt;
use std::str::FromStr;

use grid_paths_shared_kernel::DomainError;
use serde::{Deserialize, Serialize};

/// Evaluation strategy used by [`crate::PathCounter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Top-down recursion with a per-call memo
    #[default]
    #[serde(alias = "memo")]
    Memoized,
    /// Top-down recursion without a memo (exponential)
    #[serde(alias = "brute", alias = "bruteforce")]
    BruteForce,
    /// Bottom-up table, no recursion
    #[serde(alias = "table")]
    Tabulated,
    /// Binomial coefficient `C(m + n - 2, m - 1)`
    #[serde(alias = "closedform", alias = "binomial")]
    ClosedForm,
}

impl Strategy {
    pub const ALL: [Self; 4] = [Self::Memoized, Self::BruteForce, Self::Tabulated, Self::ClosedForm];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Memoized => "memoized",
            Self::BruteForce => "brute-force",
            Self::Tabulated => "tabulated",
            Self::ClosedForm => "closed-form",
        }
    }

    /// Whether evaluation recurses once per step and is bounded by the
    /// configured recursion depth.
    pub const fn is_recursive(self) -> bool {
        matches!(self, Self::Memoized | Self::BruteForce)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memo" | "memoized" => Ok(Self::Memoized),
            "brute" | "brute-force" | "bruteforce" => Ok(Self::BruteForce),
            "table" | "tabulated" => Ok(Self::Tabulated),
            "closed-form" | "closedform" | "binomial" => Ok(Self::ClosedForm),
            other => Err(DomainError::UnknownStrategy { name: other.to_string() }),
        }
    }
}
