// crates/core/src/memo.rs
use grid_paths_shared_kernel::{GridDims, PathCount};
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Largest number of slots reserved up front; bigger grids grow on demand.
const MAX_PREALLOC: usize = 1 << 16;

/// Per-call cache of resolved subgrids.
///
/// A subgrid is either absent (unvisited) or present (resolved). Entries are
/// never overwritten or removed while the memo lives.
#[derive(Debug, Default)]
pub struct Memo {
    entries: HashMap<GridDims, PathCount>,
    hits: u64,
    misses: u64,
}

/// Cache activity observed during one memoized evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

impl Memo {
    /// Reserve room for every interior subgrid of `dims`.
    pub fn for_grid(dims: GridDims) -> Self {
        let interior = (dims.rows() as usize).saturating_mul(dims.cols() as usize);
        Self {
            entries: HashMap::with_capacity(interior.min(MAX_PREALLOC)),
            ..Self::default()
        }
    }

    #[inline]
    pub fn get(&mut self, dims: GridDims) -> Option<PathCount> {
        match self.entries.get(&dims) {
            Some(&count) => {
                self.hits += 1;
                log::trace!("memo hit {dims} -> {count}");
                Some(count)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    #[inline]
    pub fn insert(&mut self, dims: GridDims, count: PathCount) {
        let previous = self.entries.insert(dims, count);
        debug_assert!(previous.is_none_or(|p| p == count), "memo entry for {dims} changed");
    }

    pub fn stats(&self) -> MemoStats {
        MemoStats {
            entries: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}
