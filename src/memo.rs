//! Per-run memoization tracker.
//!
//! A [`MemoSet`] records which subproblems a run has already visited. Engines
//! use it only to annotate revisits as cached; recursion is never pruned by
//! it. Each run owns a fresh set through its [`RunContext`](crate::engine::RunContext),
//! so nothing recorded here outlives the run.

use std::collections::HashSet;
use std::hash::Hash;

/// Set of subproblem identifiers visited so far in one run.
#[derive(Debug, Clone)]
pub struct MemoSet<K> {
    seen: HashSet<K>,
}

impl<K: Hash + Eq> MemoSet<K> {
    pub fn new() -> Self {
        Self {
            seen: HashSet::new(),
        }
    }

    /// Record a visit to `key`.
    ///
    /// Returns `true` when `key` had already been recorded earlier in the run.
    #[inline]
    pub fn visit(&mut self, key: K) -> bool {
        !self.seen.insert(key)
    }

    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.seen.contains(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn clear(&mut self) {
        self.seen.clear();
    }
}

impl<K: Hash + Eq> Default for MemoSet<K> {
    fn default() -> Self {
        Self::new()
    }
}
