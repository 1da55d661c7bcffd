//! Best-Result aggregation.
//!
//! Aggregation runs strictly after the walk: [`fold`] reads the finished step
//! sequence, and [`annotate`] then marks the candidates that reach the final
//! best. No step is flagged while the trace is still growing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::step::TraceStep;
use crate::traits::Marker;

/// Optimal value(s) found over a full trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestResult<V> {
    /// Maximum candidate value, `None` while unset.
    pub value: Option<V>,
    /// Maximum candidate value per marker key.
    pub by_key: BTreeMap<usize, V>,
}

impl<V: Copy + Ord> BestResult<V> {
    pub fn unset() -> Self {
        Self {
            value: None,
            by_key: BTreeMap::new(),
        }
    }

    #[inline]
    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Fold one candidate value observed at `key`.
    pub fn offer(&mut self, key: usize, value: V) {
        self.value = Some(self.value.map_or(value, |v| v.max(value)));
        self.by_key
            .entry(key)
            .and_modify(|v| *v = (*v).max(value))
            .or_insert(value);
    }

    #[inline]
    pub fn is_best(&self, value: &V) -> bool {
        self.value.as_ref() == Some(value)
    }

    pub fn at(&self, key: usize) -> Option<V> {
        self.by_key.get(&key).copied()
    }
}

impl<V: Copy + Ord> Default for BestResult<V> {
    fn default() -> Self {
        Self::unset()
    }
}

/// Fold every candidate step into a [`BestResult`].
pub fn fold<M: Marker, V: Copy + Ord>(steps: &[TraceStep<M, V>]) -> BestResult<V> {
    let mut best = BestResult::unset();
    for step in steps.iter().filter(|s| s.candidate) {
        best.offer(step.marker.key(), step.value);
    }
    best
}

/// Set `best` on every candidate whose value equals the final best.
///
/// Returns the number of steps flagged.
pub fn annotate<M, V: Copy + Ord>(steps: &mut [TraceStep<M, V>], best: &BestResult<V>) -> usize {
    let mut flagged = 0;
    for step in steps.iter_mut() {
        step.best = step.candidate && best.is_best(&step.value);
        flagged += usize::from(step.best);
    }
    flagged
}
