//! Core trait definitions for traceable algorithms.
//!
//! To visualise an algorithm, implement [`TraceProblem`] for a struct that
//! captures one instance (input sequence plus run parameters). The
//! [`TraceEngine`](crate::engine::TraceEngine) then owns everything that is
//! shared between algorithms:
//! - a fresh memoization set per run,
//! - the ordered step sequence the walk appends to,
//! - the Best Result fold and the `best` annotation pass.
//!
//! The walk itself must not change what the algorithm computes. Every
//! terminal value it emits must be one the plain form of the algorithm would
//! also produce for the same input.

use std::fmt::Debug;
use std::hash::Hash;

use crate::engine::RunContext;
use crate::error::TraceResult;

/// Position marker carried by each step.
pub trait Marker: Clone + Debug + PartialEq {
    /// Position used to group candidates in
    /// [`BestResult::by_key`](crate::aggregate::BestResult::by_key).
    fn key(&self) -> usize;
}

/// A fixed, traceable algorithm instance.
///
/// Inputs are immutable for the duration of a run; a changed input is a new
/// instance.
pub trait TraceProblem: Sized {
    /// Position marker(s) for one step (range, window, chain tail, ...).
    type Marker: Marker;

    /// Partial or candidate value; ordered so the best can be folded.
    type Value: Copy + Ord + Debug;

    /// Memoization Set identifier.
    type Key: Hash + Eq + Debug;

    /// Stable identifier used in diagnostics and spans.
    fn name(&self) -> &'static str;

    /// Number of cells per step row.
    fn width(&self) -> usize;

    /// Walk the algorithm, emitting steps in natural order.
    ///
    /// Recursive engines emit parents before children, iterative ones in
    /// discovery order. Errors come only from the context (step limit) and
    /// must be propagated unchanged.
    fn walk(&self, ctx: &mut RunContext<Self>) -> TraceResult<()>;
}

impl Marker for usize {
    fn key(&self) -> usize {
        *self
    }
}
