//! Longest non-decreasing subsequence by extend-or-retract search.
//!
//! The walk keeps a running chain of chosen indices. At position `i`:
//! - if the chain is empty or `input[i] >= input[tail]`, `i` is appended and
//!   the walk moves on (there is no skip sibling in that case);
//! - otherwise the walk tries skipping `i` and then retracts the tail and
//!   retries `i` against the new tail. Retraction repeats until extension
//!   becomes legal, because a retracting visit offers no skip branch.
//!
//! Every non-retracting visit emits a pre-decision step holding the current
//! length; leaves emit terminal steps. Retracting visits emit nothing of their
//! own. The memo key is the `(tail, i)` transition, so a cached cell means
//! that exact extension was already explored earlier in the run.

use serde::{Deserialize, Serialize};

use crate::engine::{RunContext, TraceOf};
use crate::error::TraceResult;
use crate::step::{Cell, TraceStep};
use crate::traits::{Marker, TraceProblem};
use crate::utils::pad_to;
use crate::TraceEngine;

#[derive(Clone)]
pub struct LisPolynomial<'a> {
    pub inputs: &'a [i64],
}

/// Chain state at one visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainState {
    pub position: usize,
    /// Last chosen index, `None` for an empty chain.
    pub tail: Option<usize>,
}

impl Marker for ChainState {
    fn key(&self) -> usize {
        self.position
    }
}

impl<'a> LisPolynomial<'a> {
    pub fn new(inputs: &'a [i64]) -> Self {
        Self { inputs }
    }

    fn explore(
        &self,
        ctx: &mut RunContext<Self>,
        i: usize,
        chain: &mut Vec<usize>,
        length: usize,
        retracting: bool,
        row: &mut Vec<Cell>,
    ) -> TraceResult<()> {
        let n = self.inputs.len();
        let tail = chain.last().copied();
        let state = ChainState { position: i, tail };
        let reached_cached = row.last().is_some_and(Cell::is_cached);

        if i == n {
            return ctx.emit(
                TraceStep::new(state, length)
                    .terminal_if(true)
                    .cached_if(reached_cached)
                    .with_cells(row.clone()),
            );
        }

        if !retracting {
            ctx.emit(
                TraceStep::new(state, length)
                    .cached_if(reached_cached)
                    .with_cells(pad_to(row, n)),
            )?;
        }

        match tail {
            Some(j) if self.inputs[i] < self.inputs[j] => {
                if !retracting {
                    row.push(Cell::DIM);
                    self.explore(ctx, i + 1, chain, length, false, row)?;
                    row.pop();
                }

                let mut retracted = row.clone();
                retracted[j] = Cell::Removed;
                chain.pop();
                let outcome = self.explore(ctx, i, chain, length - 1, true, &mut retracted);
                chain.push(j);
                outcome
            }
            _ => {
                let cached = ctx.visit((tail, i));
                chain.push(i);
                row.push(Cell::taken(cached));
                let outcome = self.explore(ctx, i + 1, chain, length + 1, false, row);
                row.pop();
                chain.pop();
                outcome
            }
        }
    }
}

impl<'a> TraceProblem for LisPolynomial<'a> {
    type Marker = ChainState;
    type Value = usize;
    type Key = (Option<usize>, usize);

    fn name(&self) -> &'static str {
        "lis_polynomial"
    }

    fn width(&self) -> usize {
        self.inputs.len()
    }

    fn walk(&self, ctx: &mut RunContext<Self>) -> TraceResult<()> {
        let n = self.inputs.len();
        let mut chain = Vec::with_capacity(n);
        let mut row = Vec::with_capacity(n);
        self.explore(ctx, 0, &mut chain, 0, false, &mut row)
    }
}

pub fn generate(inputs: &[i64]) -> TraceResult<TraceOf<LisPolynomial<'_>>> {
    TraceEngine::new(LisPolynomial::new(inputs)).run()
}
