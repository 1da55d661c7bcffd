//! Maximum subarray by exhaustive extend/restart recursion.
//!
//! Every node is a window `[from, to)`. A node with `to < n` branches into
//! "restart a new window at `to`" and "extend the current window by
//! `input[to]`"; nodes with `to == n` are terminal. Two framings differ only in
//! branch order:
//! - [`Framing::Subset`] visits the restart branch first and shows the
//!   columns before the window as plain cells,
//! - [`Framing::Interval`] visits the extend branch first, leaves the columns
//!   before the window empty and dims the previous last cell of an extended
//!   row.
//!
//! Every window is a candidate, the empty root included. Terminal windows
//! alone are only the suffixes of the input, so folding all of them is what
//! makes the Best Result the maximum contiguous sum, floored at the root's 0.
//!
//! The cache annotation is deliberately coarse: nodes are recorded under the
//! demo's `(i, j)` coordinates and every child cell checks the fixed key
//! `(to, n - 1)` before the current node is recorded.

use serde::{Deserialize, Serialize};

use crate::engine::{RunContext, TraceOf};
use crate::error::TraceResult;
use crate::problems::max_subarray_kadane::Window;
use crate::step::{Cell, TraceStep};
use crate::traits::TraceProblem;
use crate::utils::aligned_row_with;
use crate::TraceEngine;

/// Branch order of the brute-force walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Framing {
    /// Restart branch before extend branch.
    Subset,
    /// Extend branch before restart branch.
    Interval,
}

#[derive(Clone)]
pub struct BruteMaxSubarray<'a> {
    pub inputs: &'a [i64],
    pub framing: Framing,
}

/// Memo coordinate of a node: `i` is 0 for the empty root and `from + 1`
/// otherwise, `j` is `to`.
#[inline]
fn node_key(from: usize, to: usize) -> (usize, usize) {
    if from == to {
        (0, to)
    } else {
        (from + 1, to)
    }
}

impl<'a> BruteMaxSubarray<'a> {
    pub fn new(inputs: &'a [i64], framing: Framing) -> Self {
        Self { inputs, framing }
    }

    fn explore(
        &self,
        ctx: &mut RunContext<Self>,
        from: usize,
        to: usize,
        sum: i64,
        row: &[Cell],
    ) -> TraceResult<()> {
        let n = self.inputs.len();
        let window = Window { from, to, tone: 0 };
        let lead = match self.framing {
            Framing::Subset => Cell::PLAIN,
            Framing::Interval => Cell::Empty,
        };
        let step = TraceStep::new(window, sum)
            .cached_if(row.last().is_some_and(Cell::is_cached))
            .with_cells(aligned_row_with(lead, from, row, n));

        if to == n {
            return ctx.emit(step.terminal_if(true));
        }

        let cached = ctx.seen(&(to, n - 1));
        ctx.visit(node_key(from, to));
        ctx.emit(step)?;

        let x = self.inputs[to];
        let fresh = [Cell::taken(cached)];
        let mut grown = row.to_vec();
        if self.framing == Framing::Interval && grown.len() > 1 {
            if let Some(last) = grown.last_mut() {
                *last = last.dimmed();
            }
        }
        grown.push(Cell::taken(cached));

        match self.framing {
            Framing::Subset => {
                self.explore(ctx, to, to + 1, x, &fresh)?;
                self.explore(ctx, from, to + 1, sum + x, &grown)
            }
            Framing::Interval => {
                self.explore(ctx, from, to + 1, sum + x, &grown)?;
                self.explore(ctx, to, to + 1, x, &fresh)
            }
        }
    }
}

impl<'a> TraceProblem for BruteMaxSubarray<'a> {
    type Marker = Window;
    type Value = i64;
    type Key = (usize, usize);

    fn name(&self) -> &'static str {
        match self.framing {
            Framing::Subset => "max_subarray_subset",
            Framing::Interval => "max_subarray_interval",
        }
    }

    fn width(&self) -> usize {
        self.inputs.len()
    }

    fn walk(&self, ctx: &mut RunContext<Self>) -> TraceResult<()> {
        self.explore(ctx, 0, 0, 0, &[])
    }
}

pub fn generate(inputs: &[i64], framing: Framing) -> TraceResult<TraceOf<BruteMaxSubarray<'_>>> {
    TraceEngine::new(BruteMaxSubarray::new(inputs, framing)).run()
}
