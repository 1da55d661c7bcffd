//! Classic binary search over a non-decreasing sequence.
//!
//! One step per probed range `[low, high]`. The walk stops when the range has
//! collapsed (`low == high`) or `input[mid] == target`; that last step is the
//! only terminal and the only candidate, so the Best Result is the value at
//! the final midpoint.
//!
//! Rows start plain; every column of an eliminated half (including the
//! rejected midpoint) is dimmed in all later rows.

use serde::{Deserialize, Serialize};

use crate::engine::{RunContext, TraceOf};
use crate::error::TraceResult;
use crate::step::{Cell, TraceStep};
use crate::traits::{Marker, TraceProblem};
use crate::TraceEngine;

#[derive(Clone)]
pub struct BinarySearch<'a> {
    pub inputs: &'a [i64],
    pub target: i64,
}

/// Probed range of one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchWindow {
    pub low: usize,
    pub high: usize,
    pub mid: usize,
    /// `low` is a bound distinct from `mid` that narrowing will drop.
    pub drops_low: bool,
    /// `high` is a bound distinct from `mid` that narrowing will drop.
    pub drops_high: bool,
    /// `input[mid] == target`.
    pub hit: bool,
}

impl Marker for SearchWindow {
    fn key(&self) -> usize {
        self.mid
    }
}

/// Final midpoint and whether it holds the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub mid: usize,
    pub found: bool,
}

impl<'a> BinarySearch<'a> {
    pub fn new(inputs: &'a [i64], target: i64) -> Self {
        Self { inputs, target }
    }

    /// Outcome reported by the terminal step, `None` for an empty input.
    pub fn outcome(trace: &TraceOf<Self>) -> Option<SearchOutcome> {
        trace.terminals().last().map(|s| SearchOutcome {
            mid: s.marker.mid,
            found: s.marker.hit,
        })
    }

    fn search(
        &self,
        ctx: &mut RunContext<Self>,
        low: usize,
        high: usize,
        row: Vec<Cell>,
    ) -> TraceResult<()> {
        let mid = low + (high - low) / 2;
        let open = low < high;
        let window = SearchWindow {
            low,
            high,
            mid,
            drops_low: open && low != mid,
            drops_high: open && high != mid,
            hit: self.inputs[mid] == self.target,
        };
        let terminal = !open || window.hit;

        ctx.emit(
            TraceStep::new(window, self.inputs[mid])
                .terminal_if(terminal)
                .candidate_if(terminal)
                .with_cells(probe_row(&row, &window)),
        )?;
        if terminal {
            return Ok(());
        }

        let mut next = row;
        if self.target < self.inputs[mid] {
            dim(&mut next[mid..=high]);
            self.search(ctx, low, mid.saturating_sub(1).max(low), next)
        } else {
            dim(&mut next[low..=mid]);
            self.search(ctx, (mid + 1).min(high), high, next)
        }
    }
}

fn dim(cells: &mut [Cell]) {
    for c in cells {
        *c = Cell::DIM;
    }
}

fn probe_row(row: &[Cell], window: &SearchWindow) -> Vec<Cell> {
    let mut cells = row.to_vec();
    if window.drops_low {
        cells[window.low] = Cell::Bound;
    }
    cells[window.mid] = Cell::Probe;
    if window.drops_high {
        cells[window.high] = Cell::Bound;
    }
    cells
}

impl<'a> TraceProblem for BinarySearch<'a> {
    type Marker = SearchWindow;
    type Value = i64;
    type Key = usize;

    fn name(&self) -> &'static str {
        "binary_search"
    }

    fn width(&self) -> usize {
        self.inputs.len()
    }

    fn walk(&self, ctx: &mut RunContext<Self>) -> TraceResult<()> {
        let n = self.inputs.len();
        if n == 0 {
            return Ok(());
        }
        self.search(ctx, 0, n - 1, vec![Cell::PLAIN; n])
    }
}

/// Trace a search for `target` in the sorted `inputs`.
pub fn generate(inputs: &[i64], target: i64) -> TraceResult<TraceOf<BinarySearch<'_>>> {
    TraceEngine::new(BinarySearch::new(inputs, target)).run()
}
