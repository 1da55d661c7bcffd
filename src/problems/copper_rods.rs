//! Rod cutting ("copper rods") by exhaustive partition.
//!
//! `prices[i]` is the price of a piece of length `i + 1`. From a remaining
//! length `w` the walk tries every piece that fits, shortest first, and
//! recurses on `w - len`; a remaining length of 0 is a leaf carrying the
//! accumulated value. Only leaves emit steps, and their row lists the pieces
//! cut along the way.
//!
//! Cache marks are keyed by remaining length: a node's pieces are cached when
//! the same remaining length was already expanded earlier in the run. The
//! recursion itself stays exhaustive, so the Best Result equals the classical
//! optimum computed by [`optimal_value`].

use serde::{Deserialize, Serialize};

use crate::engine::{RunContext, TraceOf};
use crate::error::TraceResult;
use crate::step::{Cell, TraceStep};
use crate::traits::{Marker, TraceProblem};
use crate::TraceEngine;

/// One rod-cutting instance.
///
/// Prices are integers. Fractional prices (such as `12.40`) must be scaled to
/// a fixed integer unit before tracing, e.g. cents, and the best value scaled
/// back for display.
#[derive(Clone)]
pub struct CopperRods<'a> {
    pub prices: &'a [i64],
    /// Total rod length to partition.
    pub length: usize,
}

/// Leaf of the partition tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cut {
    /// Length still uncut; 0 for every emitted step.
    pub remaining: usize,
    /// Number of pieces cut so far.
    pub pieces: usize,
}

impl Marker for Cut {
    fn key(&self) -> usize {
        self.remaining
    }
}

impl<'a> CopperRods<'a> {
    pub fn new(prices: &'a [i64], length: usize) -> Self {
        Self { prices, length }
    }

    fn explore(
        &self,
        ctx: &mut RunContext<Self>,
        value: i64,
        remaining: usize,
        row: &mut Vec<Cell>,
    ) -> TraceResult<()> {
        if remaining == 0 {
            let cut = Cut {
                remaining,
                pieces: row.len(),
            };
            return ctx.emit(
                TraceStep::new(cut, value)
                    .terminal_if(true)
                    .cached_if(row.last().is_some_and(Cell::is_cached))
                    .with_cells(row.clone()),
            );
        }

        let cached = ctx.visit(remaining);
        for (i, &price) in self.prices.iter().enumerate() {
            let len = i + 1;
            if len > remaining {
                break;
            }
            row.push(Cell::Piece { len, cached });
            self.explore(ctx, value + price, remaining - len, row)?;
            row.pop();
        }
        Ok(())
    }
}

impl<'a> TraceProblem for CopperRods<'a> {
    type Marker = Cut;
    type Value = i64;
    type Key = usize;

    fn name(&self) -> &'static str {
        "copper_rods"
    }

    fn width(&self) -> usize {
        self.length
    }

    fn walk(&self, ctx: &mut RunContext<Self>) -> TraceResult<()> {
        let mut row = Vec::with_capacity(self.length);
        self.explore(ctx, 0, self.length, &mut row)
    }
}

/// Bottom-up optimum: `best(0) = 0`, `best(w) = max price[len-1] + best(w-len)`.
///
/// `None` when `length > 0` and no piece fits (empty price table).
pub fn optimal_value(prices: &[i64], length: usize) -> Option<i64> {
    let mut best: Vec<Option<i64>> = vec![None; length + 1];
    best[0] = Some(0);
    for w in 1..=length {
        let candidate = prices
            .iter()
            .enumerate()
            .take_while(|(i, _)| *i < w)
            .filter_map(|(i, &p)| best[w - i - 1].map(|b| b + p))
            .max();
        best[w] = candidate;
    }
    best[length]
}

pub fn generate(prices: &[i64], length: usize) -> TraceResult<TraceOf<CopperRods<'_>>> {
    TraceEngine::new(CopperRods::new(prices, length)).run()
}
