//! Longest non-decreasing subsequence by exhaustive include/skip recursion.
//!
//! At every position the walk first tries to extend the chain ending at the
//! last chosen index (legal when nothing is chosen yet or the value does not
//! decrease), then tries skipping the position. Only leaves (`i == n`) emit
//! steps, so the trace holds one row per explored subsequence.
//!
//! The cache annotation is keyed by position alone: an extend cell is marked
//! cached when some earlier branch already extended at the same position.
//! Nothing is pruned; the walk stays O(2^n).

use serde::{Deserialize, Serialize};

use crate::engine::{RunContext, TraceOf};
use crate::error::TraceResult;
use crate::step::{Cell, TraceStep};
use crate::traits::{Marker, TraceProblem};
use crate::TraceEngine;

#[derive(Clone)]
pub struct LisExponential<'a> {
    pub inputs: &'a [i64],
}

/// Leaf of the include/skip tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaf {
    /// Always `n` for emitted steps.
    pub position: usize,
    /// Last chosen index, `None` if the subsequence is empty.
    pub last: Option<usize>,
}

impl Marker for Leaf {
    fn key(&self) -> usize {
        self.position
    }
}

impl<'a> LisExponential<'a> {
    pub fn new(inputs: &'a [i64]) -> Self {
        Self { inputs }
    }

    fn explore(
        &self,
        ctx: &mut RunContext<Self>,
        i: usize,
        last: Option<usize>,
        length: usize,
        row: &mut Vec<Cell>,
    ) -> TraceResult<()> {
        if i == self.inputs.len() {
            let cached = row.last().is_some_and(Cell::is_cached);
            return ctx.emit(
                TraceStep::new(Leaf { position: i, last }, length)
                    .terminal_if(true)
                    .cached_if(cached)
                    .with_cells(row.clone()),
            );
        }

        if last.map_or(true, |j| self.inputs[i] >= self.inputs[j]) {
            let cached = ctx.visit(i);
            row.push(Cell::Filled {
                cached,
                dim: false,
                tone: length as i64,
            });
            self.explore(ctx, i + 1, Some(i), length + 1, row)?;
            row.pop();
        }

        row.push(Cell::Empty);
        self.explore(ctx, i + 1, last, length, row)?;
        row.pop();
        Ok(())
    }
}

impl<'a> TraceProblem for LisExponential<'a> {
    type Marker = Leaf;
    type Value = usize;
    type Key = usize;

    fn name(&self) -> &'static str {
        "lis_exponential"
    }

    fn width(&self) -> usize {
        self.inputs.len()
    }

    fn walk(&self, ctx: &mut RunContext<Self>) -> TraceResult<()> {
        let mut row = Vec::with_capacity(self.inputs.len());
        self.explore(ctx, 0, None, 0, &mut row)
    }
}

pub fn generate(inputs: &[i64]) -> TraceResult<TraceOf<LisExponential<'_>>> {
    TraceEngine::new(LisExponential::new(inputs)).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_increasing_elements() {
        let trace = generate(&[1, 2]).unwrap();
        // take-take, take-skip, skip-take, skip-skip
        assert_eq!(trace.terminal_values(), vec![2, 1, 1, 0]);
        assert_eq!(trace.best_value(), Some(2));
        assert_eq!(
            trace.steps[0].cells,
            vec![
                Cell::Filled {
                    cached: false,
                    dim: false,
                    tone: 0
                },
                Cell::Filled {
                    cached: false,
                    dim: false,
                    tone: 1
                },
            ]
        );
        // second extension at position 1 comes from the skip branch
        assert!(trace.steps[2].cells[1].is_cached());
        assert!(trace.steps[2].cached);
    }

    #[test]
    fn decreasing_pair_cannot_extend() {
        let trace = generate(&[5, 3]).unwrap();
        assert_eq!(trace.terminal_values(), vec![1, 1, 0]);
        assert_eq!(trace.steps[0].marker.last, Some(0));
        assert_eq!(trace.steps[0].cells[1], Cell::Empty);
    }

    #[test]
    fn equal_values_extend() {
        let trace = generate(&[2, 2, 2]).unwrap();
        assert_eq!(trace.best_value(), Some(3));
        assert_eq!(trace.len(), 8);
    }

    #[test]
    fn empty_input_has_single_empty_leaf() {
        let trace = generate(&[]).unwrap();
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.best_value(), Some(0));
        assert!(trace.steps[0].cells.is_empty());
    }
}
