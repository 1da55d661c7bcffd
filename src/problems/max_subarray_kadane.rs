//! Maximum subarray, Kadane's linear scan.
//!
//! The scan carries a window `[from, to)` and its sum. While the sum is
//! positive the window extends by the next element; otherwise it restarts
//! as the single next element. One step is emitted per window, starting with
//! the empty seed window `[0, 0)` whose sum is 0. Every step is a candidate,
//! the seed included, so the Best Result is never below 0 and all-negative
//! inputs report the empty window.
//!
//! `tone` is a presentation counter only: it rises through positive
//! contributions and falls through the others while extending, and resets on
//! restart.

use serde::{Deserialize, Serialize};

use crate::engine::{RunContext, TraceOf};
use crate::error::TraceResult;
use crate::step::{Cell, TraceStep};
use crate::traits::{Marker, TraceProblem};
use crate::utils::aligned_row;
use crate::TraceEngine;

#[derive(Clone)]
pub struct Kadane<'a> {
    pub inputs: &'a [i64],
}

/// Window `inputs[from..to]` plus its colour counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub from: usize,
    pub to: usize,
    pub tone: i64,
}

impl Window {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }
}

impl Marker for Window {
    fn key(&self) -> usize {
        self.to
    }
}

impl<'a> Kadane<'a> {
    pub fn new(inputs: &'a [i64]) -> Self {
        Self { inputs }
    }
}

impl<'a> TraceProblem for Kadane<'a> {
    type Marker = Window;
    type Value = i64;
    type Key = usize;

    fn name(&self) -> &'static str {
        "max_subarray_kadane"
    }

    fn width(&self) -> usize {
        self.inputs.len()
    }

    fn walk(&self, ctx: &mut RunContext<Self>) -> TraceResult<()> {
        let n = self.inputs.len();
        let mut window = Window {
            from: 0,
            to: 0,
            tone: 0,
        };
        let mut sum = 0i64;
        let mut row: Vec<Cell> = Vec::with_capacity(n);

        loop {
            ctx.emit(
                TraceStep::new(window, sum)
                    .terminal_if(window.to == n)
                    .with_cells(aligned_row(window.from, &row, n)),
            )?;
            if window.to == n {
                return Ok(());
            }

            let x = self.inputs[window.to];
            if sum > 0 {
                let tone = if x > 0 { window.tone + 1 } else { window.tone - 1 };
                if row.len() > 1 {
                    if let Some(last) = row.last_mut() {
                        *last = Cell::toned(window.tone).dimmed();
                    }
                }
                row.push(Cell::toned(tone));
                sum += x;
                window.to += 1;
                window.tone = tone;
            } else {
                row.clear();
                row.push(Cell::toned(0));
                sum = x;
                window = Window {
                    from: window.to,
                    to: window.to + 1,
                    tone: 0,
                };
            }
        }
    }
}

pub fn generate(inputs: &[i64]) -> TraceResult<TraceOf<Kadane<'_>>> {
    TraceEngine::new(Kadane::new(inputs)).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn windows(trace: &TraceOf<Kadane<'_>>) -> Vec<(usize, usize, i64)> {
        trace
            .steps
            .iter()
            .map(|s| (s.marker.from, s.marker.to, s.value))
            .collect()
    }

    #[test]
    fn default_demo_input() {
        let trace = generate(&[-2, 1, -3, 4, 5, 7]).unwrap();
        assert_eq!(
            windows(&trace),
            vec![
                (0, 0, 0),
                (0, 1, -2),
                (1, 2, 1),
                (1, 3, -2),
                (3, 4, 4),
                (3, 5, 9),
                (3, 6, 16),
            ]
        );
        assert_eq!(trace.best_value(), Some(16));
        assert!(trace.steps.last().unwrap().terminal);
        assert!(trace.steps.last().unwrap().best);
    }

    #[test]
    fn all_negative_reports_empty_window() {
        let trace = generate(&[-5, -1, -7]).unwrap();
        assert_eq!(trace.best_value(), Some(0));
        assert!(trace.steps[0].candidate);
        assert!(trace.steps[0].best);
        let all_steps = trace.steps.iter().map(|s| s.value).max();
        assert_eq!(trace.best_value(), all_steps);
    }

    #[test]
    fn tone_and_dimming_while_extending() {
        let trace = generate(&[3, 2, -1]).unwrap();
        let tones: Vec<i64> = trace.steps.iter().map(|s| s.marker.tone).collect();
        assert_eq!(tones, vec![0, 0, 1, 0]);
        assert_eq!(
            trace.steps[3].cells,
            vec![Cell::toned(0), Cell::toned(1).dimmed(), Cell::toned(0)]
        );
        assert_eq!(
            trace.steps[2].cells,
            vec![Cell::toned(0), Cell::toned(1), Cell::Empty]
        );
    }

    #[test]
    fn rows_are_aligned() {
        let inputs = [-1, -1, 2, 3];
        let trace = generate(&inputs).unwrap();
        for step in &trace.steps {
            assert_eq!(step.cells.len(), inputs.len());
        }
        let last = trace.steps.last().unwrap();
        assert_eq!((last.marker.from, last.marker.to), (2, 4));
        assert!(last.cells[0].is_empty() && last.cells[1].is_empty());
    }

    #[test]
    fn empty_input_is_seed_only() {
        let trace = generate(&[]).unwrap();
        assert_eq!(trace.len(), 1);
        assert!(trace.steps[0].terminal);
        assert_eq!(trace.best_value(), Some(0));
    }
}
