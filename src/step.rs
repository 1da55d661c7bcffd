//! Trace steps and the per-cell markers that align them for rendering.
//!
//! Every engine emits an ordered sequence of [`TraceStep`]s. A step carries the
//! engine-specific position marker, the partial or candidate value, a handful
//! of flags, and a row of [`Cell`]s one per rendered column.

use serde::{Deserialize, Serialize};

/// Rendering marker for one column of a step's row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// Element taken by the branch that produced the row.
    ///
    /// `tone` is a presentation-only intensity (current length for the
    /// exponential LIS, running step counter for Kadane).
    Filled { cached: bool, dim: bool, tone: i64 },
    /// Column the branch does not cover; kept for alignment.
    Empty,
    /// Chosen element retracted by backtracking.
    Removed,
    /// Range bound about to be dropped by binary search.
    Bound,
    /// Midpoint probed by binary search.
    Probe,
    /// Rod piece of `len` units.
    Piece { len: usize, cached: bool },
}

impl Cell {
    pub const PLAIN: Cell = Cell::Filled {
        cached: false,
        dim: false,
        tone: 0,
    };

    pub const DIM: Cell = Cell::Filled {
        cached: false,
        dim: true,
        tone: 0,
    };

    #[inline]
    pub fn taken(cached: bool) -> Self {
        Cell::Filled {
            cached,
            dim: false,
            tone: 0,
        }
    }

    #[inline]
    pub fn toned(tone: i64) -> Self {
        Cell::Filled {
            cached: false,
            dim: false,
            tone,
        }
    }

    /// True for filled cells and rod pieces reached through a cached subproblem.
    #[inline]
    pub fn is_cached(&self) -> bool {
        matches!(
            self,
            Cell::Filled { cached: true, .. } | Cell::Piece { cached: true, .. }
        )
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Return the dimmed version of a filled cell; other cells are unchanged.
    pub fn dimmed(self) -> Self {
        match self {
            Cell::Filled { cached, tone, .. } => Cell::Filled {
                cached,
                dim: true,
                tone,
            },
            other => other,
        }
    }
}

/// One annotated record of an engine's execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep<M, V> {
    /// Engine-specific position marker(s).
    pub marker: M,
    /// Partial or candidate value at this point.
    pub value: V,
    /// Completed path: leaf of the recursion or end of the iteration.
    pub terminal: bool,
    /// Reached through a subproblem already visited in this run.
    pub cached: bool,
    /// Participates in the Best Result fold.
    pub candidate: bool,
    /// Resolved after the full trace: candidate whose value equals the best.
    pub best: bool,
    pub cells: Vec<Cell>,
}

impl<M, V> TraceStep<M, V> {
    /// A non-terminal, uncached candidate step with no cells.
    pub fn new(marker: M, value: V) -> Self {
        Self {
            marker,
            value,
            terminal: false,
            cached: false,
            candidate: true,
            best: false,
            cells: Vec::new(),
        }
    }

    pub fn terminal_if(mut self, terminal: bool) -> Self {
        self.terminal = terminal;
        self
    }

    pub fn cached_if(mut self, cached: bool) -> Self {
        self.cached = cached;
        self
    }

    pub fn candidate_if(mut self, candidate: bool) -> Self {
        self.candidate = candidate;
        self
    }

    pub fn with_cells(mut self, cells: Vec<Cell>) -> Self {
        self.cells = cells;
        self
    }

    /// Number of cached cells in the row.
    pub fn cached_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_cached()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, TraceStep};

    #[test]
    fn builder_flags() {
        let step = TraceStep::new((1usize, 2usize), 7i64)
            .terminal_if(true)
            .cached_if(true)
            .candidate_if(false)
            .with_cells(vec![Cell::PLAIN, Cell::Empty]);
        assert!(step.terminal);
        assert!(step.cached);
        assert!(!step.candidate);
        assert!(!step.best);
        assert_eq!(step.cells.len(), 2);
    }

    #[test]
    fn cached_cells_counts_pieces_and_filled() {
        let step = TraceStep::new((), 0i64).with_cells(vec![
            Cell::taken(true),
            Cell::Piece {
                len: 2,
                cached: true,
            },
            Cell::Piece {
                len: 1,
                cached: false,
            },
            Cell::Removed,
        ]);
        assert_eq!(step.cached_cells(), 2);
    }

    #[test]
    fn dimmed_keeps_tone_and_cache() {
        let cell = Cell::Filled {
            cached: true,
            dim: false,
            tone: -2,
        };
        assert_eq!(
            cell.dimmed(),
            Cell::Filled {
                cached: true,
                dim: true,
                tone: -2
            }
        );
        assert_eq!(Cell::Empty.dimmed(), Cell::Empty);
    }
}
