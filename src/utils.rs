//! Assorted utilities and helpers.
//!
//! Row helpers keep every step's cells aligned to the input width.

use crate::step::Cell;

/// Step ceiling used by the gallery and the probe for a row width.
///
/// Exhaustive walks grow as 2^width, so the bound doubles per column up to
/// width 20 and stays flat after that.
#[inline]
pub fn default_step_limit(width: usize) -> usize {
    const FLOOR: usize = 1 << 10;
    const CAP: usize = 1 << 22;
    if width >= 20 {
        CAP
    } else {
        (4usize << width).clamp(FLOOR, CAP)
    }
}

/// Clone `row` and append `Empty` cells until it is `width` long.
pub fn pad_to(row: &[Cell], width: usize) -> Vec<Cell> {
    let mut out = Vec::with_capacity(width.max(row.len()));
    out.extend_from_slice(row);
    out.resize(width.max(row.len()), Cell::Empty);
    out
}

/// Place `window` at column `offset` inside a `width`-wide row of `Empty` cells.
pub fn aligned_row(offset: usize, window: &[Cell], width: usize) -> Vec<Cell> {
    aligned_row_with(Cell::Empty, offset, window, width)
}

/// Like [`aligned_row`], but the `offset` leading columns hold `lead`.
pub fn aligned_row_with(lead: Cell, offset: usize, window: &[Cell], width: usize) -> Vec<Cell> {
    let mut out = vec![lead; offset.min(width)];
    out.extend_from_slice(window);
    if out.len() < width {
        out.resize(width, Cell::Empty);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_limit_bounds() {
        assert_eq!(default_step_limit(0), 1 << 10);
        assert_eq!(default_step_limit(8), 1 << 10);
        assert_eq!(default_step_limit(9), 1 << 11);
        assert_eq!(default_step_limit(19), 1 << 21);
        assert_eq!(default_step_limit(20), 1 << 22);
        assert_eq!(default_step_limit(64), 1 << 22);
    }

    #[test]
    fn step_limit_monotonic_non_decreasing() {
        let mut prev = 0;
        for w in 0..40 {
            let l = default_step_limit(w);
            assert!(l >= prev, "limit decreased at width={w}: {l} < {prev}");
            prev = l;
        }
    }

    #[test]
    fn pad_to_fills_with_empty() {
        let row = pad_to(&[Cell::PLAIN], 3);
        assert_eq!(row, vec![Cell::PLAIN, Cell::Empty, Cell::Empty]);
        assert_eq!(pad_to(&[Cell::PLAIN, Cell::PLAIN], 1).len(), 2);
    }

    #[test]
    fn aligned_row_offsets_window() {
        let row = aligned_row(1, &[Cell::DIM, Cell::PLAIN], 4);
        assert_eq!(row, vec![Cell::Empty, Cell::DIM, Cell::PLAIN, Cell::Empty]);
        assert_eq!(aligned_row(0, &[], 2), vec![Cell::Empty, Cell::Empty]);
        assert_eq!(
            aligned_row_with(Cell::PLAIN, 2, &[Cell::DIM], 4),
            vec![Cell::PLAIN, Cell::PLAIN, Cell::DIM, Cell::Empty]
        );
    }
}
