//! Seeded input generators for the demos.
//!
//! Each generator mirrors one demo's reset button. Pass a seeded
//! [`StdRng`](rand::rngs::StdRng) for reproducible traces.

use rand::Rng;

/// Default target for the binary search demo.
pub const SEARCH_TARGET: i64 = 100;
/// Default sequence for both maximum-subarray demos.
pub const SUBARRAY_DEFAULT: [i64; 6] = [-2, 1, -3, 4, 5, 7];
/// Default total length for the rod-cutting demo.
pub const ROD_LENGTH: usize = 6;

/// `len` values drawn from `0..bound`, sorted non-decreasing.
pub fn sorted_values<R: Rng + ?Sized>(rng: &mut R, len: usize, bound: i64) -> Vec<i64> {
    let bound = bound.max(1);
    let mut values: Vec<i64> = (0..len).map(|_| rng.gen_range(0..bound)).collect();
    values.sort_unstable();
    values
}

/// Noisy upward ramp: element `i` is drawn from `base + i` plus or minus `base + i`.
///
/// Produces sequences with long but broken increasing runs.
pub fn ramp_values<R: Rng + ?Sized>(rng: &mut R, len: usize, base: i64) -> Vec<i64> {
    (0..len)
        .map(|i| {
            let centre = base + i as i64;
            rng.gen_range(0..=2 * centre.max(0))
        })
        .collect()
}

/// Signed values in `-spread..=spread`.
pub fn signed_values<R: Rng + ?Sized>(rng: &mut R, len: usize, spread: i64) -> Vec<i64> {
    let spread = spread.abs();
    (0..len).map(|_| rng.gen_range(-spread..=spread)).collect()
}

/// Prices roughly proportional to piece length, within 20% of `10 * len`.
///
/// Integer units stand in for fractional prices; `10` is one whole unit.
pub fn rod_prices<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<i64> {
    (1..=len as i64)
        .map(|l| rng.gen_range(8 * l..=12 * l))
        .collect()
}
