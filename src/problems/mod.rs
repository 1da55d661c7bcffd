//! Traceable algorithm engines.
//!
//! Each module implements [`TraceProblem`](crate::traits::TraceProblem) for
//! one textbook algorithm and exposes a `generate(inputs, params)` shortcut:
//! - [`binary_search`]       : classic halving search over a sorted sequence.
//! - [`lis_exponential`]     : longest non-decreasing subsequence, include/skip O(2^n).
//! - [`lis_polynomial`]      : longest non-decreasing subsequence, extend-or-retract O(n^2) search.
//! - [`max_subarray_kadane`] : maximum subarray, linear scan.
//! - [`max_subarray_brute`]  : maximum subarray, exhaustive extend/restart in two framings.
//! - [`copper_rods`]         : rod cutting by exhaustive partition.

pub mod binary_search;
pub mod copper_rods;
pub mod lis_exponential;
pub mod lis_polynomial;
pub mod max_subarray_brute;
pub mod max_subarray_kadane;
