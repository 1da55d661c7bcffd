//! Step-by-step traces of textbook algorithms.
//!
//! This crate recomputes classic algorithms while recording one annotated
//! [`TraceStep`](step::TraceStep) per recursive call or iteration, ready for a
//! presentation layer to draw row by row.
//!
//! ## Core idea
//! 1. Describe an algorithm instance by implementing [`TraceProblem`].
//! 2. Let [`TraceEngine`] run it: the walk appends steps to a per-run
//!    context that also owns a fresh memoization set.
//! 3. After the walk, the engine folds the Best Result and flags the steps
//!    that reach it.
//!
//! Runs are synchronous and deterministic. Nothing survives from one run to
//! the next, so re-running on every input change is always safe.
//!
//! ## Quick start
//! ```
//! use algo_trace::{problems::copper_rods::CopperRods, TraceEngine};
//!
//! let prices = [3, 4, 5];
//! let trace = TraceEngine::new(CopperRods::new(&prices, 4)).run().unwrap();
//! assert_eq!(trace.best_value(), Some(12));
//! assert!(trace.steps.iter().all(|s| s.terminal));
//! ```
//!
//! ## Built-in engines
//! The `problems` module contains:
//! - binary search over a sorted sequence,
//! - longest non-decreasing subsequence, exponential and polynomial searches,
//! - maximum subarray, Kadane's scan and two exhaustive framings,
//! - rod cutting ("copper rods") by exhaustive partition.
//!
//! The exhaustive variants are intentionally exponential so that their traces
//! can be compared visually with the efficient ones.

pub mod aggregate;
pub mod builder;
pub mod engine;
pub mod error;
pub mod gallery;
pub mod inputs;
pub mod memo;
pub mod problems;
pub mod session;
pub mod step;
pub mod traits;
pub mod utils;

pub use crate::builder::TraceEngineBuilder;
pub use crate::engine::{generate, Trace, TraceEngine, TraceOf};
pub use crate::error::{TraceError, TraceResult};
pub use crate::traits::TraceProblem;
