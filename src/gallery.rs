//! The demo gallery: one entry per engine, with default inputs.
//!
//! [`run_all`] traces every demo independently. Runs share nothing, so with
//! the `parallel` feature they are distributed over rayon's pool; results stay
//! in input order either way.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::builder::TraceEngineBuilder;
use crate::engine::Trace;
use crate::error::TraceResult;
use crate::inputs;
use crate::problems::{
    binary_search::BinarySearch,
    copper_rods::CopperRods,
    lis_exponential::LisExponential,
    lis_polynomial::LisPolynomial,
    max_subarray_brute::{BruteMaxSubarray, Framing},
    max_subarray_kadane::Kadane,
};
use crate::traits::TraceProblem;

/// One demo instance: an engine plus its inputs and parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Demo {
    BinarySearch { inputs: Vec<i64>, target: i64 },
    LisExponential { inputs: Vec<i64> },
    LisPolynomial { inputs: Vec<i64> },
    Kadane { inputs: Vec<i64> },
    BruteMaxSubarray { inputs: Vec<i64>, framing: Framing },
    CopperRods { prices: Vec<i64>, length: usize },
}

/// Summary of one demo run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    pub title: &'static str,
    pub steps: usize,
    pub terminals: usize,
    pub cached: usize,
    pub best: Option<i64>,
    /// Binary search only: whether the final midpoint holds the target.
    pub found: Option<bool>,
}

impl Demo {
    /// The gallery with each demo's default sizes, drawn from `rng`.
    pub fn defaults<R: Rng + ?Sized>(rng: &mut R) -> Vec<Demo> {
        vec![
            Demo::BinarySearch {
                inputs: inputs::sorted_values(rng, 25, 100),
                target: inputs::SEARCH_TARGET,
            },
            Demo::LisExponential {
                inputs: inputs::ramp_values(rng, 14, 15),
            },
            Demo::LisPolynomial {
                inputs: inputs::ramp_values(rng, 4, 15),
            },
            Demo::Kadane {
                inputs: inputs::SUBARRAY_DEFAULT.to_vec(),
            },
            Demo::BruteMaxSubarray {
                inputs: inputs::SUBARRAY_DEFAULT.to_vec(),
                framing: Framing::Subset,
            },
            Demo::BruteMaxSubarray {
                inputs: inputs::SUBARRAY_DEFAULT.to_vec(),
                framing: Framing::Interval,
            },
            Demo::CopperRods {
                prices: inputs::rod_prices(rng, 10),
                length: inputs::ROD_LENGTH,
            },
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Demo::BinarySearch { .. } => "Binary Search",
            Demo::LisExponential { .. } => "LIS O(2^n)",
            Demo::LisPolynomial { .. } => "LIS",
            Demo::Kadane { .. } => "Maximum Subarray (Kadane)",
            Demo::BruteMaxSubarray {
                framing: Framing::Subset,
                ..
            } => "Maximum Subarray",
            Demo::BruteMaxSubarray {
                framing: Framing::Interval,
                ..
            } => "Maximum Subarray O(2^n)",
            Demo::CopperRods { .. } => "Copper Rods",
        }
    }

    /// Trace the demo, bounded by the default step limit for its width.
    pub fn report(&self) -> TraceResult<DemoReport> {
        self.report_with_limit(None)
    }

    /// Trace the demo under `limit` steps, or the width default when `None`.
    pub fn report_with_limit(&self, limit: Option<usize>) -> TraceResult<DemoReport> {
        let title = self.title();
        match self {
            Demo::BinarySearch { inputs, target } => {
                let trace = run_bounded(BinarySearch::new(inputs, *target), limit)?;
                let found = BinarySearch::outcome(&trace).map(|o| o.found);
                Ok(DemoReport {
                    found,
                    ..summarize(title, &trace, |v| v)
                })
            }
            Demo::LisExponential { inputs } => {
                let trace = run_bounded(LisExponential::new(inputs), limit)?;
                Ok(summarize(title, &trace, |v| v as i64))
            }
            Demo::LisPolynomial { inputs } => {
                let trace = run_bounded(LisPolynomial::new(inputs), limit)?;
                Ok(summarize(title, &trace, |v| v as i64))
            }
            Demo::Kadane { inputs } => {
                let trace = run_bounded(Kadane::new(inputs), limit)?;
                Ok(summarize(title, &trace, |v| v))
            }
            Demo::BruteMaxSubarray { inputs, framing } => {
                let trace = run_bounded(BruteMaxSubarray::new(inputs, *framing), limit)?;
                Ok(summarize(title, &trace, |v| v))
            }
            Demo::CopperRods { prices, length } => {
                let trace = run_bounded(CopperRods::new(prices, *length), limit)?;
                Ok(summarize(title, &trace, |v| v))
            }
        }
    }
}

fn run_bounded<P: TraceProblem>(
    problem: P,
    limit: Option<usize>,
) -> TraceResult<Trace<P::Marker, P::Value>> {
    let builder = TraceEngineBuilder::new(problem);
    let builder = match limit {
        Some(n) => builder.with_step_limit(n),
        None => builder.with_default_limit(),
    };
    builder.build().run()
}

fn summarize<M, V: Copy + Ord>(
    title: &'static str,
    trace: &Trace<M, V>,
    widen: impl Fn(V) -> i64,
) -> DemoReport {
    DemoReport {
        title,
        steps: trace.len(),
        terminals: trace.terminals().count(),
        cached: trace.cached_count(),
        best: trace.best_value().map(widen),
        found: None,
    }
}

/// Trace every demo; one result per demo, in order.
#[cfg(feature = "parallel")]
pub fn run_all(demos: &[Demo]) -> Vec<TraceResult<DemoReport>> {
    demos.par_iter().map(Demo::report).collect()
}

/// Trace every demo; one result per demo, in order.
#[cfg(not(feature = "parallel"))]
pub fn run_all(demos: &[Demo]) -> Vec<TraceResult<DemoReport>> {
    demos.iter().map(Demo::report).collect()
}

/// Sequential reference for [`run_all`].
pub fn run_all_sequential(demos: &[Demo]) -> Vec<TraceResult<DemoReport>> {
    demos.iter().map(Demo::report).collect()
}
