//! Generic trace engine (the run driver).
//!
//! One run is a single synchronous pass:
//! 1. create a [`RunContext`] holding an empty memoization set,
//! 2. let the problem walk its algorithm and append steps,
//! 3. drop the memoization set, fold the Best Result and annotate the steps.
//!
//! The engine is completely generic over implementations of [`TraceProblem`].

use serde::{Deserialize, Serialize};

use crate::aggregate::{self, BestResult};
use crate::error::{TraceError, TraceResult};
use crate::memo::MemoSet;
use crate::step::TraceStep;
use crate::traits::TraceProblem;

/// Per-run state handed to [`TraceProblem::walk`].
///
/// Created empty by the engine at the start of every run and consumed when
/// the run finishes, so neither the steps nor the memoization set can leak
/// into another run.
pub struct RunContext<P: TraceProblem> {
    problem: &'static str,
    memo: MemoSet<P::Key>,
    steps: Vec<TraceStep<P::Marker, P::Value>>,
    step_limit: Option<usize>,
}

impl<P: TraceProblem> RunContext<P> {
    fn new(problem: &'static str, step_limit: Option<usize>) -> Self {
        Self {
            problem,
            memo: MemoSet::new(),
            steps: Vec::new(),
            step_limit,
        }
    }

    /// Append a step.
    ///
    /// Fails once the configured step limit would be exceeded.
    pub fn emit(&mut self, step: TraceStep<P::Marker, P::Value>) -> TraceResult<()> {
        if let Some(limit) = self.step_limit {
            if self.steps.len() >= limit {
                return Err(TraceError::StepLimitExceeded {
                    problem: self.problem,
                    limit,
                });
            }
        }
        self.steps.push(step);
        Ok(())
    }

    /// Record a visit to `key`; `true` if it was visited earlier in this run.
    #[inline]
    pub fn visit(&mut self, key: P::Key) -> bool {
        self.memo.visit(key)
    }

    /// Query the memoization set without recording anything.
    #[inline]
    pub fn seen(&self, key: &P::Key) -> bool {
        self.memo.contains(key)
    }

    pub fn memo(&self) -> &MemoSet<P::Key> {
        &self.memo
    }

    /// Number of steps emitted so far.
    pub fn emitted(&self) -> usize {
        self.steps.len()
    }

    fn into_steps(self) -> Vec<TraceStep<P::Marker, P::Value>> {
        self.steps
    }
}

/// Ordered trace plus the finalized Best Result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace<M, V> {
    pub steps: Vec<TraceStep<M, V>>,
    pub best: BestResult<V>,
}

/// The trace type produced for problem `P`.
pub type TraceOf<P> = Trace<<P as TraceProblem>::Marker, <P as TraceProblem>::Value>;

impl<M, V: Copy + Ord> Trace<M, V> {
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[inline]
    pub fn best_value(&self) -> Option<V> {
        self.best.value
    }

    pub fn terminals(&self) -> impl Iterator<Item = &TraceStep<M, V>> {
        self.steps.iter().filter(|s| s.terminal)
    }

    pub fn best_steps(&self) -> impl Iterator<Item = &TraceStep<M, V>> {
        self.steps.iter().filter(|s| s.best)
    }

    pub fn cached_count(&self) -> usize {
        self.steps.iter().filter(|s| s.cached).count()
    }

    /// Values of terminal steps in emission order.
    pub fn terminal_values(&self) -> Vec<V> {
        self.terminals().map(|s| s.value).collect()
    }
}

/// Trace engine for a given problem instance `P`.
///
/// Typical usage:
/// ```
/// use algo_trace::{problems::copper_rods::CopperRods, TraceEngine};
///
/// let prices = [3, 4, 5];
/// let engine = TraceEngine::new(CopperRods::new(&prices, 4));
/// let trace = engine.run().unwrap();
/// assert_eq!(trace.best_value(), Some(12));
/// println!("steps: {}", trace.len());
/// ```
pub struct TraceEngine<P: TraceProblem> {
    problem: P,
    step_limit: Option<usize>,
}

impl<P: TraceProblem> TraceEngine<P> {
    /// Create an engine with no step limit.
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            step_limit: None,
        }
    }

    /// Create an engine that aborts once more than `step_limit` steps are emitted.
    ///
    /// # Panics
    /// Panics if `step_limit == 0`.
    pub fn with_step_limit(problem: P, step_limit: usize) -> Self {
        assert!(step_limit > 0, "step_limit must be positive");
        Self {
            problem,
            step_limit: Some(step_limit),
        }
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Swap in new inputs or parameters; the next run starts from scratch.
    pub fn problem_mut(&mut self) -> &mut P {
        &mut self.problem
    }

    pub fn step_limit(&self) -> Option<usize> {
        self.step_limit
    }

    /// Run one full generation pass.
    ///
    /// Deterministic: identical inputs yield identical traces.
    pub fn run(&self) -> TraceResult<TraceOf<P>> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!(
            "trace_run",
            problem = self.problem.name(),
            width = self.problem.width()
        );
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut ctx = RunContext::<P>::new(self.problem.name(), self.step_limit);
        debug_assert!(ctx.memo().is_empty());

        {
            #[cfg(feature = "tracing")]
            let span = tracing::debug_span!("walk");
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            self.problem.walk(&mut ctx)?;
        }

        let mut steps = ctx.into_steps();

        let best = {
            #[cfg(feature = "tracing")]
            let span = tracing::debug_span!("aggregate", steps = steps.len());
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            let best = aggregate::fold(&steps);
            aggregate::annotate(&mut steps, &best);
            best
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            steps = steps.len(),
            best = ?best.value,
            "trace complete"
        );

        Ok(Trace { steps, best })
    }
}

/// Single-call form: build an unbounded engine for `problem` and run it.
pub fn generate<P: TraceProblem>(problem: P) -> TraceResult<TraceOf<P>> {
    TraceEngine::new(problem).run()
}
