//! Last-write-wins holder for the most recent trace of one demo.
//!
//! A presentation layer re-invokes generation on every input or parameter
//! change; the session keeps only the newest successful run. Reading before
//! any run has been established is an integration bug and fails fast with
//! [`TraceError::OutOfTree`].

use crate::engine::{TraceEngine, TraceOf};
use crate::error::{TraceError, TraceResult};
use crate::traits::TraceProblem;

pub struct Session<P: TraceProblem> {
    name: &'static str,
    step_limit: Option<usize>,
    latest: Option<TraceOf<P>>,
    runs: u64,
}

impl<P: TraceProblem> Session<P> {
    /// An empty session; `name` is used in diagnostics until the first run.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            step_limit: None,
            latest: None,
            runs: 0,
        }
    }

    /// # Panics
    /// Panics if `step_limit == 0`.
    pub fn with_step_limit(name: &'static str, step_limit: usize) -> Self {
        assert!(step_limit > 0, "step_limit must be positive");
        Self {
            step_limit: Some(step_limit),
            ..Self::new(name)
        }
    }

    /// Regenerate from `problem`, replacing any previous trace.
    ///
    /// A failed run clears the session: nothing from an aborted run, and
    /// nothing stale from an earlier one, stays readable.
    pub fn regenerate(&mut self, problem: P) -> TraceResult<&TraceOf<P>> {
        self.name = problem.name();
        self.latest = None;
        let engine = match self.step_limit {
            Some(limit) => TraceEngine::with_step_limit(problem, limit),
            None => TraceEngine::new(problem),
        };
        let trace = engine.run()?;
        self.runs += 1;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            problem = self.name,
            run = self.runs,
            steps = trace.len(),
            "session replaced trace"
        );

        Ok(&*self.latest.insert(trace))
    }

    /// The most recent trace.
    pub fn latest(&self) -> TraceResult<&TraceOf<P>> {
        self.latest
            .as_ref()
            .ok_or(TraceError::OutOfTree { problem: self.name })
    }

    /// Best value of the most recent trace.
    pub fn best(&self) -> TraceResult<Option<P::Value>> {
        self.latest().map(|t| t.best.value)
    }

    /// Number of successful runs so far.
    pub fn runs(&self) -> u64 {
        self.runs
    }

    /// Drop the current trace, as on a reset.
    pub fn reset(&mut self) {
        self.latest = None;
    }
}
