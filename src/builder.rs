use crate::utils::default_step_limit;
use crate::{TraceEngine, TraceProblem};

/// Limit applied by [`TraceEngineBuilder::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Limit {
    Unbounded,
    Default,
    Fixed(usize),
}

pub struct TraceEngineBuilder<P: TraceProblem> {
    problem: P,
    limit: Limit,
}

impl<P: TraceProblem> TraceEngineBuilder<P> {
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            limit: Limit::Unbounded,
        }
    }
    pub fn with_step_limit(mut self, step_limit: usize) -> Self {
        self.limit = Limit::Fixed(step_limit);
        self
    }
    /// Bound the run by [`default_step_limit`] for the problem's width.
    pub fn with_default_limit(mut self) -> Self {
        self.limit = Limit::Default;
        self
    }
    pub fn unbounded(mut self) -> Self {
        self.limit = Limit::Unbounded;
        self
    }
    pub fn build(self) -> TraceEngine<P> {
        match self.limit {
            Limit::Unbounded => TraceEngine::new(self.problem),
            Limit::Fixed(n) => TraceEngine::with_step_limit(self.problem, n),
            Limit::Default => {
                let n = default_step_limit(self.problem.width());
                TraceEngine::with_step_limit(self.problem, n)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TraceEngineBuilder;
    use crate::problems::copper_rods::CopperRods;
    use crate::utils::default_step_limit;

    #[test]
    fn default_limit_follows_width() {
        let prices = [1, 2, 3];
        let engine = TraceEngineBuilder::new(CopperRods::new(&prices, 5))
            .with_default_limit()
            .build();
        assert_eq!(engine.step_limit(), Some(default_step_limit(5)));
    }

    #[test]
    fn unbounded_overrides_earlier_limit() {
        let prices = [1];
        let engine = TraceEngineBuilder::new(CopperRods::new(&prices, 2))
            .with_step_limit(3)
            .unbounded()
            .build();
        assert_eq!(engine.step_limit(), None);
    }
}
