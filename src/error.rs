//! Error types shared by the engine, sessions and the gallery.

use thiserror::Error;

/// Failures that abort a trace run or a lookup into run state.
///
/// No variant is recoverable mid-trace: an aborted run returns nothing
/// partial and the caller re-invokes generation after fixing its input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TraceError {
    /// Run state was read before any run established it.
    #[error("trace context for `{problem}` read before any run was established")]
    OutOfTree { problem: &'static str },

    /// The configured ceiling on emitted steps was reached.
    #[error("`{problem}` exceeded the step limit of {limit}")]
    StepLimitExceeded { problem: &'static str, limit: usize },
}

pub type TraceResult<T> = Result<T, TraceError>;

#[cfg(test)]
mod tests {
    use super::TraceError;

    #[test]
    fn messages_name_the_problem() {
        let err = TraceError::OutOfTree {
            problem: "copper_rods",
        };
        assert!(err.to_string().contains("copper_rods"));

        let err = TraceError::StepLimitExceeded {
            problem: "lis_exponential",
            limit: 64,
        };
        let msg = err.to_string();
        assert!(msg.contains("lis_exponential"));
        assert!(msg.contains("64"));
    }
}
