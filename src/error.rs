// =============================================================================
// Engine error taxonomy
// =============================================================================
//
// The engine surfaces every failure synchronously and performs no retries;
// retry policy belongs to whichever collaborator fetched the price history.

use thiserror::Error;

/// Errors produced by [`crate::engine::IndexEngine::compute`].
#[derive(Debug, Error)]
pub enum EngineError {
    /// The equity series is empty; there is nothing to compute.
    #[error("insufficient data: required at least {required} equity day(s), got {got}")]
    InsufficientData { required: usize, got: usize },

    /// The equity and bond series share zero dates. Normal calendar variance
    /// drops individual days from the output; a fully disjoint calendar means
    /// the upstream fetch is broken and callers need to know.
    #[error("alignment failure: equity and bond series share no dates")]
    Alignment,

    /// A series violated the provider contract (sorted ascending, unique
    /// dates, positive finite closes).
    #[error("malformed {series} series: {reason}")]
    MalformedInput {
        series: &'static str,
        reason: &'static str,
    },
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_descriptive() {
        let e = EngineError::InsufficientData { required: 1, got: 0 };
        assert!(e.to_string().contains("insufficient data"));

        let e = EngineError::Alignment;
        assert!(e.to_string().contains("share no dates"));

        let e = EngineError::MalformedInput {
            series: "bond",
            reason: "dates not strictly ascending",
        };
        let msg = e.to_string();
        assert!(msg.contains("bond"));
        assert!(msg.contains("ascending"));
    }
}
