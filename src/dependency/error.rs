use serde::Serialize;
use thiserror::Error;

/// Errors returned by counter dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
pub enum DependencyError {
    /// The dependency could not serve the call
    #[error("{operation} unavailable: {reason}")]
    Unavailable {
        operation: &'static str,
        reason: String,
    },

    /// The result does not fit the counter type
    #[error("{operation} overflowed at {value}")]
    Overflow { operation: &'static str, value: i64 },
}
