//! Error types for store dispatch.

use thiserror::Error;

/// Errors that can occur while dispatching an action into a store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store's worker has shut down and accepts no more actions
    #[error("Store is closed")]
    Closed,

    /// The worker dropped the action before reporting completion
    #[error("Action was dropped before its reduction completed")]
    Interrupted,
}
