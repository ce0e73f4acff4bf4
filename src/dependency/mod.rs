//! Dependency boundary for the counter feature.
//!
//! Features only see the [`CounterDependency`] trait. The production
//! [`CounterService`] and the deterministic [`MockCounterDependency`] are
//! interchangeable behind it.

mod error;
mod mock;
mod service;

use async_trait::async_trait;

pub use error::DependencyError;
pub use mock::{CounterCall, MockCounterDependency};
pub use service::CounterService;

/// Async operations that compute the next counter value.
#[async_trait]
pub trait CounterDependency: Send + Sync {
    /// Returns `value + 1`.
    async fn increment(&self, value: i64) -> Result<i64, DependencyError>;

    /// Returns `value - 1`.
    async fn decrement(&self, value: i64) -> Result<i64, DependencyError>;
}
