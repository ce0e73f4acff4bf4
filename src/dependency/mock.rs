use async_trait::async_trait;
use parking_lot::Mutex;

use super::{CounterDependency, DependencyError};

/// A call received by [`MockCounterDependency`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterCall {
    Increment(i64),
    Decrement(i64),
}

/// Deterministic counter dependency for tests and previews.
///
/// Answers `value ± 1` without leaving the calling task, records every call
/// and can be switched into an unavailable mode.
#[derive(Debug)]
pub struct MockCounterDependency {
    inner: Mutex<MockInner>,
}

#[derive(Debug)]
struct MockInner {
    available: bool,
    calls: Vec<CounterCall>,
}

impl Default for MockCounterDependency {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCounterDependency {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MockInner {
                available: true,
                calls: Vec::new(),
            }),
        }
    }

    /// A mock that fails every call with `DependencyError::Unavailable`.
    pub fn unavailable() -> Self {
        let mock = Self::new();
        mock.set_available(false);
        mock
    }

    pub fn set_available(&self, available: bool) {
        self.inner.lock().available = available;
    }

    /// Calls received so far, oldest first.
    pub fn calls(&self) -> Vec<CounterCall> {
        self.inner.lock().calls.clone()
    }

    fn record(&self, call: CounterCall, operation: &'static str) -> Result<(), DependencyError> {
        let mut inner = self.inner.lock();
        inner.calls.push(call);
        if inner.available {
            Ok(())
        } else {
            Err(DependencyError::Unavailable {
                operation,
                reason: "mock marked unavailable".to_string(),
            })
        }
    }
}

#[async_trait]
impl CounterDependency for MockCounterDependency {
    async fn increment(&self, value: i64) -> Result<i64, DependencyError> {
        self.record(CounterCall::Increment(value), "increment")?;
        value.checked_add(1).ok_or(DependencyError::Overflow {
            operation: "increment",
            value,
        })
    }

    async fn decrement(&self, value: i64) -> Result<i64, DependencyError> {
        self.record(CounterCall::Decrement(value), "decrement")?;
        value.checked_sub(1).ok_or(DependencyError::Overflow {
            operation: "decrement",
            value,
        })
    }
}
