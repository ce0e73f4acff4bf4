use std::time::Duration;

use async_trait::async_trait;

use crate::config::ServiceConfig;

use super::{CounterDependency, DependencyError};

/// Production counter service.
///
/// Runs the computation on the blocking pool, away from the task that
/// awaits it, the way a real service call would leave the caller's
/// executor free.
#[derive(Debug, Clone, Default)]
pub struct CounterService {
    latency: Duration,
}

impl CounterService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        Self {
            latency: Duration::from_millis(config.latency_ms),
        }
    }

    async fn compute(
        &self,
        operation: &'static str,
        value: i64,
        step: fn(i64) -> Option<i64>,
    ) -> Result<i64, DependencyError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let result = tokio::task::spawn_blocking(move || step(value))
            .await
            .map_err(|err| DependencyError::Unavailable {
                operation,
                reason: err.to_string(),
            })?;

        result.ok_or(DependencyError::Overflow { operation, value })
    }
}

#[async_trait]
impl CounterDependency for CounterService {
    async fn increment(&self, value: i64) -> Result<i64, DependencyError> {
        self.compute("increment", value, |v| v.checked_add(1)).await
    }

    async fn decrement(&self, value: i64) -> Result<i64, DependencyError> {
        self.compute("decrement", value, |v| v.checked_sub(1)).await
    }
}
