use std::sync::Arc;

use async_trait::async_trait;

use crate::dependency::{CounterDependency, DependencyError};
use crate::store::{Feature, Lens};

use super::action::{CounterAction, CounterBinding};
use super::state::CounterState;

/// Counter feature. Count changes go through the injected dependency.
#[derive(Clone)]
pub struct CounterFeature {
    dependency: Arc<dyn CounterDependency>,
}

impl CounterFeature {
    pub fn new(dependency: Arc<dyn CounterDependency>) -> Self {
        Self { dependency }
    }

    /// Lens for binding the text field.
    pub fn text_lens() -> Lens<CounterState, String> {
        Lens::new(
            |state: &CounterState| state.text.clone(),
            |state: &mut CounterState, text: String| state.text = text,
        )
    }
}

#[async_trait]
impl Feature for CounterFeature {
    type State = CounterState;
    type Action = CounterAction;

    async fn reduce(&self, mut state: CounterState, action: CounterAction) -> CounterState {
        match action {
            CounterAction::Increment => {
                let result = self.dependency.increment(state.count).await;
                apply_count(&mut state, result);
            }
            CounterAction::Decrement => {
                let result = self.dependency.decrement(state.count).await;
                apply_count(&mut state, result);
            }
            CounterAction::Binding(CounterBinding::TextChanged) => {
                state.text_length = state.text.chars().count();
            }
            CounterAction::Delegate(_) => {}
        }
        state
    }
}

fn apply_count(state: &mut CounterState, result: Result<i64, DependencyError>) {
    match result {
        Ok(count) => {
            state.count = count;
            state.failure = None;
        }
        Err(error) => {
            tracing::warn!(error = %error, count = state.count, "Counter dependency failed, keeping count");
            state.failure = Some(error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency::MockCounterDependency;
    use crate::features::counter::CounterDelegate;

    fn feature() -> CounterFeature {
        CounterFeature::new(Arc::new(MockCounterDependency::new()))
    }

    #[tokio::test]
    async fn increment_uses_dependency() {
        let state = feature()
            .reduce(CounterState::default(), CounterAction::Increment)
            .await;
        assert_eq!(state.count, 1);
    }

    #[tokio::test]
    async fn decrement_below_zero() {
        let state = feature()
            .reduce(CounterState::default(), CounterAction::Decrement)
            .await;
        assert_eq!(state.count, -1);
    }

    #[tokio::test]
    async fn text_binding_counts_characters() {
        let mut state = CounterState::default();
        state.text = "héllo".to_string();
        let state = feature()
            .reduce(state, CounterAction::Binding(CounterBinding::TextChanged))
            .await;
        assert_eq!(state.text_length, 5);
    }

    #[tokio::test]
    async fn delegate_is_a_no_op() {
        let state = CounterState {
            count: 3,
            ..CounterState::with_text("abc")
        };
        let next = feature()
            .reduce(state.clone(), CounterAction::Delegate(CounterDelegate::Dismiss))
            .await;
        assert_eq!(next, state);
    }

    #[tokio::test]
    async fn failure_keeps_count_and_is_cleared_on_success() {
        let mock = Arc::new(MockCounterDependency::unavailable());
        let feature = CounterFeature::new(mock.clone());

        let state = feature
            .reduce(CounterState::new(4), CounterAction::Increment)
            .await;
        assert_eq!(state.count, 4);
        assert!(state.has_failed());

        mock.set_available(true);
        let state = feature.reduce(state, CounterAction::Increment).await;
        assert_eq!(state.count, 5);
        assert!(!state.has_failed());
    }
}
