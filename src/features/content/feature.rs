use async_trait::async_trait;

use crate::features::counter::{CounterAction, CounterDelegate, CounterState};
use crate::store::{Feature, Lens};

use super::action::{ContentAction, ContentBinding};
use super::state::ContentState;

/// Root screen feature. Keeps its own count mirrored into the counter
/// sub-state and tracks whether the counter is presented.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentFeature;

impl ContentFeature {
    pub fn new() -> Self {
        Self
    }

    /// Lens for scoping the counter feature.
    pub fn counter_lens() -> Lens<ContentState, CounterState> {
        Lens::new(
            |state: &ContentState| state.counter.clone(),
            |state: &mut ContentState, counter: CounterState| state.counter = counter,
        )
    }

    /// Lens for binding the presentation flag.
    pub fn presented_lens() -> Lens<ContentState, bool> {
        Lens::new(
            |state: &ContentState| state.is_counter_presented,
            |state: &mut ContentState, presented: bool| state.is_counter_presented = presented,
        )
    }
}

#[async_trait]
impl Feature for ContentFeature {
    type State = ContentState;
    type Action = ContentAction;

    async fn reduce(&self, mut state: ContentState, action: ContentAction) -> ContentState {
        match action {
            ContentAction::Increment => {
                state.count = state.count.saturating_add(1);
                state.counter.count = state.count;
            }
            ContentAction::Decrement => {
                state.count = state.count.saturating_sub(1);
                state.counter.count = state.count;
            }
            ContentAction::PresentCounter => state.is_counter_presented = true,
            ContentAction::Counter(CounterAction::Delegate(CounterDelegate::Dismiss)) => {
                state.is_counter_presented = false;
            }
            // The scope has already written the counter's new state.
            ContentAction::Counter(_) => {}
            ContentAction::Binding(ContentBinding::CounterPresentation) => {
                tracing::debug!(
                    presented = state.is_counter_presented,
                    "Counter presentation changed"
                );
            }
        }
        state
    }
}
