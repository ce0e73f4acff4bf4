//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::sync::Arc;

use unistore::dependency::MockCounterDependency;
use unistore::features::content::{ContentAction, ContentFeature, ContentState};
use unistore::features::counter::{CounterFeature, CounterState};
use unistore::Store;

/// Counter store backed by a fresh mock dependency.
pub fn counter_store(initial: CounterState) -> (Store<CounterFeature>, Arc<MockCounterDependency>) {
    let mock = Arc::new(MockCounterDependency::new());
    let store = Store::new(CounterFeature::new(mock.clone()), initial);
    (store, mock)
}

/// Content store plus a counter scope bound to its counter sub-state.
pub fn content_with_counter(
    initial: ContentState,
) -> (
    Store<ContentFeature>,
    Store<CounterFeature>,
    Arc<MockCounterDependency>,
) {
    let mock = Arc::new(MockCounterDependency::new());
    let content = Store::new(ContentFeature::new(), initial);
    let counter = content.scope(
        ContentFeature::counter_lens(),
        ContentAction::Counter,
        CounterFeature::new(mock.clone()),
    );
    (content, counter, mock)
}
