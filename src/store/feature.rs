//! Feature contract: state, actions and the reduction rule for one slice of UI.

use std::fmt::Debug;

use async_trait::async_trait;

/// Marker trait for feature state.
///
/// States should be:
/// - Values (Clone to create new states, never mutated in place by observers)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
pub trait FeatureState: Clone + PartialEq + Default + Debug + Send + Sync + 'static {}

impl<T> FeatureState for T where T: Clone + PartialEq + Default + Debug + Send + Sync + 'static {}

/// Marker trait for action values.
///
/// Actions represent:
/// - User events (button taps, text edits)
/// - Child events forwarded by a scope
/// - Delegate signals that only concern a parent feature
pub trait Action: Clone + Debug + Send + 'static {}

impl<T> Action for T where T: Clone + Debug + Send + 'static {}

/// An action type with a designated variant for two-way bindings.
///
/// `Store::binding` wraps the binding action it was given with
/// [`BindableAction::binding`] whenever a bound field changes.
pub trait BindableAction: Action {
    /// The binding actions this feature understands.
    type Binding: Clone + Debug + Send + Sync + 'static;

    fn binding(action: Self::Binding) -> Self;
}

/// A feature transforms its state based on actions.
///
/// The feature is the only place where state transitions happen. It holds
/// nothing but injected dependencies; given the same state, action and
/// dependency responses it must produce the same result.
#[async_trait]
pub trait Feature: Send + Sync + 'static {
    /// The state type this feature operates on.
    type State: FeatureState;

    /// The action type this feature handles.
    type Action: Action;

    /// Process an action and return the new state.
    ///
    /// Actions the feature does not care about return `state` unchanged.
    async fn reduce(&self, state: Self::State, action: Self::Action) -> Self::State;
}
